//! Patient management service.
//!
//! This module owns the business rules for patient records: email
//! uniqueness on create and update, existence checks for update and delete,
//! and the mapping between input, stored record and view. All state lives in
//! the store; the service itself is stateless between invocations.

use crate::error::{PatientError, PatientResult};
use crate::mapper;
use crate::patient::{PatientInput, PatientView};
use crate::store::PatientStore;
use std::sync::Arc;
use uuid::Uuid;

/// Pure patient record operations - no API concerns.
#[derive(Clone)]
pub struct PatientService {
    store: Arc<dyn PatientStore>,
}

impl PatientService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    /// Lists all patients, in store-enumeration order.
    ///
    /// # Errors
    ///
    /// Store faults propagate as [`PatientError::Store`].
    pub fn list(&self) -> PatientResult<Vec<PatientView>> {
        let patients = self.store.find_all()?;
        Ok(patients.iter().map(mapper::to_view).collect())
    }

    /// Creates a new patient record.
    ///
    /// Field-level validation has already happened when the `PatientInput`
    /// was constructed; this checks email uniqueness, maps the input to a
    /// record and inserts it. The store assigns the identifier and upholds
    /// the unique constraint authoritatively; the check here exists to
    /// produce a clean error before attempting the write.
    ///
    /// # Errors
    ///
    /// - [`PatientError::EmailAlreadyExists`] if a patient with this email
    ///   is already stored (no record is created),
    /// - [`PatientError::InvalidDateFormat`] if the date of birth text is
    ///   not an ISO-8601 date,
    /// - [`PatientError::Store`] on store faults.
    pub fn create(&self, input: PatientInput) -> PatientResult<PatientView> {
        if self.store.exists_by_email(input.email.as_str())? {
            return Err(PatientError::EmailAlreadyExists(input.email.to_string()));
        }

        let created = self.store.insert(mapper::to_record(input)?)?;
        tracing::info!("created patient {}", created.id);

        Ok(mapper::to_view(&created))
    }

    /// Updates an existing patient record.
    ///
    /// Replaces name, address, email and date of birth; the identifier and
    /// registration date are never touched. An update that keeps the
    /// patient's current email succeeds even though that email exists in
    /// the store: the uniqueness check excludes the record being updated.
    ///
    /// # Errors
    ///
    /// - [`PatientError::PatientNotFound`] if no patient has this id,
    /// - [`PatientError::EmailAlreadyExists`] if the new email belongs to a
    ///   different patient,
    /// - [`PatientError::InvalidDateFormat`] if the date of birth text is
    ///   not an ISO-8601 date,
    /// - [`PatientError::Store`] on store faults.
    pub fn update(&self, id: Uuid, input: PatientInput) -> PatientResult<PatientView> {
        let Some(mut patient) = self.store.find_by_id(id)? else {
            return Err(PatientError::PatientNotFound(id));
        };

        if input.email != patient.email && self.store.exists_by_email(input.email.as_str())? {
            return Err(PatientError::EmailAlreadyExists(input.email.to_string()));
        }

        patient.date_of_birth = mapper::parse_date_of_birth(&input.date_of_birth)?;
        patient.name = input.name;
        patient.address = input.address;
        patient.email = input.email;

        let updated = self.store.update(patient)?;
        tracing::info!("updated patient {}", updated.id);

        Ok(mapper::to_view(&updated))
    }

    /// Deletes a patient record permanently.
    ///
    /// # Errors
    ///
    /// - [`PatientError::PatientNotFound`] if no patient has this id,
    /// - [`PatientError::Store`] on store faults.
    pub fn delete(&self, id: Uuid) -> PatientResult<()> {
        if self.store.find_by_id(id)?.is_none() {
            return Err(PatientError::PatientNotFound(id));
        }

        self.store.delete_by_id(id)?;
        tracing::info!("deleted patient {}", id);

        Ok(())
    }
}
