//! Patient record shapes.
//!
//! Three representations cross the core:
//! - [`Patient`] / [`NewPatient`]: the persisted record (with and without a
//!   store-assigned identifier),
//! - [`PatientInput`]: validated external input for create/update,
//! - [`PatientView`]: the textual rendering returned to callers.

use crate::error::ValidationError;
use chrono::NaiveDate;
use patient_types::{EmailAddress, NonEmptyText, PatientName};
use uuid::Uuid;

/// A persisted patient record.
///
/// `id` is assigned by the store on insert and immutable thereafter;
/// `registered_date` is set once at creation and never modified.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: PatientName,
    pub email: EmailAddress,
    pub address: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub registered_date: NaiveDate,
}

/// A patient record that has not been inserted yet: no identifier.
///
/// Produced by the mapper; the store assigns the identifier on insert.
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: PatientName,
    pub email: EmailAddress,
    pub address: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub registered_date: NaiveDate,
}

/// Validated input for creating or updating a patient.
///
/// Construction through [`PatientInput::new`] is the field-level validation
/// step: the service assumes any `PatientInput` it receives is well-formed.
/// The date of birth stays as text here; parsing it into a date value is the
/// mapper's job and has its own failure mode.
#[derive(Debug, Clone)]
pub struct PatientInput {
    pub name: PatientName,
    pub email: EmailAddress,
    pub address: NonEmptyText,
    pub date_of_birth: NonEmptyText,
}

impl PatientInput {
    /// Validates raw field text into a `PatientInput`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field:
    /// - name empty or over [`PatientName::MAX_LEN`] characters,
    /// - email not syntactically valid,
    /// - address empty,
    /// - date of birth text empty.
    pub fn new(
        name: &str,
        email: &str,
        address: &str,
        date_of_birth: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PatientName::new(name).map_err(ValidationError::Name)?,
            email: EmailAddress::parse(email).map_err(ValidationError::Email)?,
            address: NonEmptyText::new(address).map_err(ValidationError::Address)?,
            date_of_birth: NonEmptyText::new(date_of_birth)
                .map_err(ValidationError::DateOfBirth)?,
        })
    }
}

/// The external-facing rendering of a patient record.
///
/// Every field is text; `registered_date` is internal-only and not exposed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PatientView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_accepts_valid_fields() {
        let input = PatientInput::new("Ana", "ana@x.com", "1 Main St", "1990-01-01")
            .expect("valid input should be accepted");
        assert_eq!(input.name.as_str(), "Ana");
        assert_eq!(input.email.as_str(), "ana@x.com");
        assert_eq!(input.address.as_str(), "1 Main St");
        assert_eq!(input.date_of_birth.as_str(), "1990-01-01");
    }

    #[test]
    fn input_rejects_each_invalid_field() {
        let err = PatientInput::new("", "ana@x.com", "1 Main St", "1990-01-01")
            .expect_err("empty name should be rejected");
        assert!(matches!(err, ValidationError::Name(_)));

        let long_name = "a".repeat(101);
        let err = PatientInput::new(&long_name, "ana@x.com", "1 Main St", "1990-01-01")
            .expect_err("overlong name should be rejected");
        assert!(matches!(err, ValidationError::Name(_)));

        let err = PatientInput::new("Ana", "not-an-email", "1 Main St", "1990-01-01")
            .expect_err("bad email should be rejected");
        assert!(matches!(err, ValidationError::Email(_)));

        let err = PatientInput::new("Ana", "ana@x.com", " ", "1990-01-01")
            .expect_err("blank address should be rejected");
        assert!(matches!(err, ValidationError::Address(_)));

        let err = PatientInput::new("Ana", "ana@x.com", "1 Main St", "")
            .expect_err("blank date of birth should be rejected");
        assert!(matches!(err, ValidationError::DateOfBirth(_)));
    }
}
