use crate::store::StoreError;
use patient_types::{EmailError, TextError};
use uuid::Uuid;

/// Field-level validation failures for patient input.
///
/// Produced by [`crate::PatientInput::new`]; the boundary applies this
/// before the service is invoked.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid name: {0}")]
    Name(#[source] TextError),
    #[error("invalid email: {0}")]
    Email(#[source] EmailError),
    #[error("invalid address: {0}")]
    Address(#[source] TextError),
    #[error("invalid date of birth: {0}")]
    DateOfBirth(#[source] TextError),
}

/// Domain errors for patient operations.
///
/// Each variant is terminal for the request; the service never retries.
/// Store connectivity faults are carried unchanged in [`PatientError::Store`].
#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid date of birth: {0}")]
    InvalidDateFormat(#[source] chrono::ParseError),
    #[error("a patient with email {0} already exists")]
    EmailAlreadyExists(String),
    #[error("patient not found with id: {0}")]
    PatientNotFound(Uuid),
    #[error("patient store failure: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for PatientError {
    fn from(err: StoreError) -> Self {
        // The store is the authoritative uniqueness/existence guard; its
        // constraint violations surface as the matching domain kinds.
        match err {
            StoreError::DuplicateEmail(email) => PatientError::EmailAlreadyExists(email),
            StoreError::MissingRecord(id) => PatientError::PatientNotFound(id),
            other => PatientError::Store(other),
        }
    }
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
