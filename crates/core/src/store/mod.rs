//! Persistence contract for patient records.
//!
//! The core consumes storage through the [`PatientStore`] trait only. The
//! store owns the durable invariants: one record per identifier and the
//! unique constraint on email. The service-level uniqueness check is a fast
//! path for a clean error before the write is attempted; the store's check
//! is authoritative.

use crate::patient::{NewPatient, Patient};
use uuid::Uuid;

pub mod fs;

pub use fs::FsPatientStore;

/// Errors raised by a patient store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a patient with email {0} is already stored")]
    DuplicateEmail(String),
    #[error("no stored patient with id {0}")]
    MissingRecord(Uuid),
    #[error("failed to create patient directory: {0}")]
    DirCreation(#[source] std::io::Error),
    #[error("failed to write patient file: {0}")]
    FileWrite(#[source] std::io::Error),
    #[error("failed to read patient file: {0}")]
    FileRead(#[source] std::io::Error),
    #[error("failed to delete patient record: {0}")]
    Delete(#[source] std::io::Error),
    #[error("failed to serialize patient: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("failed to deserialize patient: {0}")]
    Deserialization(#[source] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Durable keyed storage for patient records.
///
/// Writes are atomic per record. `insert` assigns the identifier; `update`
/// replaces an existing record in place. Both uphold the email unique
/// constraint and fail with [`StoreError::DuplicateEmail`] on violation.
pub trait PatientStore: Send + Sync {
    /// Enumerates all stored patients, in store order.
    fn find_all(&self) -> StoreResult<Vec<Patient>>;

    /// Looks up a patient by identifier.
    fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Patient>>;

    /// Returns whether any stored patient has the given email.
    fn exists_by_email(&self, email: &str) -> StoreResult<bool>;

    /// Inserts a new record, assigning a fresh identifier.
    fn insert(&self, record: NewPatient) -> StoreResult<Patient>;

    /// Replaces the stored record with the same identifier.
    ///
    /// Fails with [`StoreError::MissingRecord`] if no such record exists.
    fn update(&self, patient: Patient) -> StoreResult<Patient>;

    /// Removes a record permanently.
    ///
    /// Fails with [`StoreError::MissingRecord`] if no such record exists.
    fn delete_by_id(&self, id: Uuid) -> StoreResult<()>;
}
