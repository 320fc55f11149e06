//! Filesystem-backed patient store.
//!
//! Records are stored as JSON files in a sharded directory structure:
//!
//! ```text
//! <patient_data_dir>/patients/<s1>/<s2>/<32hex-uuid>/patient.json
//! ```
//!
//! where `s1`/`s2` are the first four hex characters of the UUID's simple
//! form, preventing very large fan-out in a single directory.
//!
//! Email uniqueness is enforced here: insert and update re-check the
//! constraint under an internal write lock before committing, so the
//! service-level check can stay a fast path.

use crate::config::CoreConfig;
use crate::patient::{NewPatient, Patient};
use crate::store::{PatientStore, StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use uuid::Uuid;

const PATIENT_FILE_NAME: &str = "patient.json";

/// Sharded-JSON filesystem store for patient records.
pub struct FsPatientStore {
    cfg: Arc<CoreConfig>,
    // Serialises the uniqueness check with the subsequent write.
    write_lock: Mutex<()>,
}

impl FsPatientStore {
    /// Creates a store rooted at the configured patient data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            write_lock: Mutex::new(()),
        }
    }

    fn record_dir(&self, id: Uuid) -> PathBuf {
        let simple = id.simple().to_string();
        self.cfg
            .patients_dir()
            .join(&simple[0..2])
            .join(&simple[2..4])
            .join(&simple)
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.record_dir(id).join(PATIENT_FILE_NAME)
    }

    fn write_record(&self, patient: &Patient) -> StoreResult<()> {
        let dir = self.record_dir(patient.id);
        fs::create_dir_all(&dir).map_err(StoreError::DirCreation)?;

        let json = serde_json::to_string_pretty(patient).map_err(StoreError::Serialization)?;
        fs::write(dir.join(PATIENT_FILE_NAME), json).map_err(StoreError::FileWrite)
    }

    fn read_record(&self, path: &Path) -> StoreResult<Patient> {
        let contents = fs::read_to_string(path).map_err(StoreError::FileRead)?;
        serde_json::from_str(&contents).map_err(StoreError::Deserialization)
    }
}

impl PatientStore for FsPatientStore {
    /// Traverses the sharded directory structure and reads every
    /// `patient.json` found. Files that cannot be parsed are logged as
    /// warnings and skipped.
    fn find_all(&self) -> StoreResult<Vec<Patient>> {
        let patients_dir = self.cfg.patients_dir();

        let mut patients = Vec::new();

        let s1_iter = match fs::read_dir(&patients_dir) {
            Ok(it) => it,
            Err(_) => return Ok(patients),
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };

                for id_ent in id_iter.flatten() {
                    let record_path = id_ent.path().join(PATIENT_FILE_NAME);
                    if !record_path.is_file() {
                        continue;
                    }

                    match self.read_record(&record_path) {
                        Ok(patient) => patients.push(patient),
                        Err(e) => {
                            tracing::warn!(
                                "failed to parse patient record: {} - {}",
                                record_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        Ok(patients)
    }

    fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Patient>> {
        let path = self.record_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        self.read_record(&path).map(Some)
    }

    fn exists_by_email(&self, email: &str) -> StoreResult<bool> {
        Ok(self
            .find_all()?
            .iter()
            .any(|patient| patient.email.as_str() == email))
    }

    fn insert(&self, record: NewPatient) -> StoreResult<Patient> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.exists_by_email(record.email.as_str())? {
            return Err(StoreError::DuplicateEmail(record.email.to_string()));
        }

        let patient = Patient {
            id: Uuid::new_v4(),
            name: record.name,
            email: record.email,
            address: record.address,
            date_of_birth: record.date_of_birth,
            registered_date: record.registered_date,
        };

        self.write_record(&patient)?;
        Ok(patient)
    }

    fn update(&self, patient: Patient) -> StoreResult<Patient> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if !self.record_path(patient.id).is_file() {
            return Err(StoreError::MissingRecord(patient.id));
        }

        let taken = self
            .find_all()?
            .iter()
            .any(|other| other.id != patient.id && other.email == patient.email);
        if taken {
            return Err(StoreError::DuplicateEmail(patient.email.to_string()));
        }

        self.write_record(&patient)?;
        Ok(patient)
    }

    fn delete_by_id(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let dir = self.record_dir(id);
        if !dir.join(PATIENT_FILE_NAME).is_file() {
            return Err(StoreError::MissingRecord(id));
        }

        fs::remove_dir_all(&dir).map_err(StoreError::Delete)
    }
}
