//! # Patient Core
//!
//! Core business logic for the patient management service.
//!
//! This crate contains pure data operations and the persistence contract:
//! - Patient creation, listing, update and deletion rules
//! - Email uniqueness enforcement
//! - Mapping between external input/view shapes and the stored record
//! - The [`store::PatientStore`] contract plus a sharded-JSON filesystem store
//!
//! **No API concerns**: HTTP routing, status codes and payload decoding
//! belong in `api-rest`.

pub mod config;
pub mod error;
pub mod mapper;
pub mod patient;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use error::{PatientError, PatientResult, ValidationError};
pub use patient::{NewPatient, Patient, PatientInput, PatientView};
pub use service::PatientService;
pub use store::{FsPatientStore, PatientStore, StoreError, StoreResult};
