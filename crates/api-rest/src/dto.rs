//! Request and response payloads for the patients API.
//!
//! Field names follow the external JSON contract (camelCase). Requests are
//! decoded as raw text fields and validated into a [`PatientInput`] before
//! they reach the service.

use patient_core::{PatientInput, PatientView, ValidationError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create/update payload for a patient.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientReq {
    pub name: String,
    pub email: String,
    pub address: String,
    /// ISO-8601 calendar date, e.g. `1990-01-01`.
    pub date_of_birth: String,
}

impl PatientReq {
    /// Validates the raw payload fields into service input.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first invalid field.
    pub fn into_input(self) -> Result<PatientInput, ValidationError> {
        PatientInput::new(&self.name, &self.email, &self.address, &self.date_of_birth)
    }
}

/// A patient as rendered to API callers.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientRes {
    pub id: String,
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
}

impl From<PatientView> for PatientRes {
    fn from(view: PatientView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            email: view.email,
            address: view.address,
            date_of_birth: view.date_of_birth,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(name: &str, email: &str, address: &str, date_of_birth: &str) -> PatientReq {
        PatientReq {
            name: name.to_string(),
            email: email.to_string(),
            address: address.to_string(),
            date_of_birth: date_of_birth.to_string(),
        }
    }

    #[test]
    fn valid_request_becomes_input() {
        let input = req("Ana", "ana@x.com", "1 Main St", "1990-01-01")
            .into_input()
            .expect("valid request should validate");
        assert_eq!(input.name.as_str(), "Ana");
    }

    #[test]
    fn invalid_fields_are_rejected() {
        assert!(matches!(
            req("", "ana@x.com", "1 Main St", "1990-01-01").into_input(),
            Err(ValidationError::Name(_))
        ));
        assert!(matches!(
            req("Ana", "nope", "1 Main St", "1990-01-01").into_input(),
            Err(ValidationError::Email(_))
        ));
        assert!(matches!(
            req("Ana", "ana@x.com", "", "1990-01-01").into_input(),
            Err(ValidationError::Address(_))
        ));
        assert!(matches!(
            req("Ana", "ana@x.com", "1 Main St", " ").into_input(),
            Err(ValidationError::DateOfBirth(_))
        ));
    }
}
