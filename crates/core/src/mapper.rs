//! Translation between external patient shapes and the stored record.
//!
//! Pure functions with no side effects. The only failure mode is a date of
//! birth that does not parse as an ISO-8601 calendar date.

use crate::error::{PatientError, PatientResult};
use crate::patient::{NewPatient, Patient, PatientInput, PatientView};
use chrono::{NaiveDate, Utc};
use patient_types::NonEmptyText;

/// Renders a stored patient as its external view.
///
/// The identifier is rendered in canonical hyphenated UUID form and dates in
/// ISO-8601. The registration date is internal-only and not included.
pub fn to_view(patient: &Patient) -> PatientView {
    PatientView {
        id: patient.id.to_string(),
        name: patient.name.to_string(),
        email: patient.email.to_string(),
        address: patient.address.to_string(),
        date_of_birth: patient.date_of_birth.to_string(),
    }
}

/// Maps validated input to a record ready for insertion.
///
/// The registration date is stamped with the current UTC date; the
/// identifier is left for the store to assign.
///
/// # Errors
///
/// Returns [`PatientError::InvalidDateFormat`] if the date of birth text is
/// not a valid ISO-8601 date.
pub fn to_record(input: PatientInput) -> PatientResult<NewPatient> {
    let date_of_birth = parse_date_of_birth(&input.date_of_birth)?;

    Ok(NewPatient {
        name: input.name,
        email: input.email,
        address: input.address,
        date_of_birth,
        registered_date: Utc::now().date_naive(),
    })
}

/// Parses a date of birth from ISO-8601 text.
pub(crate) fn parse_date_of_birth(text: &NonEmptyText) -> PatientResult<NaiveDate> {
    text.as_str()
        .parse::<NaiveDate>()
        .map_err(PatientError::InvalidDateFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_input() -> PatientInput {
        PatientInput::new("Ana", "ana@x.com", "1 Main St", "1990-01-01")
            .expect("sample input should be valid")
    }

    #[test]
    fn to_record_parses_date_and_stamps_registration() {
        let record = to_record(sample_input()).expect("to_record should succeed");

        assert_eq!(
            record.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
        );
        assert_eq!(record.registered_date, Utc::now().date_naive());
    }

    #[test]
    fn to_record_rejects_unparseable_date() {
        let input = PatientInput::new("Ana", "ana@x.com", "1 Main St", "01/01/1990")
            .expect("input with bad date text is still field-valid");

        let err = to_record(input).expect_err("non-ISO date should fail");
        assert!(matches!(err, PatientError::InvalidDateFormat(_)));
    }

    #[test]
    fn view_round_trip_preserves_fields() {
        let input = sample_input();
        let record = to_record(input.clone()).expect("to_record should succeed");
        let patient = Patient {
            id: Uuid::new_v4(),
            name: record.name,
            email: record.email,
            address: record.address,
            date_of_birth: record.date_of_birth,
            registered_date: record.registered_date,
        };

        let view = to_view(&patient);
        assert_eq!(view.id, patient.id.to_string());
        assert_eq!(view.name, input.name.as_str());
        assert_eq!(view.email, input.email.as_str());
        assert_eq!(view.address, input.address.as_str());
        assert_eq!(view.date_of_birth, input.date_of_birth.as_str());
    }
}
