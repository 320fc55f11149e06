//! # API REST
//!
//! REST boundary for the patient management service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Decoding and validating payloads before the service is invoked
//! - Mapping service error kinds to distinct status codes
//!
//! All business rules live in `patient-core`; this crate only translates
//! between HTTP and the service.

#![warn(rust_2018_idioms)]

pub mod dto;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use patient_core::{PatientError, PatientService};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::dto::{HealthRes, PatientReq, PatientRes};

/// Application state shared across REST API handlers.
#[derive(Clone)]
struct AppState {
    patient_service: PatientService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_patients, create_patient, update_patient, delete_patient),
    components(schemas(HealthRes, PatientReq, PatientRes))
)]
struct ApiDoc;

/// Builds the patients API router.
///
/// Mounts the patient CRUD routes plus `/health`, merges the Swagger UI at
/// `/swagger-ui` (OpenAPI JSON at `/api-docs/openapi.json`) and applies a
/// permissive CORS layer.
pub fn router(patient_service: PatientService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(create_patient))
        .route("/patients/:id", put(update_patient).delete(delete_patient))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(AppState { patient_service })
}

/// Maps a service error to the response for the caller.
///
/// Bad input → 400, email conflict → 409, missing patient → 404, store
/// faults → 500. Client errors log at `warn`, store faults at `error`.
fn error_response(context: &str, err: &PatientError) -> (StatusCode, &'static str) {
    match err {
        PatientError::Validation(_) | PatientError::InvalidDateFormat(_) => {
            tracing::warn!("{} rejected: {}", context, err);
            (StatusCode::BAD_REQUEST, "Invalid patient payload")
        }
        PatientError::EmailAlreadyExists(_) => {
            tracing::warn!("{} conflict: {}", context, err);
            (
                StatusCode::CONFLICT,
                "A patient with this email already exists",
            )
        }
        PatientError::PatientNotFound(_) => {
            tracing::warn!("{}: {}", context, err);
            (StatusCode::NOT_FOUND, "Patient not found")
        }
        PatientError::Store(_) => {
            tracing::error!("{} store error: {:?}", context, err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "patient-ops is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "List of patients", body = [PatientRes]),
        (status = 500, description = "Internal server error")
    )
)]
/// List all registered patients
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientRes>>, (StatusCode, &'static str)> {
    match state.patient_service.list() {
        Ok(views) => Ok(Json(views.into_iter().map(PatientRes::from).collect())),
        Err(e) => Err(error_response("List patients", &e)),
    }
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = PatientReq,
    responses(
        (status = 200, description = "Patient created", body = PatientRes),
        (status = 400, description = "Invalid input data"),
        (status = 409, description = "A patient with this email already exists"),
        (status = 500, description = "Internal server error")
    )
)]
/// Register a new patient
///
/// Validates the payload fields, then creates the patient. The generated
/// identifier and registration date are assigned by the system.
///
/// # Errors
/// Returns `400` on invalid field content or an unparseable date of birth,
/// `409` if the email is already registered, `500` on store faults.
#[axum::debug_handler]
async fn create_patient(
    State(state): State<AppState>,
    Json(req): Json<PatientReq>,
) -> Result<Json<PatientRes>, (StatusCode, &'static str)> {
    let input = match req.into_input() {
        Ok(input) => input,
        Err(e) => return Err(error_response("Create patient", &e.into())),
    };

    match state.patient_service.create(input) {
        Ok(view) => Ok(Json(PatientRes::from(view))),
        Err(e) => Err(error_response("Create patient", &e)),
    }
}

#[utoipa::path(
    put,
    path = "/patients/{id}",
    request_body = PatientReq,
    params(
        ("id" = String, Path, description = "Unique identifier of the patient to update")
    ),
    responses(
        (status = 200, description = "Patient updated", body = PatientRes),
        (status = 400, description = "Invalid input data"),
        (status = 404, description = "Patient not found"),
        (status = 409, description = "A patient with this email already exists"),
        (status = 500, description = "Internal server error")
    )
)]
/// Update an existing patient
///
/// Replaces name, email, address and date of birth. The identifier and
/// registration date never change. Keeping the patient's current email is
/// allowed; taking another patient's email is a conflict.
///
/// # Errors
/// Returns `400` on invalid field content or an unparseable date of birth,
/// `404` if no patient has this id, `409` if the email belongs to a
/// different patient, `500` on store faults.
#[axum::debug_handler]
async fn update_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
    Json(req): Json<PatientReq>,
) -> Result<Json<PatientRes>, (StatusCode, &'static str)> {
    let input = match req.into_input() {
        Ok(input) => input,
        Err(e) => return Err(error_response("Update patient", &e.into())),
    };

    match state.patient_service.update(id, input) {
        Ok(view) => Ok(Json(PatientRes::from(view))),
        Err(e) => Err(error_response("Update patient", &e)),
    }
}

#[utoipa::path(
    delete,
    path = "/patients/{id}",
    params(
        ("id" = String, Path, description = "Unique identifier of the patient to delete")
    ),
    responses(
        (status = 204, description = "Patient deleted"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    )
)]
/// Delete a patient record
///
/// # Errors
/// Returns `404` if no patient has this id, `500` on store faults.
#[axum::debug_handler]
async fn delete_patient(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<Uuid>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    match state.patient_service.delete(id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response("Delete patient", &e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_core::{StoreError, ValidationError};
    use patient_types::TextError;

    #[test]
    fn error_kinds_map_to_distinct_statuses() {
        let validation = PatientError::Validation(ValidationError::Name(TextError::Empty));
        assert_eq!(
            error_response("test", &validation).0,
            StatusCode::BAD_REQUEST
        );

        let bad_date = "not-a-date".parse::<chrono::NaiveDate>().unwrap_err();
        assert_eq!(
            error_response("test", &PatientError::InvalidDateFormat(bad_date)).0,
            StatusCode::BAD_REQUEST
        );

        let conflict = PatientError::EmailAlreadyExists("ana@x.com".into());
        assert_eq!(error_response("test", &conflict).0, StatusCode::CONFLICT);

        let missing = PatientError::PatientNotFound(Uuid::new_v4());
        assert_eq!(error_response("test", &missing).0, StatusCode::NOT_FOUND);

        let fault = PatientError::Store(StoreError::FileRead(std::io::Error::other("down")));
        assert_eq!(
            error_response("test", &fault).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
