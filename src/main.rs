//! Patient management REST server.
//!
//! Resolves configuration from the environment once at startup, wires the
//! filesystem store into the patient service and serves the REST API.

use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use patient_core::{CoreConfig, FsPatientStore, PatientService};

/// Main entry point for the patient-ops REST server
///
/// # Environment Variables
/// - `PATIENT_OPS_ADDR`: server address (default: "0.0.0.0:3000")
/// - `PATIENT_DATA_DIR`: directory for patient record storage (default: "./patient_data")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the data directory cannot be created,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient_ops=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PATIENT_OPS_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let data_dir = std::env::var("PATIENT_DATA_DIR").unwrap_or_else(|_| "./patient_data".into());

    let data_path = PathBuf::from(&data_dir);
    std::fs::create_dir_all(&data_path)?;

    tracing::info!("-- Starting patient-ops REST API on {}", addr);
    tracing::info!("-- Patient data directory: {}", data_path.display());

    let cfg = Arc::new(CoreConfig::new(data_path));
    let store = Arc::new(FsPatientStore::new(cfg));
    let patient_service = PatientService::new(store);

    let app = api_rest::router(patient_service);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
