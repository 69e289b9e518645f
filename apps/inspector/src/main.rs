//! Timecard capability inspector.
//!
//! Loads a session the way the client does and prints the capabilities it
//! resolves to. Diagnostic output only.

#![forbid(unsafe_code)]

mod dto;
mod inspector_config;

use std::sync::Arc;

use timecard_application::AccessService;
use timecard_core::{AppError, AppResult};
use timecard_infrastructure::{InMemorySessionRepository, InMemoryUserDirectory, JsonSessionFile};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::dto::CapabilityReportResponse;
use crate::inspector_config::{InspectorConfig, ReportFormat, SessionSourceConfig};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = InspectorConfig::load()?;
    let service = AccessService::new(
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(InMemoryUserDirectory::with_role_fixtures()),
    );

    let session = match &config.session_source {
        SessionSourceConfig::File(path) => {
            let payload = JsonSessionFile::new(path.clone()).load().await?;
            service.restore_session(&payload).await?
        }
        SessionSourceConfig::Fixture { email } => service.sign_in(email).await?,
    };

    info!(
        session_id = %session.session_id,
        subject = %session.user.identity().subject(),
        "timecard-inspector resolved session"
    );

    let capabilities = service.capabilities().await?;
    let report = CapabilityReportResponse::from_session(&session, &capabilities);
    if !report.unrecognized_permissions.is_empty() {
        warn!(
            unrecognized = ?report.unrecognized_permissions,
            "session carries permissions outside the catalog"
        );
    }

    println!("{}", render_report(&report, config.report_format)?);
    Ok(())
}

fn render_report(report: &CapabilityReportResponse, format: ReportFormat) -> AppResult<String> {
    let rendered = match format {
        ReportFormat::Pretty => serde_json::to_string_pretty(report),
        ReportFormat::Compact => serde_json::to_string(report),
    };

    rendered.map_err(|error| AppError::Internal(format!("failed to render report: {error}")))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
