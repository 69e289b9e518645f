use std::env;
use std::path::PathBuf;

use timecard_core::{AppError, AppResult};

/// Where the inspected session comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSourceConfig {
    /// A stored user payload on disk.
    File(PathBuf),
    /// Sign in against the built-in role fixtures.
    Fixture { email: String },
}

/// Output layout of the printed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pretty,
    Compact,
}

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub session_source: SessionSourceConfig,
    pub report_format: ReportFormat,
}

impl InspectorConfig {
    pub fn load() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let session_source = match (
            non_empty("TIMECARD_SESSION_FILE"),
            non_empty("TIMECARD_SIGN_IN_EMAIL"),
        ) {
            (Some(path), None) => SessionSourceConfig::File(PathBuf::from(path)),
            (None, Some(email)) => SessionSourceConfig::Fixture { email },
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "set only one of TIMECARD_SESSION_FILE and TIMECARD_SIGN_IN_EMAIL".to_owned(),
                ));
            }
            (None, None) => {
                return Err(AppError::Validation(
                    "TIMECARD_SESSION_FILE or TIMECARD_SIGN_IN_EMAIL is required".to_owned(),
                ));
            }
        };

        let report_format = match non_empty("TIMECARD_REPORT_FORMAT")
            .unwrap_or_else(|| "pretty".to_owned())
            .to_ascii_lowercase()
            .as_str()
        {
            "pretty" => ReportFormat::Pretty,
            "compact" => ReportFormat::Compact,
            other => {
                return Err(AppError::Validation(format!(
                    "TIMECARD_REPORT_FORMAT must be either 'pretty' or 'compact', got '{other}'"
                )));
            }
        };

        Ok(Self {
            session_source,
            report_format,
        })
    }
}
