//! Logging setup for the command-line binary.
//!
//! Log output goes to standard error so standard output carries only the
//! rendered document.

use tracing_subscriber::EnvFilter;

use crate::error::{ProposalError, ProposalResult};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Fallback filter directive (e.g., "warn" or "contract_proposal=debug").
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Builds the filter, preferring `RUST_LOG` over the configured fallback.
fn env_filter(config: &TelemetryConfig) -> ProposalResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => {
            EnvFilter::try_new(&config.log_filter).map_err(|err| ProposalError::TelemetryInit {
                filter: config.log_filter.clone(),
                message: err.to_string(),
            })
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `TelemetryInit` if the fallback filter cannot be parsed or a
/// global subscriber is already installed.
pub fn init(config: &TelemetryConfig) -> ProposalResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ProposalError::TelemetryInit {
            filter: config.log_filter.clone(),
            message: err.to_string(),
        })
}
