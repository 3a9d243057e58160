//! Error types for the contract proposal generator.
//!
//! Rendering a proposal cannot fail. The errors here cover the process
//! boundary around it: setting up logging and writing the document out.

use thiserror::Error;

/// The main error type for the contract proposal generator.
///
/// # Example
///
/// ```
/// use contract_proposal::error::ProposalError;
///
/// let error = ProposalError::TelemetryInit {
///     filter: "warn".to_string(),
///     message: "a global default trace dispatcher has already been set".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to initialise logging with filter 'warn': a global default trace dispatcher has already been set"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ProposalError {
    /// The logging subscriber could not be installed.
    #[error("Failed to initialise logging with filter '{filter}': {message}")]
    TelemetryInit {
        /// The filter directive that was being applied.
        filter: String,
        /// A description of the failure.
        message: String,
    },

    /// The rendered document could not be written to standard output.
    #[error("Failed to write proposal to standard output: {source}")]
    Output {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// A type alias for Results that return ProposalError.
pub type ProposalResult<T> = Result<T, ProposalError>;
