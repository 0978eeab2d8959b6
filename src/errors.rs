// errors.rs
use thiserror::Error;

/// Errors raised by the roster, billing and mailing pipelines.
///
/// Everything except `MailTransportError` aborts the run. Mail failures are
/// caught per recipient by the reminder loop.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Roster snapshot not found at {0} (run `socios` first)")]
    JoinInputMissing(String),

    #[error("Export error: {0}")]
    ExportIoError(String),

    #[error("Mail transport error: {0}")]
    MailTransportError(String),

    #[error("Read error: {0}")]
    ReadError(String),

    #[error("Database error: {0}")]
    DbError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// Type alias commonly used by pipeline steps.
pub type PipelineResult<T> = Result<T, PipelineError>;
