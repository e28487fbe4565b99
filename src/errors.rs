use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayLogError {
    /// Only raised when stricter input checks are turned on in settings.
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("No active session with id '{0}'")]
    SessionNotFound(String),
}

pub type PlayLogResult<T> = Result<T, PlayLogError>;
