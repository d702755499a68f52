use thiserror::Error;

/// Fixed message for a remote 401, independent of the remote body.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid credentials. Please check your email, domain, and API token.";

/// Fallback when the remote error body has no usable `errorMessages` entry.
pub const GENERIC_FAILURE_MESSAGE: &str = "Authentication failed.";

/// Terminal failures of a single relay invocation.
///
/// Display strings are what the caller receives in `{"error": ...}`. None of
/// them may contain the API token.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing credentials.")]
    InvalidRequest,

    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    RemoteUnauthorized,

    #[error("Authentication failed (Status {status}): {message}")]
    RemoteRejected { status: u16, message: String },

    #[error("Network error while connecting to remote API: {0}")]
    NetworkFailure(String),
}

impl AppError {
    /// HTTP status the relay answers with for this failure.
    pub fn status(&self) -> u16 {
        match self {
            AppError::InvalidRequest => 400,
            AppError::RemoteUnauthorized => 401,
            AppError::RemoteRejected { status, .. } => *status,
            AppError::NetworkFailure(_) => 500,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidRequest => ErrorCode::InvalidRequest,
            AppError::RemoteUnauthorized => ErrorCode::RemoteUnauthorized,
            AppError::RemoteRejected { .. } => ErrorCode::RemoteRejected,
            AppError::NetworkFailure(_) => ErrorCode::NetworkFailure,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidRequest,
    RemoteUnauthorized,
    RemoteRejected,
    NetworkFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::RemoteUnauthorized => "REMOTE_UNAUTHORIZED",
            ErrorCode::RemoteRejected => "REMOTE_REJECTED",
            ErrorCode::NetworkFailure => "NETWORK_FAILURE",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
