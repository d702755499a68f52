use thiserror::Error;

/// Errors surfaced to the dashboard user.
///
/// Display strings are meant to be shown as-is and never contain the API token.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Input rejected locally or by the relay (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Relay reported the credentials as wrong (401)
    #[error("{0}")]
    InvalidCredentials(String),

    /// Relay reported any other failure
    #[error("{message}")]
    AuthenticationFailed { status: u16, message: String },

    /// Relay could not be reached at all
    #[error("Failed to connect to server. Please check your network or try again.")]
    Unreachable,

    /// Jira rejected the session's auth header during project listing
    #[error("Session expired or invalid Jira credentials.")]
    SessionExpired,

    #[error("Failed to fetch projects. (Status {status})")]
    ProjectsUnavailable { status: u16 },

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Whether the user should correct what they typed, as opposed to their
    /// credentials or the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(self, DashboardError::InvalidInput(_))
    }
}
