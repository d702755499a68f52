use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include request data or credentials.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {var} is invalid: {reason}")]
    InvalidConfig { var: &'static str, reason: String },

    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}

impl From<reqwest::Error> for InfraError {
    fn from(e: reqwest::Error) -> Self {
        InfraError::HttpClient(e)
    }
}
