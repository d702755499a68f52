use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use env_helpers::get_env_default;

use crate::infra::{
    error::InfraError,
    http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT},
};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Scheme used to reach Jira. Always "https" in production; "http" is only
    /// meant for local stub servers.
    pub jira_scheme: String,
    pub remote_connect_timeout: Duration,
    pub remote_request_timeout: Duration,
    /// JSON log file. `None` disables file logging.
    pub log_file: Option<PathBuf>,
}

/// Config values as read from the environment, before validation.
#[derive(Debug, Clone)]
pub struct RawConfig {
    pub bind_addr: String,
    pub cors_origin: String,
    pub jira_scheme: String,
    pub connect_timeout_secs: String,
    pub request_timeout_secs: String,
    pub log_file: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".into(),
            cors_origin: "http://localhost:3000".into(),
            jira_scheme: "https".into(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs().to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs().to_string(),
            log_file: "app.log".into(),
        }
    }
}

impl RawConfig {
    /// Read every variable as a string so parse failures surface as
    /// `InfraError::InvalidConfig` rather than at lookup time.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: get_env_default("BIND_ADDR", defaults.bind_addr),
            cors_origin: get_env_default("CORS_ORIGIN", defaults.cors_origin),
            jira_scheme: get_env_default("JIRA_SCHEME", defaults.jira_scheme),
            connect_timeout_secs: get_env_default(
                "REMOTE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            request_timeout_secs: get_env_default(
                "REMOTE_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            log_file: get_env_default("LOG_FILE", defaults.log_file),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, InfraError> {
        Self::from_values(RawConfig::from_env())
    }

    pub fn from_values(raw: RawConfig) -> Result<Self, InfraError> {
        let bind_addr: SocketAddr = parse("BIND_ADDR", &raw.bind_addr)?;

        let cors_origin = HeaderValue::from_str(raw.cors_origin.trim()).map_err(|e| {
            InfraError::InvalidConfig {
                var: "CORS_ORIGIN",
                reason: e.to_string(),
            }
        })?;

        let jira_scheme = raw.jira_scheme.trim().to_string();
        if jira_scheme != "https" && jira_scheme != "http" {
            return Err(InfraError::InvalidConfig {
                var: "JIRA_SCHEME",
                reason: format!("expected \"https\" or \"http\", got {jira_scheme:?}"),
            });
        }

        let connect_secs = timeout_secs("REMOTE_CONNECT_TIMEOUT_SECS", &raw.connect_timeout_secs)?;
        let request_secs = timeout_secs("REMOTE_REQUEST_TIMEOUT_SECS", &raw.request_timeout_secs)?;

        // Empty LOG_FILE turns file logging off.
        let log_file = raw.log_file.trim();
        let log_file = (!log_file.is_empty()).then(|| PathBuf::from(log_file));

        Ok(Self {
            bind_addr,
            cors_origin,
            jira_scheme,
            remote_connect_timeout: Duration::from_secs(connect_secs),
            remote_request_timeout: Duration::from_secs(request_secs),
            log_file,
        })
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, InfraError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| InfraError::InvalidConfig {
            var,
            reason: format!("{value:?}: {e}"),
        })
}

fn timeout_secs(var: &'static str, value: &str) -> Result<u64, InfraError> {
    let secs: u64 = parse(var, value)?;
    if secs == 0 {
        return Err(InfraError::InvalidConfig {
            var,
            reason: "timeouts must be at least one second".into(),
        });
    }
    Ok(secs)
}
