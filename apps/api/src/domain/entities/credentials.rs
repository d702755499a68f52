use jira_relay_types::{basic_auth_header, normalize_domain};
use secrecy::{ExposeSecret, SecretString};

use crate::app_error::{AppError, AppResult};

/// Validated Jira credentials for a single relay call.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    /// Normalized: no scheme, no trailing slash.
    pub domain: String,
    pub api_token: SecretString,
}

impl Credentials {
    /// Validate raw input. Every field must be non-empty after trimming.
    pub fn new(email: &str, domain: &str, api_token: &str) -> AppResult<Self> {
        let email = email.trim();
        let domain = normalize_domain(domain);
        if email.is_empty() || domain.is_empty() || api_token.trim().is_empty() {
            return Err(AppError::InvalidRequest);
        }

        Ok(Self {
            email: email.to_string(),
            domain,
            api_token: SecretString::new(api_token.into()),
        })
    }

    /// `Basic base64(email:apiToken)`, rebuilt on every call.
    pub fn auth_header(&self) -> SecretString {
        SecretString::new(basic_auth_header(&self.email, self.api_token.expose_secret()).into())
    }
}
