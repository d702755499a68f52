//! In-memory session of a verified Jira user.

use jira_relay_types::{basic_auth_header, normalize_domain};
use secrecy::SecretString;
use serde_json::Value;

/// Verified identity held by the dashboard for the lifetime of the signed-in view.
///
/// Never persisted. Dropping it (or calling [`Session::logout`]) ends it.
/// `Debug` output redacts the token and the auth header.
#[derive(Debug)]
pub struct Session {
    email: String,
    domain: String,
    api_token: SecretString,
    auth_header: SecretString,
    myself: Value,
}

impl Session {
    /// Build a session from the credentials the relay accepted.
    pub fn new(email: &str, domain: &str, api_token: &str, myself: Value) -> Self {
        let email = email.trim();
        Self {
            email: email.to_string(),
            domain: normalize_domain(domain),
            api_token: SecretString::new(api_token.into()),
            auth_header: SecretString::new(basic_auth_header(email, api_token).into()),
            myself,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Normalized Jira domain, e.g. `foo.atlassian.net`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn api_token(&self) -> &SecretString {
        &self.api_token
    }

    /// `Basic base64(email:apiToken)`, reused for every direct Jira call.
    pub fn auth_header(&self) -> &SecretString {
        &self.auth_header
    }

    /// Jira profile returned by the relay.
    pub fn myself(&self) -> &Value {
        &self.myself
    }

    pub fn display_name(&self) -> Option<&str> {
        self.myself.get("displayName").and_then(Value::as_str)
    }

    pub fn account_id(&self) -> Option<&str> {
        self.myself.get("accountId").and_then(Value::as_str)
    }

    /// End the session. Secrets are zeroized on drop.
    pub fn logout(self) {}
}
