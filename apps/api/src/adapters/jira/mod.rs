use async_trait::async_trait;
use jira_relay_types::{IDENTITY_PATH, remote_url};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderValue},
};
use secrecy::ExposeSecret;
use serde_json::Value;
use std::error::Error as StdError;
use url::Url;

use crate::{
    app_error::{AppError, AppResult, GENERIC_FAILURE_MESSAGE},
    domain::entities::credentials::Credentials,
    use_cases::relay::IdentityVerifier,
};

const REDACTED: &str = "[REDACTED]";

/// Shorter tokens are not real Jira API tokens; replacing them would only
/// mangle the remote's message.
const MIN_REDACTED_TOKEN_LEN: usize = 6;

/// Calls `GET {scheme}://{domain}/rest/api/3/myself` on Jira Cloud.
#[derive(Clone)]
pub struct JiraIdentityClient {
    client: Client,
    scheme: String,
}

impl JiraIdentityClient {
    pub fn new(client: Client, scheme: String) -> Self {
        Self { client, scheme }
    }

    fn identity_url(&self, domain: &str) -> AppResult<Url> {
        Url::parse(&remote_url(&self.scheme, domain, IDENTITY_PATH))
            .map_err(|e| AppError::NetworkFailure(format!("invalid Jira URL: {e}")))
    }
}

#[async_trait]
impl IdentityVerifier for JiraIdentityClient {
    async fn fetch_myself(&self, credentials: &Credentials) -> AppResult<Value> {
        let token = credentials.api_token.expose_secret();
        let url = self.identity_url(&credentials.domain)?;

        let mut auth = HeaderValue::try_from(credentials.auth_header().expose_secret())
            .map_err(|_| AppError::InvalidRequest)?;
        auth.set_sensitive(true);

        let resp = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::NetworkFailure(redact(&describe(&e), token)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::NetworkFailure(redact(&describe(&e), token)))?;

        match map_identity_response(status, &body) {
            Err(AppError::RemoteRejected { status, message }) => Err(AppError::RemoteRejected {
                status,
                message: redact(&message, token),
            }),
            other => other,
        }
    }
}

/// Map a remote status and body to the relay outcome.
pub fn map_identity_response(status: u16, body: &str) -> AppResult<Value> {
    if (200..300).contains(&status) {
        // The profile is passed through untouched; Jira does not echo the token here.
        return Ok(serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default())));
    }

    if status == 401 {
        return Err(AppError::RemoteUnauthorized);
    }

    Err(AppError::RemoteRejected {
        status,
        message: extract_error_message(body).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
    })
}

/// First entry of Jira's `errorMessages` array, if it is a non-empty string.
///
/// Bodies that are not JSON, or where `errorMessages` is not an array, yield `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("errorMessages")?
        .as_array()?
        .first()?
        .as_str()
        .filter(|msg| !msg.trim().is_empty())
        .map(str::to_string)
}

// reqwest's Display stops at the outermost error; the cause chain has the useful part.
fn describe(err: &reqwest::Error) -> String {
    let mut text = err.to_string();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

fn redact(text: &str, token: &str) -> String {
    if token.chars().count() < MIN_REDACTED_TOKEN_LEN {
        return text.to_string();
    }
    text.replace(token, REDACTED)
}
