use serde::{Deserialize, Serialize};

/// Body sent to `POST /jira-authenticate`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest<'a> {
    pub email: &'a str,
    pub domain: &'a str,
    pub api_token: &'a str,
}

/// Successful relay response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateResponse {
    /// Always `true`
    pub ok: bool,

    /// Jira profile of the authenticated user, passed through as-is.
    pub myself: serde_json::Value,
}

/// Failed relay response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
