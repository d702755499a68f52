use base64::Engine;

/// Build the `Authorization` header value for Jira Cloud Basic auth.
///
/// The returned string embeds the API token; callers must not log it.
pub fn basic_auth_header(email: &str, api_token: &str) -> String {
    let raw = format!("{email}:{api_token}");
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(raw.as_bytes())
    )
}
