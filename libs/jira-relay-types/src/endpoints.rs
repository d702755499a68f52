/// Local relay endpoint that verifies credentials.
pub const RELAY_PATH: &str = "/jira-authenticate";

/// Jira "current user" endpoint used to verify credentials.
pub const IDENTITY_PATH: &str = "/rest/api/3/myself";

/// Jira project search endpoint.
pub const PROJECT_SEARCH_PATH: &str = "/rest/api/3/project/search";

/// Expansions requested alongside the project search.
pub const PROJECT_SEARCH_EXPAND: &str = "lead,description,insight";

/// Join a scheme, a normalized domain and an API path into a URL string.
pub fn remote_url(scheme: &str, domain: &str, path: &str) -> String {
    format!("{scheme}://{domain}{path}")
}
