//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound calls to Jira go through the client built here rather than a
//! bare `reqwest::Client::new()`, so every request has a bounded lifetime.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
///
/// `/rest/api/3/myself` is a single small read; Jira answers within seconds.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("jira-relay/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client with the given timeouts.
pub fn try_build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Build an HTTP client with default timeouts.
pub fn try_build_default_client() -> Result<Client, reqwest::Error> {
    try_build_client(DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
}
