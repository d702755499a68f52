//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` either around a stub
//! `IdentityVerifier` or around the real Jira adapter, with a config that
//! never touches the environment.

use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use axum::http::HeaderValue;

use crate::{
    adapters::{http::app_state::AppState, jira::JiraIdentityClient},
    infra::{
        config::AppConfig,
        http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, try_build_default_client},
    },
    use_cases::relay::{IdentityVerifier, RelayUseCases},
};

/// Builder for creating `AppState` for tests.
///
/// # Example
///
/// ```ignore
/// let verifier = Arc::new(StubIdentityVerifier::succeeding(json!({"accountId": "123"})));
/// let app_state = TestAppStateBuilder::new().with_verifier(verifier).build();
/// ```
pub struct TestAppStateBuilder {
    verifier: Option<Arc<dyn IdentityVerifier>>,
    jira_scheme: String,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            verifier: None,
            jira_scheme: "https".to_string(),
        }
    }

    /// Use a stub instead of the real Jira adapter.
    pub fn with_verifier(mut self, verifier: Arc<dyn IdentityVerifier>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Scheme for the real Jira adapter ("http" for wiremock servers).
    pub fn with_jira_scheme(mut self, scheme: &str) -> Self {
        self.jira_scheme = scheme.to_string();
        self
    }

    pub fn build(self) -> AppState {
        let config = test_config(&self.jira_scheme);

        let verifier = self.verifier.unwrap_or_else(|| {
            let client = try_build_default_client().unwrap();
            Arc::new(JiraIdentityClient::new(client, config.jira_scheme.clone()))
        });

        AppState {
            config: Arc::new(config),
            relay_use_cases: Arc::new(RelayUseCases::new(verifier)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn test_config(jira_scheme: &str) -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        jira_scheme: jira_scheme.to_string(),
        remote_connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        remote_request_timeout: DEFAULT_REQUEST_TIMEOUT,
        log_file: None,
    }
}
