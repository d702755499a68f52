use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    app_error::AppResult,
    domain::entities::{credentials::Credentials, relay_result::RelayResult},
};

/// Verifies credentials against the remote "current user" endpoint.
///
/// One call per invocation, no retries. Implementations map every remote
/// outcome to either the profile JSON or an `AppError`.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn fetch_myself(&self, credentials: &Credentials) -> AppResult<Value>;
}

#[derive(Clone)]
pub struct RelayUseCases {
    verifier: Arc<dyn IdentityVerifier>,
}

impl RelayUseCases {
    pub fn new(verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self { verifier }
    }

    /// Validate the raw fields, verify them remotely and normalize the outcome.
    ///
    /// Nothing about the request is logged besides the final status and code.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, email: &str, domain: &str, api_token: &str) -> RelayResult {
        let result = self.verify(email, domain, api_token).await;

        match &result {
            Ok(_) => info!("Credentials verified"),
            Err(err) => warn!(status = err.status(), code = err.code().as_str(), "Relay request failed"),
        }

        RelayResult::from(result)
    }

    async fn verify(&self, email: &str, domain: &str, api_token: &str) -> AppResult<Value> {
        let credentials = Credentials::new(email, domain, api_token)?;
        self.verifier.fetch_myself(&credentials).await
    }
}
