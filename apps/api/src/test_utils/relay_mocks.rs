//! In-memory `IdentityVerifier` for use case and route tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::credentials::Credentials,
    use_cases::relay::IdentityVerifier,
};

type ErrorFactory = Box<dyn Fn() -> AppError + Send + Sync>;

enum StubOutcome {
    Profile(Value),
    Error(ErrorFactory),
}

/// Verifier that returns a scripted outcome and records the normalized domain
/// of every call.
pub struct StubIdentityVerifier {
    outcome: StubOutcome,
    pub calls: Mutex<Vec<String>>,
}

impl StubIdentityVerifier {
    pub fn succeeding(profile: Value) -> Self {
        Self {
            outcome: StubOutcome::Profile(profile),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: impl Fn() -> AppError + Send + Sync + 'static) -> Self {
        Self {
            outcome: StubOutcome::Error(Box::new(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn domains(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn fetch_myself(&self, credentials: &Credentials) -> AppResult<Value> {
        self.calls.lock().unwrap().push(credentials.domain.clone());
        match &self.outcome {
            StubOutcome::Profile(profile) => Ok(profile.clone()),
            StubOutcome::Error(make) => Err(make()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn stub_records_calls() {
        let stub = StubIdentityVerifier::succeeding(json!({ "accountId": "1" }));
        let creds = Credentials::new("a@b.c", "foo.atlassian.net", "tok").unwrap();

        let profile = stub.fetch_myself(&creds).await.unwrap();

        assert_eq!(profile, json!({ "accountId": "1" }));
        assert_eq!(stub.domains(), vec!["foo.atlassian.net".to_string()]);
    }

    #[tokio::test]
    async fn failing_stub_returns_fresh_error_each_call() {
        let stub = StubIdentityVerifier::failing(|| AppError::NetworkFailure("refused".into()));
        let creds = Credentials::new("a@b.c", "foo.atlassian.net", "tok").unwrap();

        assert!(stub.fetch_myself(&creds).await.is_err());
        assert!(stub.fetch_myself(&creds).await.is_err());
        assert_eq!(stub.call_count(), 2);
    }
}
