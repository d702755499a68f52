use serde_json::Value;

use crate::app_error::AppResult;

/// Outcome of one relay invocation, as returned to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayResult {
    /// Remote accepted the credentials; `myself` is its profile body.
    Success { myself: Value },
    Failure { status: u16, message: String },
}

impl RelayResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RelayResult::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            RelayResult::Success { .. } => 200,
            RelayResult::Failure { status, .. } => *status,
        }
    }
}

impl From<AppResult<Value>> for RelayResult {
    fn from(result: AppResult<Value>) -> Self {
        match result {
            Ok(myself) => RelayResult::Success { myself },
            Err(err) => RelayResult::Failure {
                status: err.status(),
                message: err.to_string(),
            },
        }
    }
}
