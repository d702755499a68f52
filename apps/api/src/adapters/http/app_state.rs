use std::sync::Arc;

use crate::{infra::config::AppConfig, use_cases::relay::RelayUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub relay_use_cases: Arc<RelayUseCases>,
}
