use crate::{
    adapters::{http::app_state::AppState, jira::JiraIdentityClient},
    infra::{config::AppConfig, error::InfraError, http_client::try_build_client},
    use_cases::relay::{IdentityVerifier, RelayUseCases},
};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_app_state(config: AppConfig) -> Result<AppState, InfraError> {
    let client = try_build_client(config.remote_connect_timeout, config.remote_request_timeout)?;

    let verifier = Arc::new(JiraIdentityClient::new(client, config.jira_scheme.clone()));
    let relay_use_cases = RelayUseCases::new(verifier as Arc<dyn IdentityVerifier>);

    Ok(AppState {
        config: Arc::new(config),
        relay_use_cases: Arc::new(relay_use_cases),
    })
}

pub fn init_tracing(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jira_relay_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped when the file can't be created
    let file = log_file.and_then(|path| File::create(path).ok());
    let file_missing = log_file.is_some() && file.is_none();
    let json_layer = file.map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();

    if file_missing {
        tracing::warn!("Log file could not be created, JSON file logging disabled");
    }
}
