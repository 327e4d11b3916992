use shared_config::AppConfig;

use crate::client::BackendClient;

/// Process-wide state shared by every request: the read-once configuration
/// and the gateway built from it at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let backend = BackendClient::new(&config);
        Self { config, backend }
    }
}
