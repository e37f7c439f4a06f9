//! Configuration model loaded from external sources.

use std::env;

use config::Config;
use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::service::{ListScope, ServiceDirection, TransportMode};

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Connection and list settings for the freight REST API.
pub struct ClientConfig {
    pub api_base_url: String,
    pub filter_endpoint: String,
    pub booking_endpoint: String,
    pub service_type: TransportMode,
    pub service: ServiceDirection,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Row fields written by the CSV export, in order.
    #[serde(default)]
    pub columns: Vec<String>,
}

impl ClientConfig {
    pub fn scope(&self) -> ListScope {
        ListScope::new(self.service_type, self.service)
    }

    /// Loads `<dir>/default`, the optional `<dir>/<APP_ENV>` profile and
    /// `APP_*` environment overrides.
    pub fn load(dir: &str) -> Result<Self, config::ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")))
            .add_source(config::File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ClientConfig>()
    }
}
