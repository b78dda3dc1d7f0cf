//! Client Config

use std::time::Duration;

use clap::Args;
use promotions_admin::{
    client::{ClientConfig, DEFAULT_BASE_URL},
    schema::SchemaVersion,
};

/// Promotions service settings.
#[derive(Debug, Args)]
pub(crate) struct ClientArgs {
    /// Promotions service address
    #[arg(
        long,
        env = "PROMOTIONS_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Resource schema version (v1, v2)
    #[arg(long, env = "PROMOTIONS_SCHEMA", default_value = "v2", global = true)]
    pub schema: SchemaVersion,

    /// Request timeout in seconds; requests wait indefinitely when unset
    #[arg(long, env = "PROMOTIONS_TIMEOUT_SECONDS", global = true)]
    pub timeout_seconds: Option<u64>,
}

impl ClientArgs {
    /// HTTP client settings.
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }
}
