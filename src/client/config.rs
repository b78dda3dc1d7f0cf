//! Client Config

use std::time::Duration;

/// Default address of the promotions service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration for connecting to the promotions service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service address, e.g. `"http://localhost:5000"`.
    pub base_url: String,

    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}
