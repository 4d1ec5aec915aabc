use std::env;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    30
}

/// First-run download settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds); // 30 seconds default

        Self { timeout_seconds }
    }
}
