use std::time::Duration;

use anyhow::{Context, Result};
use config::Config;
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("tarsier/", env!("CARGO_PKG_VERSION"));

/// Runtime settings: defaults overlaid with `TARSIER_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Config::builder()
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(config::Environment::with_prefix("TARSIER"))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid TARSIER_* settings")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.timeout(), Duration::from_secs(30));
        assert!(s.user_agent.starts_with("tarsier/"));
    }
}
