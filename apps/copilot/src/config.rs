use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::models::Locale;

/// Runtime configuration loaded from environment variables (and `.env`).
/// Every key is optional; invalid values are startup errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub locale: Locale,
    pub timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let locale = lookup("CV_COPILOT_LOCALE")
            .unwrap_or_else(|| "fr".to_string())
            .parse::<Locale>()
            .map_err(anyhow::Error::msg)
            .context("CV_COPILOT_LOCALE must be 'fr' or 'en'")?;

        let timeout_secs = lookup("CV_COPILOT_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("CV_COPILOT_TIMEOUT_SECS must be a whole number of seconds")?;
        if timeout_secs == 0 {
            bail!("CV_COPILOT_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            locale,
            timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
