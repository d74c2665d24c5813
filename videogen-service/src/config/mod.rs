use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_REPLICATE_API_BASE_URL: &str = "https://api.replicate.com/v1";
pub const DEFAULT_TOKEN_ENV_VAR: &str = "REPLICATE_API_TOKEN";
const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

#[derive(Debug, Clone, Deserialize)]
pub struct VideogenConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub replicate: ReplicateConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplicateConfig {
    pub api_base_url: String,
    /// Name of the environment variable holding the API token. The token
    /// itself is read on every request, never at startup.
    pub token_env_var: String,
    pub poll_interval_ms: u64,
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_REPLICATE_API_BASE_URL.to_string(),
            token_env_var: DEFAULT_TOKEN_ENV_VAR.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl ReplicateConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl VideogenConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let poll_interval_ms = parse_poll_interval(&env_or(
            "REPLICATE_POLL_INTERVAL_MS",
            &DEFAULT_POLL_INTERVAL_MS.to_string(),
        ))?;

        Ok(VideogenConfig {
            common,
            replicate: ReplicateConfig {
                api_base_url: env_or("REPLICATE_API_BASE_URL", DEFAULT_REPLICATE_API_BASE_URL),
                token_env_var: env_or("REPLICATE_TOKEN_ENV_VAR", DEFAULT_TOKEN_ENV_VAR),
                poll_interval_ms,
            },
        })
    }
}

fn parse_poll_interval(raw: &str) -> Result<u64, AppError> {
    let interval: u64 = raw.parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "REPLICATE_POLL_INTERVAL_MS must be an integer: {}",
            e
        ))
    })?;

    if interval == 0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "REPLICATE_POLL_INTERVAL_MS must be greater than zero"
        )));
    }

    Ok(interval)
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
