use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;

use super::SystemError;

pub const ACTOR_BUFFER_VAR: &str = "ORDERFLOW_ACTOR_BUFFER";
pub const SUBMIT_DELAY_VAR: &str = "ORDERFLOW_SUBMIT_DELAY_MS";
pub const METRICS_SEED_VAR: &str = "ORDERFLOW_METRICS_SEED";

/// Where the pipeline the dashboard depicts is deployed. Display only.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentSettings {
    pub region: String,
    pub account_id: String,
    pub api_endpoint: String,
    pub function_timeout: Duration,
    pub function_memory_mb: u32,
    pub table_name: String,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            account_id: "123456789012".to_string(),
            api_endpoint: "https://api.orderflow.example.com".to_string(),
            function_timeout: Duration::from_secs(30),
            function_memory_mb: 512,
            table_name: "orders-production".to_string(),
        }
    }
}

/// Queue attributes shown next to the message table.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSettings {
    pub visibility_timeout: Duration,
    pub retention: Duration,
    pub max_message_size_kb: u32,
    pub delivery_delay: Duration,
    /// Receives allowed before a message is redriven to the dead-letter queue.
    pub max_receive_count: u32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            visibility_timeout: Duration::from_secs(30),
            retention: Duration::from_secs(4 * 24 * 60 * 60),
            max_message_size_kb: 256,
            delivery_delay: Duration::ZERO,
            max_receive_count: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Capacity of each store actor's request channel.
    pub actor_buffer: usize,
    /// How long order submission pretends to wait on the backend.
    pub submit_delay: Duration,
    /// Fixed seed for the metric series; fresh entropy when absent.
    pub metrics_seed: Option<u64>,
    pub deployment: DeploymentSettings,
    pub queue: QueueSettings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            submit_delay: Duration::from_millis(1000),
            metrics_seed: None,
            deployment: DeploymentSettings::default(),
            queue: QueueSettings::default(),
        }
    }
}

impl DashboardConfig {
    /// Reads overrides from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, SystemError> {
        dotenv().ok();
        let config = Self::from_lookup(|name| env::var(name).ok())?;
        tracing::info!(
            actor_buffer = config.actor_buffer,
            submit_delay_ms = config.submit_delay.as_millis() as u64,
            metrics_seed = ?config.metrics_seed,
            "Dashboard configuration loaded"
        );
        Ok(config)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SystemError> {
        let defaults = Self::default();

        let actor_buffer = parse_var(&lookup, ACTOR_BUFFER_VAR)?.unwrap_or(defaults.actor_buffer);
        if actor_buffer == 0 {
            return Err(SystemError::Config(format!("{ACTOR_BUFFER_VAR} must be at least 1")));
        }

        let submit_delay = parse_var(&lookup, SUBMIT_DELAY_VAR)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.submit_delay);

        let metrics_seed = parse_var(&lookup, METRICS_SEED_VAR)?;

        Ok(Self {
            actor_buffer,
            submit_delay,
            metrics_seed,
            ..defaults
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>, SystemError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| SystemError::Config(format!("Invalid {name} '{raw}': {e}"))),
    }
}
