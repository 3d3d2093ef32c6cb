//! Process configuration
//!
//! Read once at startup from shuttle secrets (`Secrets.toml` locally) and
//! never re-read while serving requests.

use leadcall::{AgentDirectory, DomainError};

use crate::adapters::messagebird::DEFAULT_BASE_URL;

pub const API_KEY: &str = "MESSAGEBIRD_API_KEY";
pub const ORIGINATOR: &str = "MESSAGEBIRD_ORIGINATOR";
pub const SALES_AGENT_NUMBERS: &str = "SALES_AGENT_NUMBERS";
pub const BASE_URL: &str = "MESSAGEBIRD_BASE_URL";

/// Immutable application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MessageBird access key
    pub api_key: String,
    /// Sender shown on outbound SMS
    pub originator: String,
    /// Agents eligible to receive leads
    pub agents: AgentDirectory,
    /// MessageBird REST endpoint
    pub base_url: String,
}

impl AppConfig {
    /// Build configuration from any key lookup (secret store, env, map)
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| DomainError::missing_setting(key));

        let api_key = require(API_KEY)?;
        let originator = require(ORIGINATOR)?;
        let agents = AgentDirectory::parse(&require(SALES_AGENT_NUMBERS)?)?;

        let base_url = match get(BASE_URL) {
            Some(url) => {
                tracing::info!("Using MessageBird endpoint override: {}", url);
                url
            }
            None => DEFAULT_BASE_URL.to_string(),
        };

        Ok(Self {
            api_key,
            originator,
            agents,
            base_url,
        })
    }
}
