use clap::Parser;
use radio_core::station::DEFAULT_STATION_ID;
use radio_engine::{DEFAULT_ENDPOINT, FailurePolicy};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

/// Command line arguments for the radioproglist server
#[derive(Parser, Debug, Default)]
#[command(name = "radioproglist")]
#[command(about = "Radio program schedule server")]
pub struct Args {
    /// Path to an optional JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Programs API endpoint, queried with `?stationId=<id>`
    #[arg(long, env = "RADIO_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path prefix every route is served under, e.g. `/radioproglist`
    #[arg(long, env = "RADIO_BASE_PATH")]
    pub base_path: Option<String>,

    /// Station shown when the page is opened without a selection
    #[arg(long, env = "RADIO_DEFAULT_STATION")]
    pub default_station: Option<String>,

    /// What to show when the programs API fails: `fallback` or `show-error`
    #[arg(long, env = "RADIO_FAILURE_POLICY")]
    pub failure_policy: Option<FailurePolicy>,
}

/// Settings read from the configuration file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_endpoint: Option<String>,
    pub port: Option<u16>,
    pub base_path: Option<String>,
    pub default_station: Option<String>,
    pub failure_policy: Option<FailurePolicy>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Base path {base_path:?} must start with '/'")]
    InvalidBasePath { base_path: String },
    #[error("Default station must not be empty")]
    EmptyStation,
}

/// Validated server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_endpoint: String,
    pub port: u16,
    /// Empty, or `/`-prefixed without a trailing `/`.
    pub base_path: String,
    pub default_station: String,
    pub failure_policy: FailurePolicy,
}

impl AppConfig {
    /// Load the config file named by `args`, if any, and merge it with `args`.
    pub async fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| ConfigError::Read {
                        path: path.clone(),
                        source,
                    })?;
                let file: FileConfig =
                    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: path.clone(),
                        source,
                    })?;
                tracing::info!("Loaded config file {}", path.display());
                file
            }
            None => FileConfig::default(),
        };

        Self::resolve(args, file)
    }

    /// Command line and environment values take precedence over the file.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let api_endpoint = args
            .api_endpoint
            .clone()
            .or(file.api_endpoint)
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let base_path = normalize_base_path(
            args.base_path.clone().or(file.base_path).unwrap_or_default(),
        )?;

        let default_station = args
            .default_station
            .clone()
            .or(file.default_station)
            .unwrap_or_else(|| DEFAULT_STATION_ID.to_string());
        if default_station.trim().is_empty() {
            return Err(ConfigError::EmptyStation);
        }

        Ok(AppConfig {
            api_endpoint,
            port: args.port.or(file.port).unwrap_or(DEFAULT_PORT),
            base_path,
            default_station,
            failure_policy: args
                .failure_policy
                .or(file.failure_policy)
                .unwrap_or_default(),
        })
    }
}

fn normalize_base_path(base_path: String) -> Result<String, ConfigError> {
    let trimmed = base_path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath { base_path });
    }
    Ok(trimmed.to_string())
}
