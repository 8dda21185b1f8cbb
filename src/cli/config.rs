use std::collections::BTreeMap;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::directory::source::{
    FetchError, HospitalSource, HttpHospitalSource, StaticHospitalSource,
};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "hospital-directory.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "hospital-directory",
    version,
    about = "Searchable hospital directory with per-session view tracking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: hospital-directory.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Directory holding on-device storage
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Hospitals endpoint (default: bundled sample directory)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the directory once and print it
    List {
        /// Case-insensitive filter over name and address
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Interactive session: search, view and refresh from stdin
    Browse,

    /// Register the local account (replaces any previous one)
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// Sign in with the registered account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `hospital-directory.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Hospitals endpoint; the bundled sample is used when absent.
    pub endpoint: Option<String>,

    /// Static credential headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Request timeout; absent means wait indefinitely.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL activity journal; journaling is off when absent.
    pub file: Option<String>,
}

fn default_data_dir() -> String { ".hospital-directory".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring malformed config '{}': {}", config_path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// CLI flag wins over the config file.
pub fn resolve_data_dir(cli_dir: Option<&str>, config: &AppConfig) -> String {
    cli_dir
        .map(str::to_string)
        .unwrap_or_else(|| config.storage.data_dir.clone())
}

/// Pick the hospital source: an explicit endpoint (CLI, then config) or the
/// bundled sample directory.
pub fn build_source(
    cli_endpoint: Option<&str>,
    api: &ApiConfig,
) -> Result<Box<dyn HospitalSource>, FetchError> {
    match cli_endpoint.or(api.endpoint.as_deref()) {
        Some(endpoint) => {
            let timeout = api.timeout_secs.map(Duration::from_secs);
            let source = HttpHospitalSource::new(endpoint, &api.headers, timeout)?;
            Ok(Box::new(source))
        }
        None => Ok(Box::new(StaticHospitalSource::bundled()?)),
    }
}
