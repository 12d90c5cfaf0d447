//! Probe configuration.
//!
//! Configuration is read from TOML at `~/.config/deviceprobe/config.toml`
//! (or the path in `DEVICEPROBE_CONFIG`). A missing file means defaults;
//! nothing is written back.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use deviceprobe::HostConfig;
use deviceprobe::host::DEFAULT_GETPROP_PATH;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV: &str = "DEVICEPROBE_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name reported with the snapshot (hostname by default).
    #[serde(default = "default_name")]
    pub name: String,

    /// Directory holding per-core `cpuN` nodes.
    #[serde(default = "default_cpu_dir")]
    pub cpu_dir: PathBuf,

    /// Location of the Android property tool.
    #[serde(default = "default_getprop_path")]
    pub getprop_path: PathBuf,

    /// Pretty-print the JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Fixed property values; when set, `getprop` is not consulted.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

fn default_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default()
}

fn default_cpu_dir() -> PathBuf {
    PathBuf::from(deviceprobe::CPU_DIR)
}

fn default_getprop_path() -> PathBuf {
    PathBuf::from(DEFAULT_GETPROP_PATH)
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            cpu_dir: default_cpu_dir(),
            getprop_path: default_getprop_path(),
            pretty: default_true(),
            properties: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Host settings derived from this configuration.
    pub fn host_config(&self) -> HostConfig {
        HostConfig {
            cpu_dir: self.cpu_dir.clone(),
            getprop_path: self.getprop_path.clone(),
            properties: self.properties.clone(),
        }
    }
}

/// Returns the configuration file path.
fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home)
        .join(".config")
        .join("deviceprobe")
        .join("config.toml")
}
