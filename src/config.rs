use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::state::GatewaySelect;

pub const DEFAULT_CONFIG_PATH: &str = "/usr/local/etc/defaultconf.yaml";

fn default_state_path() -> PathBuf {
    PathBuf::from("/var/db/defaultconf.state")
}

fn default_pid_path() -> PathBuf {
    PathBuf::from("/var/run/defaultconf.pid")
}

/// Daemon configuration, read once at startup. `priority` is the ordered
/// list of bucket patterns; earlier buckets win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
    #[serde(default = "default_pid_path")]
    pub pid_path: PathBuf,
    #[serde(default)]
    pub fib: u32,
    #[serde(default)]
    pub priority: Vec<GatewaySelect>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            state_path: default_state_path(),
            pid_path: default_pid_path(),
            fib: 0,
            priority: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
