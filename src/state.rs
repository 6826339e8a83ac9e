use std::fs;
use std::net::IpAddr;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::error;
use nix::fcntl::{flock, FlockArg};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::nl_type::AddressFamily;

/// A candidate next hop, as registered by an operator or an auto-config
/// agent (dhcp, ppp, ra). The registration timestamp is the tiebreaker
/// inside a priority bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub family: AddressFamily,
    #[serde(rename = "link")]
    pub link_name: String,
    pub protocol: String,
    #[serde(rename = "addr")]
    pub address: IpAddr,
    #[serde(rename = "ts")]
    pub timestamp: f64,
}

/// A partial pattern over (family, link, protocol). Empty fields match
/// anything; used to address candidates for removal, to express disable
/// rules, and to define priority buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewaySelect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<AddressFamily>,
    #[serde(rename = "link", default, skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl GatewaySelect {
    pub fn family(family: AddressFamily) -> GatewaySelect {
        GatewaySelect {
            family: Some(family),
            ..Default::default()
        }
    }

    pub fn matches(&self, gateway: &Gateway) -> bool {
        if let Some(family) = self.family {
            if family != gateway.family {
                return false;
            }
        }
        if let Some(link_name) = &self.link_name {
            if link_name != &gateway.link_name {
                return false;
            }
        }
        if let Some(protocol) = &self.protocol {
            if protocol != &gateway.protocol {
                return false;
            }
        }
        true
    }

    /// Field-wise match against another select; used by `enable` to lift
    /// disable entries.
    pub fn matches_select(&self, other: &GatewaySelect) -> bool {
        if self.family.is_some() && self.family != other.family {
            return false;
        }
        if self.link_name.is_some() && self.link_name != other.link_name {
            return false;
        }
        if self.protocol.is_some() && self.protocol != other.protocol {
            return false;
        }
        true
    }
}

/// The persisted candidate set and disable set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub gateways: Vec<Gateway>,
    #[serde(default)]
    pub disabled: Vec<GatewaySelect>,
}

fn now_ts() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

impl State {
    /// Register a candidate, replacing any existing gateway with the same
    /// (family, link, protocol).
    pub fn add(&mut self, family: AddressFamily, link_name: &str, protocol: &str, address: IpAddr) {
        self.remove(&GatewaySelect {
            family: Some(family),
            link_name: Some(link_name.to_string()),
            protocol: Some(protocol.to_string()),
        });
        self.gateways.push(Gateway {
            family,
            link_name: link_name.to_string(),
            protocol: protocol.to_string(),
            address,
            timestamp: now_ts(),
        });
    }

    pub fn remove(&mut self, select: &GatewaySelect) {
        self.gateways.retain(|g| !select.matches(g));
    }

    pub fn disable(&mut self, select: GatewaySelect) {
        if !self.disabled.contains(&select) {
            self.disabled.push(select);
        }
    }

    pub fn enable(&mut self, select: &GatewaySelect) {
        self.disabled.retain(|d| !select.matches_select(d));
    }

    pub fn from_path(path: &Path) -> Result<State> {
        if !path.exists() {
            return Ok(State::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading state file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing state file {}", path.display()))
    }

    pub fn to_path(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string(self)?;
        fs::write(path, text)
            .with_context(|| format!("writing state file {}", path.display()))?;
        Ok(())
    }

    /// Order-independent serialization, used as the dirty check in
    /// `update`: the sets are sorted before encoding so two states with
    /// the same members always encode identically.
    pub fn canonical(&self) -> Result<String> {
        let mut sorted = self.clone();
        sorted.gateways.sort_by(|a, b| {
            (a.family, &a.link_name, &a.protocol, a.address)
                .cmp(&(b.family, &b.link_name, &b.protocol, b.address))
                .then(a.timestamp.total_cmp(&b.timestamp))
        });
        sorted.disabled.sort_by(|a, b| {
            (a.family, &a.link_name, &a.protocol).cmp(&(b.family, &b.link_name, &b.protocol))
        });
        Ok(serde_json::to_string(&sorted)?)
    }

    /// Locked read-modify-write of the state file. The file is rewritten
    /// and the daemon signalled only when the mutation changed something.
    pub fn update<F: FnOnce(&mut State)>(config: &Config, mutator: F) -> Result<()> {
        let lock_path = lock_path(&config.state_path);
        let lock_file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("opening lock file {}", lock_path.display()))?;
        flock(lock_file.as_raw_fd(), FlockArg::LockExclusive).context("locking state file")?;
        let result = (|| {
            let mut state = State::from_path(&config.state_path)?;
            let pre = state.canonical()?;
            mutator(&mut state);
            let post = state.canonical()?;
            if pre != post {
                state.to_path(&config.state_path)?;
                if let Err(e) = signal_daemon(config) {
                    error!("failed to signal daemon: {e:#}");
                }
            }
            Ok(())
        })();
        if let Err(e) = flock(lock_file.as_raw_fd(), FlockArg::Unlock) {
            error!("unlocking state file: {e}");
        }
        result
    }
}

fn lock_path(state_path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.lock", state_path.display()))
}

/// Wake the daemon identified by the pid file so it reloads the state.
pub fn signal_daemon(config: &Config) -> Result<()> {
    let text = fs::read_to_string(&config.pid_path)
        .with_context(|| format!("reading pid file {}", config.pid_path.display()))?;
    let pid: i32 = text
        .trim()
        .parse()
        .with_context(|| format!("parsing pid file {}", config.pid_path.display()))?;
    kill(Pid::from_raw(pid), Signal::SIGUSR1)
        .with_context(|| format!("signalling pid {pid}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gw(family: AddressFamily, link: &str, protocol: &str, addr: &str, ts: f64) -> Gateway {
        Gateway {
            family,
            link_name: link.to_string(),
            protocol: protocol.to_string(),
            address: addr.parse().unwrap(),
            timestamp: ts,
        }
    }

    #[test]
    fn test_add_replaces_matching_tuple() {
        let mut state = State::default();
        state.add(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1".parse().unwrap());
        state.add(AddressFamily::Inet, "em0", "dhcp", "10.0.0.2".parse().unwrap());
        state.add(AddressFamily::Inet, "em0", "static", "10.0.0.3".parse().unwrap());
        assert_eq!(state.gateways.len(), 2);
        let dhcp: Vec<_> = state
            .gateways
            .iter()
            .filter(|g| g.protocol == "dhcp")
            .collect();
        assert_eq!(dhcp.len(), 1);
        assert_eq!(dhcp[0].address, "10.0.0.2".parse::<IpAddr>().unwrap());
    }

    #[test]
    fn test_remove_by_partial_select() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 1.0));
        state.gateways.push(gw(AddressFamily::Inet, "em1", "dhcp", "10.0.1.1", 2.0));
        state.remove(&GatewaySelect {
            link_name: Some("em0".to_string()),
            ..Default::default()
        });
        assert_eq!(state.gateways.len(), 1);
        assert_eq!(state.gateways[0].link_name, "em1");
    }

    #[test]
    fn test_disable_enable() {
        let mut state = State::default();
        let select = GatewaySelect {
            link_name: Some("em0".to_string()),
            ..Default::default()
        };
        state.disable(select.clone());
        state.disable(select.clone());
        assert_eq!(state.disabled.len(), 1);
        state.enable(&GatewaySelect::default());
        assert!(state.disabled.is_empty());
    }

    #[test]
    fn test_enable_lifts_only_matching() {
        let mut state = State::default();
        state.disable(GatewaySelect {
            link_name: Some("em0".to_string()),
            ..Default::default()
        });
        state.disable(GatewaySelect {
            protocol: Some("ppp".to_string()),
            ..Default::default()
        });
        state.enable(&GatewaySelect {
            link_name: Some("em0".to_string()),
            ..Default::default()
        });
        assert_eq!(state.disabled.len(), 1);
        assert_eq!(state.disabled[0].protocol.as_deref(), Some("ppp"));
    }

    #[test]
    fn test_json_round_trip_both_families() {
        let mut state = State::default();
        state.gateways.push(gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 100.0));
        state.gateways.push(gw(AddressFamily::Inet6, "em1", "ra", "fd00::1", 50.5));
        state.disabled.push(GatewaySelect {
            family: Some(AddressFamily::Inet6),
            ..Default::default()
        });
        let text = serde_json::to_string(&state).unwrap();
        assert!(text.contains("\"INET\""));
        assert!(text.contains("\"INET6\""));
        assert!(text.contains("\"addr\":\"10.0.0.1\""));
        let parsed: State = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.canonical().unwrap(), state.canonical().unwrap());
    }

    #[test]
    fn test_canonical_ignores_ordering() {
        let a = State {
            gateways: vec![
                gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 1.0),
                gw(AddressFamily::Inet, "em1", "dhcp", "10.0.1.1", 2.0),
            ],
            disabled: vec![],
        };
        let b = State {
            gateways: vec![
                gw(AddressFamily::Inet, "em1", "dhcp", "10.0.1.1", 2.0),
                gw(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1", 1.0),
            ],
            disabled: vec![],
        };
        assert_eq!(a.canonical().unwrap(), b.canonical().unwrap());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let parsed: State = serde_json::from_str(
            r#"{"gateways": [], "disabled": [], "schema_version": 2}"#,
        )
        .unwrap();
        assert!(parsed.gateways.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let parsed: State = serde_json::from_str("{}").unwrap();
        assert!(parsed.gateways.is_empty());
        assert!(parsed.disabled.is_empty());
    }

    #[test]
    fn test_from_path_missing_is_empty() {
        let dir = tempdir().unwrap();
        let state = State::from_path(&dir.path().join("nope.state")).unwrap();
        assert!(state.gateways.is_empty());
    }

    fn test_config(dir: &Path) -> Config {
        Config {
            state_path: dir.join("defaultconf.state"),
            pid_path: dir.join("defaultconf.pid"),
            ..Default::default()
        }
    }

    #[test]
    fn test_update_writes_on_change() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        State::update(&config, |state| {
            state.add(AddressFamily::Inet, "em0", "dhcp", "10.0.0.1".parse().unwrap());
        })
        .unwrap();
        let state = State::from_path(&config.state_path).unwrap();
        assert_eq!(state.gateways.len(), 1);
    }

    #[test]
    fn test_update_skips_write_when_unchanged() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());
        State::update(&config, |_| {}).unwrap();
        assert!(!config.state_path.exists());
    }
}
