use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use defaultconf::config::{Config, DEFAULT_CONFIG_PATH};
use defaultconf::nl_type::AddressFamily;
use defaultconf::{daemon, rank, signal_daemon, GatewaySelect, State};

const PROTOCOLS: [&str; 4] = ["static", "dhcp", "ppp", "ra"];

/// Maintain one default route per address family, chosen from a set of
/// registered candidate gateways.
#[derive(Parser)]
#[command(name = "defaultconf")]
struct Cli {
    /// Configuration file
    #[arg(short = 'c', value_name = "config-path", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Debug logging
    #[arg(short = 'd')]
    debug: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Register a candidate gateway
    Add {
        #[arg(short = 'f', value_name = "address-family")]
        family: AddressFamily,
        #[arg(short = 'l', value_name = "link")]
        link: String,
        #[arg(short = 'p', value_name = "protocol")]
        protocol: String,
        #[arg(value_name = "address")]
        addr: IpAddr,
    },
    /// Drop every candidate the select matches
    Remove {
        #[arg(short = 'f', value_name = "address-family")]
        family: Option<AddressFamily>,
        #[arg(short = 'l', value_name = "link")]
        link: Option<String>,
        #[arg(short = 'p', value_name = "protocol")]
        protocol: Option<String>,
    },
    /// Print the best-ranked matching candidate as JSON
    GetDefault {
        #[arg(short = 'f', value_name = "address-family")]
        family: Option<AddressFamily>,
        #[arg(short = 'l', value_name = "link")]
        link: Option<String>,
        #[arg(short = 'p', value_name = "protocol")]
        protocol: Option<String>,
    },
    /// Suppress every candidate the select matches
    Disable {
        #[arg(short = 'f', value_name = "address-family")]
        family: Option<AddressFamily>,
        #[arg(short = 'l', value_name = "link")]
        link: Option<String>,
        #[arg(short = 'p', value_name = "protocol")]
        protocol: Option<String>,
    },
    /// Lift every disable entry the select matches
    Enable {
        #[arg(short = 'f', value_name = "address-family")]
        family: Option<AddressFamily>,
        #[arg(short = 'l', value_name = "link")]
        link: Option<String>,
        #[arg(short = 'p', value_name = "protocol")]
        protocol: Option<String>,
    },
    /// Run the supervisor
    Daemon,
    /// Ask a running daemon to reload its state file
    SignalDaemon,
}

fn select_from(
    family: Option<AddressFamily>,
    link: Option<String>,
    protocol: Option<String>,
) -> GatewaySelect {
    GatewaySelect {
        family,
        link_name: link,
        protocol,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();
    let config = Config::from_path(&cli.config)?;

    match cli.action {
        Action::Add {
            family,
            link,
            protocol,
            addr,
        } => {
            if !PROTOCOLS.contains(&protocol.as_str()) {
                bail!("unknown protocol: {protocol}");
            }
            if AddressFamily::of(&addr) != family {
                bail!("address {addr} does not match family {family}");
            }
            State::update(&config, |state| state.add(family, &link, &protocol, addr))?;
        }
        Action::Remove {
            family,
            link,
            protocol,
        } => {
            let select = select_from(family, link, protocol);
            State::update(&config, |state| state.remove(&select))?;
        }
        Action::GetDefault {
            family,
            link,
            protocol,
        } => {
            let select = select_from(family, link, protocol);
            let state = State::from_path(&config.state_path)?;
            if let Some(gateway) = rank(&state, &config.priority, &select).into_iter().next() {
                println!("{}", serde_json::to_string(&gateway)?);
            }
        }
        Action::Disable {
            family,
            link,
            protocol,
        } => {
            let select = select_from(family, link, protocol);
            State::update(&config, |state| state.disable(select))?;
        }
        Action::Enable {
            family,
            link,
            protocol,
        } => {
            let select = select_from(family, link, protocol);
            State::update(&config, |state| state.enable(&select))?;
        }
        Action::Daemon => daemon::run(&config)?,
        Action::SignalDaemon => signal_daemon(&config)?,
    }
    Ok(())
}
