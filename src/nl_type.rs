use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use ipnetwork::IpNetwork;
use netlink_packet_route::{AF_INET, AF_INET6, AF_UNSPEC};
use serde::{Deserialize, Serialize};

pub type Family = u8;

pub const FAMILY_ALL: u8 = AF_UNSPEC as u8;
pub const FAMILY_V4: u8 = AF_INET as u8;
pub const FAMILY_V6: u8 = AF_INET6 as u8;

/// The two address families a default route is maintained for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    #[serde(rename = "INET")]
    Inet,
    #[serde(rename = "INET6")]
    Inet6,
}

impl AddressFamily {
    pub fn family(self) -> Family {
        match self {
            AddressFamily::Inet => FAMILY_V4,
            AddressFamily::Inet6 => FAMILY_V6,
        }
    }

    pub fn of(addr: &IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::Inet,
            IpAddr::V6(_) => AddressFamily::Inet6,
        }
    }

    /// `0.0.0.0/0` or `::/0`.
    pub fn default_destination(self) -> IpNetwork {
        match self {
            AddressFamily::Inet => IpNetwork::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0).unwrap(),
            AddressFamily::Inet6 => IpNetwork::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0).unwrap(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Inet => write!(f, "inet"),
            AddressFamily::Inet6 => write!(f, "inet6"),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inet" => Ok(AddressFamily::Inet),
            "inet6" => Ok(AddressFamily::Inet6),
            other => Err(format!("unknown address family: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destinations() {
        assert_eq!(
            AddressFamily::Inet.default_destination(),
            "0.0.0.0/0".parse::<IpNetwork>().unwrap()
        );
        assert_eq!(
            AddressFamily::Inet6.default_destination(),
            "::/0".parse::<IpNetwork>().unwrap()
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("inet".parse::<AddressFamily>().unwrap(), AddressFamily::Inet);
        assert_eq!("inet6".parse::<AddressFamily>().unwrap(), AddressFamily::Inet6);
        assert!("inet7".parse::<AddressFamily>().is_err());
    }
}
