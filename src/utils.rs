use std::net::IpAddr;

use crate::error::NetError;
use crate::nl_type::*;

pub fn ip_to_bytes(ip: &IpAddr) -> Vec<u8> {
    match ip {
        IpAddr::V4(ipv4) => ipv4.octets().to_vec(),
        IpAddr::V6(ipv6) => ipv6.octets().to_vec(),
    }
}

pub fn ip_to_family(ip: &IpAddr) -> Family {
    match ip {
        IpAddr::V4(_) => FAMILY_V4,
        IpAddr::V6(_) => FAMILY_V6,
    }
}

pub fn bytes_to_ip(bytes: &[u8], family: Family) -> Result<IpAddr, NetError> {
    match family {
        FAMILY_V4 => {
            if bytes.len() < 4 {
                return Err(NetError::Parse("ipv4 bytes len < 4".into()));
            }
            let mut ip = [0u8; 4];
            ip.copy_from_slice(&bytes[..4]);
            Ok(IpAddr::V4(ip.into()))
        }
        FAMILY_V6 => {
            if bytes.len() < 16 {
                return Err(NetError::Parse("ipv6 bytes len < 16".into()));
            }
            let mut ip = [0u8; 16];
            ip.copy_from_slice(&bytes[..16]);
            Ok(IpAddr::V6(ip.into()))
        }
        _ => Err(NetError::Parse(format!("invalid family: {family}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_round_trip() {
        let v4: IpAddr = "10.0.0.1".parse().unwrap();
        assert_eq!(bytes_to_ip(&ip_to_bytes(&v4), FAMILY_V4).unwrap(), v4);
        let v6: IpAddr = "fd00::1".parse().unwrap();
        assert_eq!(bytes_to_ip(&ip_to_bytes(&v6), FAMILY_V6).unwrap(), v6);
    }

    #[test]
    fn test_short_buffer_rejected() {
        assert!(bytes_to_ip(&[10, 0], FAMILY_V4).is_err());
        assert!(bytes_to_ip(&[0u8; 4], FAMILY_V6).is_err());
    }
}
