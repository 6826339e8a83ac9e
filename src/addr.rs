use ipnetwork::IpNetwork;
use netlink_packet_core::NLM_F_DUMP;
use netlink_packet_route::address::{AddressMessage, Nla};
use netlink_packet_route::RtnlMessage;

use crate::error::NetError;
use crate::handle::NetlinkHandle;
use crate::utils;

/// An interface address with its prefix, keyed to the owning link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAddress {
    pub link_index: u32,
    pub address: IpNetwork,
}

/// IFA_LOCAL is the interface's own address; IFA_ADDRESS is the peer on
/// point-to-point links. Local wins when both are present.
pub fn addr_from_msg(msg: &AddressMessage) -> Result<LinkAddress, NetError> {
    let family = msg.header.family;
    let prefix_len = msg.header.prefix_len;
    let mut local = None;
    let mut address = None;
    for nla in &msg.nlas {
        match nla {
            Nla::Local(bytes) => local = Some(utils::bytes_to_ip(bytes, family)?),
            Nla::Address(bytes) => address = Some(utils::bytes_to_ip(bytes, family)?),
            _ => {}
        }
    }
    let ip = local.or(address).ok_or_else(|| {
        NetError::Parse(format!("address on link {} without payload", msg.header.index))
    })?;
    let network = IpNetwork::new(ip, prefix_len)
        .map_err(|e| NetError::Parse(format!("bad prefix {prefix_len}: {e}")))?;
    Ok(LinkAddress {
        link_index: msg.header.index,
        address: network,
    })
}

pub fn dump_addrs(handle: &mut NetlinkHandle) -> Result<Vec<LinkAddress>, NetError> {
    let msg = AddressMessage::default();
    let replies = handle.execute(RtnlMessage::GetAddress(msg), NLM_F_DUMP)?;
    let mut addrs = Vec::new();
    for reply in replies {
        if let RtnlMessage::NewAddress(m) = reply {
            match addr_from_msg(&m) {
                Ok(addr) => addrs.push(addr),
                Err(e) => log::warn!("dropping unparseable address: {e}"),
            }
        }
    }
    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nl_type::{FAMILY_V4, FAMILY_V6};

    fn addr_msg(index: u32, family: u8, prefix_len: u8) -> AddressMessage {
        let mut msg = AddressMessage::default();
        msg.header.index = index;
        msg.header.family = family;
        msg.header.prefix_len = prefix_len;
        msg
    }

    #[test]
    fn test_local_preferred_over_address() {
        let mut msg = addr_msg(1, FAMILY_V4, 24);
        msg.nlas.push(Nla::Address(vec![10, 0, 0, 99]));
        msg.nlas.push(Nla::Local(vec![10, 0, 0, 5]));
        let addr = addr_from_msg(&msg).unwrap();
        assert_eq!(addr.address, "10.0.0.5/24".parse().unwrap());
        assert_eq!(addr.link_index, 1);
    }

    #[test]
    fn test_address_fallback() {
        let mut msg = addr_msg(2, FAMILY_V6, 64);
        let ip: std::net::Ipv6Addr = "fd00::1".parse().unwrap();
        msg.nlas.push(Nla::Address(ip.octets().to_vec()));
        let addr = addr_from_msg(&msg).unwrap();
        assert_eq!(addr.address, "fd00::1/64".parse().unwrap());
    }

    #[test]
    fn test_empty_message_rejected() {
        let msg = addr_msg(3, FAMILY_V4, 24);
        assert!(matches!(addr_from_msg(&msg), Err(NetError::Parse(_))));
    }
}
