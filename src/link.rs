use netlink_packet_core::NLM_F_DUMP;
use netlink_packet_route::link::nlas::Nla;
use netlink_packet_route::{LinkMessage, RtnlMessage, IFF_UP};

use crate::error::NetError;
use crate::handle::NetlinkHandle;

/// A kernel interface, reduced to what gateway selection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub index: u32,
    pub name: String,
    pub up: bool,
}

pub fn link_from_msg(msg: &LinkMessage) -> Result<Link, NetError> {
    let mut name = None;
    for nla in &msg.nlas {
        if let Nla::IfName(n) = nla {
            name = Some(n.clone());
        }
    }
    let name = name.ok_or_else(|| {
        NetError::Parse(format!("link {} without IFLA_IFNAME", msg.header.index))
    })?;
    Ok(Link {
        index: msg.header.index,
        name,
        up: msg.header.flags & IFF_UP != 0,
    })
}

pub fn dump_links(handle: &mut NetlinkHandle) -> Result<Vec<Link>, NetError> {
    let msg = LinkMessage::default();
    let replies = handle.execute(RtnlMessage::GetLink(msg), NLM_F_DUMP)?;
    let mut links = Vec::new();
    for reply in replies {
        if let RtnlMessage::NewLink(m) = reply {
            match link_from_msg(&m) {
                Ok(link) => links.push(link),
                Err(e) => log::warn!("dropping unparseable link: {e}"),
            }
        }
    }
    Ok(links)
}

/// Resolve an interface name to its kernel index.
pub fn link_name_to_index(handle: &mut NetlinkHandle, name: &str) -> Result<u32, NetError> {
    let mut msg = LinkMessage::default();
    msg.nlas.push(Nla::IfName(name.to_owned()));
    let replies = handle.execute(RtnlMessage::GetLink(msg), 0)?;
    match replies.first() {
        Some(RtnlMessage::NewLink(m)) => Ok(m.header.index),
        _ => Err(NetError::NotFound(format!("link not found: {name}"))),
    }
}
