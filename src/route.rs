use std::net::IpAddr;

use ipnetwork::IpNetwork;
use netlink_packet_core::{NLM_F_CREATE, NLM_F_DUMP, NLM_F_EXCL};
use netlink_packet_route::route::Nla;
use netlink_packet_route::{
    RouteMessage, RtnlMessage, RTM_F_CLONED, RTN_UNICAST, RTN_UNSPEC, RTPROT_STATIC,
    RTPROT_UNSPEC, RT_SCOPE_UNIVERSE, RT_TABLE_UNSPEC,
};

use crate::error::NetError;
use crate::handle::NetlinkHandle;
use crate::utils;

/// A forwarding entry as mirrored from the kernel. `gateway` is present
/// iff the kernel attached RTA_GATEWAY; `link_index` is 0 when the kernel
/// left the output interface unspecified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub destination: IpNetwork,
    pub gateway: Option<IpAddr>,
    pub link_index: u32,
}

/// Parse a kernel route record, returning `None` for records outside the
/// requested FIB and for kernel-cloned entries.
pub fn route_from_msg(msg: &RouteMessage, fib: u32) -> Result<Option<Route>, NetError> {
    if msg.header.flags & RTM_F_CLONED != 0 {
        return Ok(None);
    }
    let family = msg.header.address_family;
    let mut table = msg.header.table as u32;
    let mut dst_ip = None;
    let mut gateway = None;
    let mut link_index = 0;
    for nla in &msg.nlas {
        match nla {
            Nla::Destination(bytes) => dst_ip = Some(utils::bytes_to_ip(bytes, family)?),
            Nla::Gateway(bytes) => gateway = Some(utils::bytes_to_ip(bytes, family)?),
            Nla::Oif(oif) => link_index = *oif,
            Nla::Table(t) => table = *t,
            _ => {}
        }
    }
    if table != fib {
        return Ok(None);
    }
    // the kernel omits RTA_DST on the all-zeroes destination
    let dst_ip = match dst_ip {
        Some(ip) => ip,
        None => utils::bytes_to_ip(&[0u8; 16], family)?,
    };
    let destination = IpNetwork::new(dst_ip, msg.header.destination_prefix_length)
        .map_err(|e| NetError::Parse(format!("bad destination prefix: {e}")))?;
    Ok(Some(Route {
        destination,
        gateway,
        link_index,
    }))
}

pub fn dump_routes(handle: &mut NetlinkHandle, fib: u32) -> Result<Vec<Route>, NetError> {
    let mut msg = RouteMessage::default();
    msg.header.table = table_header(fib);
    msg.nlas.push(Nla::Table(fib));
    let replies = handle.execute(RtnlMessage::GetRoute(msg), NLM_F_DUMP)?;
    let mut routes = Vec::new();
    for reply in replies {
        if let RtnlMessage::NewRoute(m) = reply {
            match route_from_msg(&m, fib) {
                Ok(Some(route)) => routes.push(route),
                Ok(None) => {}
                Err(e) => log::warn!("dropping unparseable route: {e}"),
            }
        }
    }
    Ok(routes)
}

fn table_header(fib: u32) -> u8 {
    if fib > u8::MAX as u32 {
        RT_TABLE_UNSPEC
    } else {
        fib as u8
    }
}

fn route_request(
    fib: u32,
    destination: &IpNetwork,
    gateway: Option<IpAddr>,
    out_link: Option<u32>,
) -> Result<RouteMessage, NetError> {
    if let Some(gw) = gateway {
        if utils::ip_to_family(&gw) != utils::ip_to_family(&destination.ip()) {
            return Err(NetError::InvalidArgument(format!(
                "gateway {gw} does not match destination {destination}"
            )));
        }
    }
    let mut msg = RouteMessage::default();
    msg.header.address_family = utils::ip_to_family(&destination.ip());
    msg.header.destination_prefix_length = destination.prefix();
    msg.header.scope = RT_SCOPE_UNIVERSE;
    msg.header.table = table_header(fib);
    msg.nlas.push(Nla::Destination(utils::ip_to_bytes(&destination.ip())));
    msg.nlas.push(Nla::Table(fib));
    if let Some(gw) = gateway {
        msg.nlas.push(Nla::Gateway(utils::ip_to_bytes(&gw)));
    }
    if let Some(oif) = out_link {
        msg.nlas.push(Nla::Oif(oif));
    }
    Ok(msg)
}

pub fn route_add(
    handle: &mut NetlinkHandle,
    fib: u32,
    destination: &IpNetwork,
    gateway: Option<IpAddr>,
    out_link: Option<u32>,
) -> Result<(), NetError> {
    let mut msg = route_request(fib, destination, gateway, out_link)?;
    msg.header.protocol = RTPROT_STATIC;
    msg.header.kind = RTN_UNICAST;
    handle.execute(RtnlMessage::NewRoute(msg), NLM_F_CREATE | NLM_F_EXCL)?;
    Ok(())
}

pub fn route_del(
    handle: &mut NetlinkHandle,
    fib: u32,
    destination: &IpNetwork,
    gateway: Option<IpAddr>,
    out_link: Option<u32>,
) -> Result<(), NetError> {
    let mut msg = route_request(fib, destination, gateway, out_link)?;
    msg.header.protocol = RTPROT_UNSPEC;
    msg.header.kind = RTN_UNSPEC;
    handle.execute(RtnlMessage::DelRoute(msg), 0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nl_type::{FAMILY_V4, FAMILY_V6};

    fn route_msg(family: u8, dst_len: u8) -> RouteMessage {
        let mut msg = RouteMessage::default();
        msg.header.address_family = family;
        msg.header.destination_prefix_length = dst_len;
        msg
    }

    #[test]
    fn test_default_route_without_dst_attr() {
        let mut msg = route_msg(FAMILY_V4, 0);
        msg.nlas.push(Nla::Gateway(vec![10, 0, 0, 1]));
        msg.nlas.push(Nla::Oif(1));
        let route = route_from_msg(&msg, 0).unwrap().unwrap();
        assert_eq!(route.destination, "0.0.0.0/0".parse().unwrap());
        assert_eq!(route.gateway, Some("10.0.0.1".parse().unwrap()));
        assert_eq!(route.link_index, 1);
    }

    #[test]
    fn test_connected_route_has_no_gateway() {
        let mut msg = route_msg(FAMILY_V4, 24);
        msg.nlas.push(Nla::Destination(vec![10, 0, 0, 0]));
        msg.nlas.push(Nla::Oif(2));
        let route = route_from_msg(&msg, 0).unwrap().unwrap();
        assert_eq!(route.destination, "10.0.0.0/24".parse().unwrap());
        assert_eq!(route.gateway, None);
    }

    #[test]
    fn test_cloned_route_skipped() {
        let mut msg = route_msg(FAMILY_V4, 32);
        msg.header.flags = RTM_F_CLONED;
        assert!(route_from_msg(&msg, 0).unwrap().is_none());
    }

    #[test]
    fn test_other_fib_skipped() {
        let mut msg = route_msg(FAMILY_V6, 0);
        msg.nlas.push(Nla::Table(3));
        assert!(route_from_msg(&msg, 0).unwrap().is_none());
        assert!(route_from_msg(&msg, 3).unwrap().is_some());
    }

    #[test]
    fn test_route_request_family_mismatch() {
        let dst = "0.0.0.0/0".parse().unwrap();
        let gw: IpAddr = "fd00::1".parse().unwrap();
        assert!(matches!(
            route_request(0, &dst, Some(gw), None),
            Err(NetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_route_request_attrs() {
        let dst = "0.0.0.0/0".parse().unwrap();
        let gw: IpAddr = "10.0.0.1".parse().unwrap();
        let msg = route_request(0, &dst, Some(gw), Some(1)).unwrap();
        assert_eq!(msg.header.address_family, FAMILY_V4);
        assert!(msg.nlas.contains(&Nla::Table(0)));
        assert!(msg.nlas.contains(&Nla::Gateway(vec![10, 0, 0, 1])));
        assert!(msg.nlas.contains(&Nla::Oif(1)));
    }

    #[test]
    fn test_large_fib_rides_in_attr() {
        let dst = "::/0".parse().unwrap();
        let msg = route_request(300, &dst, None, None).unwrap();
        assert_eq!(msg.header.table, RT_TABLE_UNSPEC);
        assert!(msg.nlas.contains(&Nla::Table(300)));
    }
}
