use std::io::ErrorKind;
use std::os::unix::io::AsRawFd;
use std::time::Duration;

use bytes::BytesMut;
use log::warn;
use netlink_packet_core::{NetlinkMessage, NetlinkPayload};
use netlink_packet_route::RtnlMessage;
use netlink_sys::protocols::NETLINK_ROUTE;
use netlink_sys::SocketAddr;

use crate::addr::{addr_from_msg, LinkAddress};
use crate::error::NetError;
use crate::handle;
use crate::link::{link_from_msg, Link};
use crate::route::{route_from_msg, Route};

// rtnetlink multicast group ids
pub const RTNLGRP_LINK: u32 = 1;
pub const RTNLGRP_IPV4_IFADDR: u32 = 5;
pub const RTNLGRP_IPV4_ROUTE: u32 = 7;
pub const RTNLGRP_IPV6_IFADDR: u32 = 9;
pub const RTNLGRP_IPV6_ROUTE: u32 = 11;

pub const SUBSCRIBED_GROUPS: [u32; 5] = [
    RTNLGRP_LINK,
    RTNLGRP_IPV4_IFADDR,
    RTNLGRP_IPV4_ROUTE,
    RTNLGRP_IPV6_IFADDR,
    RTNLGRP_IPV6_ROUTE,
];

/// One applied-to-the-mirror kernel notification.
#[derive(Debug, Clone)]
pub enum Event {
    NewLink(Link),
    DelLink(u32),
    NewAddr(LinkAddress),
    DelAddr(LinkAddress),
    NewRoute(Route),
    DelRoute(Route),
}

impl Event {
    /// Map a notification to an event, or `None` for kinds and FIBs the
    /// mirror does not track.
    pub fn classify(msg: RtnlMessage, fib: u32) -> Result<Option<Event>, NetError> {
        match msg {
            RtnlMessage::NewLink(m) => Ok(Some(Event::NewLink(link_from_msg(&m)?))),
            RtnlMessage::DelLink(m) => Ok(Some(Event::DelLink(m.header.index))),
            RtnlMessage::NewAddress(m) => Ok(Some(Event::NewAddr(addr_from_msg(&m)?))),
            RtnlMessage::DelAddress(m) => Ok(Some(Event::DelAddr(addr_from_msg(&m)?))),
            RtnlMessage::NewRoute(m) => Ok(route_from_msg(&m, fib)?.map(Event::NewRoute)),
            RtnlMessage::DelRoute(m) => Ok(route_from_msg(&m, fib)?.map(Event::DelRoute)),
            other => {
                warn!("dropping unhandled notification: {other:?}");
                Ok(None)
            }
        }
    }
}

/// The subscribed notification socket. Distinct from the command socket so
/// that a blocking request never stalls event reception.
pub struct EventSocket {
    socket: netlink_sys::Socket,
    buf: BytesMut,
    fib: u32,
    timeout: Option<Duration>,
}

const EVENT_BUF_CAPACITY: usize = 64 * 1024;

impl EventSocket {
    pub fn subscribe(fib: u32, groups: &[u32]) -> Result<EventSocket, NetError> {
        let mut socket = netlink_sys::Socket::new(NETLINK_ROUTE)?;
        socket.bind(&SocketAddr::new(0, 0))?;
        for group in groups {
            socket.add_membership(*group)?;
        }
        socket.set_pktinfo(true)?;
        Ok(EventSocket {
            socket,
            buf: BytesMut::with_capacity(EVENT_BUF_CAPACITY),
            fib,
            timeout: None,
        })
    }

    /// Block for up to `timeout` and return one notification, or `None`
    /// when the window elapses quietly.
    pub fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>, NetError> {
        if self.timeout != Some(timeout) {
            self.set_read_timeout(timeout)?;
            self.timeout = Some(timeout);
        }
        loop {
            while let Some(msg) = handle::decode::<RtnlMessage>(&mut self.buf) {
                if let Some(event) = self.accept(msg) {
                    return Ok(Some(event));
                }
            }
            self.buf.clear();
            self.buf.reserve(EVENT_BUF_CAPACITY);
            match self.socket.recv(&mut self.buf, 0) {
                Ok(_) => {}
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Ok(None)
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn accept(&self, msg: NetlinkMessage<RtnlMessage>) -> Option<Event> {
        let inner = match msg.payload {
            NetlinkPayload::InnerMessage(inner) => inner,
            other => {
                warn!("dropping non-notification payload: {other:?}");
                return None;
            }
        };
        match Event::classify(inner, self.fib) {
            Ok(event) => event,
            Err(e) => {
                // the mirror stays briefly inconsistent until the kernel
                // re-announces; never fatal
                warn!("dropping unparseable notification: {e}");
                None
            }
        }
    }

    fn set_read_timeout(&self, timeout: Duration) -> Result<(), NetError> {
        let tv = libc::timeval {
            tv_sec: timeout.as_secs() as libc::time_t,
            tv_usec: timeout.subsec_micros() as libc::suseconds_t,
        };
        let rc = unsafe {
            libc::setsockopt(
                self.socket.as_raw_fd(),
                libc::SOL_SOCKET,
                libc::SO_RCVTIMEO,
                &tv as *const libc::timeval as *const libc::c_void,
                std::mem::size_of::<libc::timeval>() as libc::socklen_t,
            )
        };
        if rc != 0 {
            return Err(NetError::Io(std::io::Error::last_os_error()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netlink_packet_route::link::nlas::Nla as LinkNla;
    use netlink_packet_route::route::Nla as RouteNla;
    use netlink_packet_route::{LinkMessage, NeighbourMessage, RouteMessage, IFF_UP};

    use crate::nl_type::FAMILY_V4;

    #[test]
    fn test_classify_link_events() {
        let mut msg = LinkMessage::default();
        msg.header.index = 1;
        msg.header.flags = IFF_UP;
        msg.nlas.push(LinkNla::IfName("em0".to_string()));
        match Event::classify(RtnlMessage::NewLink(msg), 0).unwrap() {
            Some(Event::NewLink(link)) => {
                assert_eq!(link.name, "em0");
                assert!(link.up);
            }
            other => panic!("unexpected event: {other:?}"),
        }

        let mut msg = LinkMessage::default();
        msg.header.index = 7;
        match Event::classify(RtnlMessage::DelLink(msg), 0).unwrap() {
            Some(Event::DelLink(7)) => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_classify_route_other_fib_dropped() {
        let mut msg = RouteMessage::default();
        msg.header.address_family = FAMILY_V4;
        msg.nlas.push(RouteNla::Table(9));
        assert!(Event::classify(RtnlMessage::NewRoute(msg), 0)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_classify_unhandled_kind_dropped() {
        let msg = NeighbourMessage::default();
        assert!(Event::classify(RtnlMessage::NewNeighbour(msg), 0)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_classify_bad_addr_is_parse_error() {
        let msg = netlink_packet_route::address::AddressMessage::default();
        assert!(Event::classify(RtnlMessage::NewAddress(msg), 0).is_err());
    }
}
