use bytes::BytesMut;
use log::{debug, error};
use netlink_packet_core::{
    NetlinkBuffer, NetlinkDeserializable, NetlinkMessage, NetlinkPayload, NLM_F_ACK,
    NLM_F_MULTIPART, NLM_F_REQUEST,
};
use netlink_packet_route::RtnlMessage;
use netlink_sys::protocols::NETLINK_ROUTE;
use netlink_sys::SocketAddr;

use crate::error::NetError;

/// Synchronous request/reply socket. One instance per logical use; a
/// blocking command must never share a socket with the event stream.
pub struct NetlinkHandle {
    seq: u32,
    socket: netlink_sys::Socket,
}

/// Split one parsed message off the front of a received datagram.
pub(crate) fn decode<T>(src: &mut BytesMut) -> Option<NetlinkMessage<T>>
where
    T: NetlinkDeserializable,
{
    loop {
        if src.is_empty() {
            return None;
        }

        let len = match NetlinkBuffer::new_checked(src.as_ref()) {
            Ok(buf) => buf.length() as usize,
            Err(e) => {
                // A truncated or malformed length field means we cannot
                // find the start of the next message either. Drop the
                // whole buffer and resynchronize on the next read.
                error!("failed to decode datagram, clearing buffer: {e:?}");
                src.clear();
                return None;
            }
        };

        let bytes = src.split_to(len);
        match NetlinkMessage::<T>::deserialize(&bytes) {
            Ok(packet) => return Some(packet),
            Err(e) => {
                // there may be more messages behind the bad one
                error!("failed to decode packet: {e}");
            }
        }
    }
}

const INITIAL_READER_CAPACITY: usize = 64 * 1024;

const ENOENT: i32 = 2;
const ENODEV: i32 = 19;

impl NetlinkHandle {
    pub fn new() -> Result<NetlinkHandle, NetError> {
        let mut socket = netlink_sys::Socket::new(NETLINK_ROUTE)?;
        socket.bind(&SocketAddr::new(0, 0))?;
        Ok(Self { seq: 0, socket })
    }

    pub fn execute(
        &mut self,
        msg: RtnlMessage,
        flags: u16,
    ) -> Result<Vec<RtnlMessage>, NetError> {
        self.send(msg, flags)?;
        self.recv()
    }

    fn send(&mut self, msg: RtnlMessage, flags: u16) -> Result<(), NetError> {
        let mut packet = NetlinkMessage::from(msg);
        self.seq += 1;
        packet.header.sequence_number = self.seq;
        packet.header.flags = flags | NLM_F_REQUEST | NLM_F_ACK;
        packet.finalize();

        let mut bytes = vec![0u8; packet.buffer_len()];
        packet.serialize(&mut bytes);
        self.socket.send(&bytes, 0)?;
        Ok(())
    }

    fn next_msg<T>(&self, src: &mut BytesMut) -> Result<NetlinkMessage<T>, NetError>
    where
        T: NetlinkDeserializable,
    {
        loop {
            if let Some(msg) = decode(src) {
                return Ok(msg);
            }
            src.clear();
            src.reserve(INITIAL_READER_CAPACITY);
            self.socket.recv(src, 0)?;
        }
    }

    fn recv(&mut self) -> Result<Vec<RtnlMessage>, NetError> {
        let mut result = Vec::new();
        let mut src = BytesMut::with_capacity(INITIAL_READER_CAPACITY);

        loop {
            let msg: NetlinkMessage<RtnlMessage> = self.next_msg(&mut src)?;
            if msg.header.sequence_number != self.seq {
                // replies to an abandoned request (e.g. the trailing ack of
                // a single-part get) are skipped, not fatal
                if msg.header.sequence_number < self.seq {
                    debug!("skipping stale reply seq {}", msg.header.sequence_number);
                    continue;
                }
                return Err(NetError::Parse(format!(
                    "seq mismatch: {} != {}",
                    msg.header.sequence_number, self.seq
                )));
            }
            let is_multi = (msg.header.flags & NLM_F_MULTIPART) != 0;
            match msg.payload {
                NetlinkPayload::Done(_) => return Ok(result),
                NetlinkPayload::Error(e) => {
                    let Some(code) = e.code else {
                        // empty error frame is the acknowledgement
                        return Ok(result);
                    };
                    let errno = -code.get();
                    if errno == ENOENT || errno == ENODEV {
                        return Err(NetError::NotFound(e.to_string()));
                    }
                    return Err(NetError::kernel(errno, Some(e.to_string())));
                }
                NetlinkPayload::InnerMessage(msg) => {
                    result.push(msg);
                    if !is_multi {
                        return Ok(result);
                    }
                }
                other => {
                    return Err(NetError::Parse(format!("unexpected payload: {other:?}")));
                }
            }
        }
    }
}
