//! DNS wire-format codec with a minimal UDP responder on top.
//!
//! [`decode`] and [`encode`] are pure functions over byte buffers. The
//! [`Responder`] turns one query datagram into one response datagram and the
//! [`Server`] drives it from a UDP socket.

use std::io;
use std::net::SocketAddr;

use log::info;

pub mod dns_parser;
mod net;
mod responder;
mod server;

pub use crate::dns_parser::{Error, Message};
pub use crate::net::bind_udp;
pub use crate::responder::{Responder, ResponderConfig};
pub use crate::server::{Server, ServerHandle};

pub const DEFAULT_TTL: u32 = 60;
pub const DEFAULT_PORT: u16 = 2053;

/// Decodes the header and question section of a query
pub fn decode(buffer: &[u8]) -> Result<Message, Error> {
    Message::parse_query(buffer)
}

/// Encodes `message` as a response
///
/// See [`Message::encode`] for how the header is derived.
pub fn encode(message: &Message) -> Result<Vec<u8>, Error> {
    message.encode()
}

/// Serves `config` on `addr` until the process ends
pub fn run(addr: SocketAddr, config: ResponderConfig) -> io::Result<()> {
    let socket = bind_udp(addr)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()?;

    runtime.block_on(async move {
        let (server, _handle) = Server::new(socket, Responder::new(config))?;
        info!("listening on {}", server.local_addr()?);
        server.await;
        Ok::<(), io::Error>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_parser::{Header, Opcode, ResponseCode};

    #[test]
    fn decode_then_encode() {
        let query = b"\x04\xd2\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x0ccodecrafters\x02io\x00\x00\x01\x00\x01";
        let message = decode(query).unwrap();
        assert_eq!(message.header.flags.opcode, Opcode::StandardQuery);

        let encoded = encode(&message).unwrap();
        let header = Header::parse(&encoded).unwrap();
        assert!(header.flags.response);
        assert_eq!(header.flags.response_code, ResponseCode::NoError);
        assert_eq!(header.questions, 1);
        assert_eq!(&encoded[12..], &query[12..]);
    }

    #[test]
    fn decode_rejects_short_input() {
        assert_eq!(decode(&[0u8; 11]), Err(Error::TruncatedInput));
    }
}
