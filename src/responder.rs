use std::net::{Ipv4Addr, SocketAddr};

use log::{debug, trace, warn};

use crate::dns_parser::{Class, Flags, Header, Message, Opcode, RRData, ResourceRecord};
use crate::DEFAULT_TTL;

/// What the responder puts in the answer to every question
#[derive(Clone, Debug)]
pub struct ResponderConfig {
    pub ttl: u32,
    pub address: Ipv4Addr,
}

impl Default for ResponderConfig {
    fn default() -> ResponderConfig {
        ResponderConfig {
            ttl: DEFAULT_TTL,
            address: Ipv4Addr::new(8, 8, 8, 8),
        }
    }
}

/// Turns query datagrams into response datagrams
///
/// Every question of a standard query is answered with an A record for the
/// configured address. Other opcodes get their questions echoed with no
/// answers, which the encoder marks as `NotImplemented`.
#[derive(Clone, Debug, Default)]
pub struct Responder {
    config: ResponderConfig,
}

impl Responder {
    pub fn new(config: ResponderConfig) -> Responder {
        Responder { config }
    }

    /// Returns the datagram to send back to `addr`, if any
    ///
    /// Packets that cannot be parsed and packets that are responses
    /// themselves are dropped.
    pub fn handle_packet(&self, buffer: &[u8], addr: SocketAddr) -> Option<Vec<u8>> {
        trace!("received packet from {:?}", addr);

        let packet = match crate::decode(buffer) {
            Ok(packet) => packet,
            Err(error) => {
                warn!("couldn't parse packet from {:?}: {}", addr, error);
                return None;
            }
        };

        if packet.header.flags.response {
            trace!("received packet from {:?} with no query", addr);
            return None;
        }

        for question in &packet.questions {
            debug!(
                "received question: {:?} {:?} {}",
                question.qclass, question.qtype, question.qname
            );
        }

        match self.build_response(packet).encode() {
            Ok(response) => Some(response),
            Err(error) => {
                warn!("couldn't encode response to {:?}: {}", addr, error);
                None
            }
        }
    }

    pub fn build_response(&self, query: Message) -> Message {
        let opcode = query.header.flags.opcode;
        let header = Header {
            id: query.header.id,
            flags: Flags {
                opcode,
                recursion_desired: query.header.flags.recursion_desired,
                ..Flags::default()
            },
            ..Header::default()
        };

        let answers = if opcode == Opcode::StandardQuery {
            query
                .questions
                .iter()
                .map(|question| ResourceRecord {
                    name: question.qname.clone(),
                    cls: answer_class(question.qclass),
                    ttl: self.config.ttl,
                    data: RRData::A(self.config.address),
                })
                .collect()
        } else {
            Vec::new()
        };

        Message {
            header,
            questions: query.questions,
            answers,
            ..Message::default()
        }
    }
}

/// ANY is only meaningful in a question; answers to it are Internet records
fn answer_class(qclass: Class) -> Class {
    match qclass {
        Class::Any => Class::IN,
        cls => cls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns_parser::{ResponseCode, Type};

    fn addr() -> SocketAddr {
        "127.0.0.1:5353".parse().unwrap()
    }

    #[test]
    fn answers_standard_query() {
        let query = b"\x04\xd2\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x0ccodecrafters\x02io\x00\x00\x01\x00\x01";
        let response = Responder::default().handle_packet(query, addr()).unwrap();

        let expected = b"\x04\xd2\x81\x00\x00\x01\x00\x01\x00\x00\x00\x00\
                         \x0ccodecrafters\x02io\x00\x00\x01\x00\x01\
                         \x0ccodecrafters\x02io\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x08\x08\x08\x08";
        assert_eq!(&response[..], &expected[..]);
    }

    #[test]
    fn uses_configured_answer() {
        let responder = Responder::new(ResponderConfig {
            ttl: 300,
            address: Ipv4Addr::new(192, 0, 2, 7),
        });
        let query = b"\x00\x2a\x00\x00\x00\x02\x00\x00\x00\x00\x00\x00\
                      \x01a\x00\x00\x01\x00\x01\
                      \x01b\x00\x00\x1c\x00\x03";
        let response =
            Message::parse(&responder.handle_packet(query, addr()).unwrap()).unwrap();

        assert_eq!(response.header.id, 42);
        assert_eq!(response.questions.len(), 2);
        assert_eq!(response.questions[1].qtype, Type::AAAA);
        assert_eq!(response.answers.len(), 2);
        assert_eq!(response.answers[1].name.as_str(), "b");
        assert_eq!(response.answers[1].cls, Class::CH);
        assert_eq!(response.answers[1].ttl, 300);
        assert_eq!(
            response.answers[1].data,
            RRData::A(Ipv4Addr::new(192, 0, 2, 7))
        );
    }

    #[test]
    fn any_class_is_answered_in_internet_class() {
        let query = b"\x00\x05\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x02io\x00\x00\x01\x00\xff";
        let response =
            Message::parse(&Responder::default().handle_packet(query, addr()).unwrap()).unwrap();
        assert_eq!(response.questions[0].qclass, Class::Any);
        assert_eq!(response.answers.len(), 1);
        assert_eq!(response.answers[0].cls, Class::IN);
    }

    #[test]
    fn other_opcodes_are_not_implemented() {
        // opcode 2 (status)
        let query = b"\x00\x01\x10\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x02io\x00\x00\x01\x00\x01";
        let response =
            Message::parse(&Responder::default().handle_packet(query, addr()).unwrap()).unwrap();
        assert!(response.header.flags.response);
        assert_eq!(response.header.flags.opcode, Opcode::ServerStatus);
        assert_eq!(
            response.header.flags.response_code,
            ResponseCode::NotImplemented
        );
        assert_eq!(response.questions.len(), 1);
        assert!(response.answers.is_empty());
    }

    #[test]
    fn drops_bad_packets() {
        let responder = Responder::default();
        assert_eq!(responder.handle_packet(b"\x04\xd2", addr()), None);
        // question section cut short
        assert_eq!(
            responder.handle_packet(
                b"\x00\x01\x00\x00\x00\x01\x00\x00\x00\x00\x00\x00\x05ab",
                addr()
            ),
            None
        );
        // already a response
        assert_eq!(
            responder.handle_packet(
                b"\x00\x01\x80\x00\x00\x00\x00\x00\x00\x00\x00\x00",
                addr()
            ),
            None
        );
    }
}
