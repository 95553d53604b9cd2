use byteorder::{BigEndian, ByteOrder};

use super::{Error, Flags};

/// Size of the fixed header in octets
pub const HEADER_SIZE: usize = 12;

/// Represents parsed header of the packet
///
/// The section counts are what the packet claims. When a `Message` is
/// encoded they are recomputed from the section lengths, so setting them by
/// hand has no effect on the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub questions: u16,
    pub answers: u16,
    pub nameservers: u16,
    pub additional: u16,
}

impl Header {
    pub fn parse(data: &[u8]) -> Result<Header, Error> {
        if data.len() < HEADER_SIZE {
            return Err(Error::TruncatedInput);
        }
        Ok(Header {
            id: BigEndian::read_u16(&data[..2]),
            flags: Flags::from_bits(BigEndian::read_u16(&data[2..4])),
            questions: BigEndian::read_u16(&data[4..6]),
            answers: BigEndian::read_u16(&data[6..8]),
            nameservers: BigEndian::read_u16(&data[8..10]),
            additional: BigEndian::read_u16(&data[10..12]),
        })
    }

    /// Write a header to a buffer slice
    ///
    /// # Panics
    ///
    /// When buffer size is not exactly 12 bytes
    pub fn write(&self, data: &mut [u8]) {
        if data.len() != HEADER_SIZE {
            panic!("Header size is exactly 12 bytes");
        }
        BigEndian::write_u16(&mut data[..2], self.id);
        BigEndian::write_u16(&mut data[2..4], self.flags.to_bits());
        BigEndian::write_u16(&mut data[4..6], self.questions);
        BigEndian::write_u16(&mut data[6..8], self.answers);
        BigEndian::write_u16(&mut data[8..10], self.nameservers);
        BigEndian::write_u16(&mut data[10..12], self.additional);
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut data = [0u8; HEADER_SIZE];
        self.write(&mut data);
        data
    }

    /// Sets the TC bit in an already written header
    ///
    /// # Panics
    ///
    /// When buffer is shorter than 12 bytes
    pub(crate) fn set_truncated(data: &mut [u8]) {
        if data.len() < HEADER_SIZE {
            panic!("Header size is exactly 12 bytes");
        }
        data[2] |= 0b0000_0010;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dns_parser::{Opcode, ResponseCode};

    #[test]
    fn parse_example_query() {
        let query = b"\x06%\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\
                      \x07example\x03com\x00\x00\x01\x00\x01";
        let header = Header::parse(query).unwrap();
        assert_eq!(header.id, 1573);
        assert!(!header.flags.response);
        assert_eq!(header.flags.opcode, Opcode::StandardQuery);
        assert!(header.flags.recursion_desired);
        assert_eq!(header.questions, 1);
        assert_eq!(header.answers, 0);
        assert_eq!(header.nameservers, 0);
        assert_eq!(header.additional, 0);
    }

    #[test]
    fn write_example_header() {
        let header = Header {
            id: 1234,
            flags: Flags::from_bits(0x8000),
            questions: 1,
            ..Header::default()
        };
        assert_eq!(
            &header.to_bytes()[..],
            &b"\x04\xd2\x80\x00\x00\x01\x00\x00\x00\x00\x00\x00"[..]
        );
    }

    #[test]
    fn round_trip() {
        let header = Header {
            id: 0xbeef,
            flags: Flags {
                response: true,
                opcode: Opcode::ServerStatus,
                recursion_available: true,
                response_code: ResponseCode::Refused,
                ..Flags::default()
            },
            questions: 1,
            answers: 2,
            nameservers: 3,
            additional: 0xffff,
        };
        assert_eq!(Header::parse(&header.to_bytes()).unwrap(), header);
    }

    #[test]
    fn short_buffer() {
        assert_eq!(Header::parse(b"\x04\xd2"), Err(Error::TruncatedInput));
        assert_eq!(Header::parse(&[0u8; 11]), Err(Error::TruncatedInput));
    }

    #[test]
    #[should_panic]
    fn set_truncated_on_short_buffer() {
        Header::set_truncated(&mut [0u8; 2]);
    }

    #[test]
    fn truncated_bit() {
        let mut data = Header::default().to_bytes();
        Header::set_truncated(&mut data);
        assert!(Header::parse(&data).unwrap().flags.truncated);
    }
}
