use std::convert::TryFrom;
use std::io;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use log::debug;

use super::header::HEADER_SIZE;
use super::{Error, Header, Message, Opcode, Question, ResourceRecord, ResponseCode};

/// Largest message sent over UDP without extensions (RFC 1035, 4.2.1)
pub const MAX_MESSAGE_SIZE: usize = 512;

impl Question {
    pub fn write_to<T: io::Write>(&self, writer: &mut T) -> io::Result<()> {
        self.qname.write_to(writer)?;
        writer.write_u16::<BigEndian>(self.qtype as u16)?;
        writer.write_u16::<BigEndian>(self.qclass as u16)
    }
}

impl ResourceRecord {
    /// Appends the record to `buf`
    ///
    /// The RDLENGTH field is filled in after the payload has been written.
    pub fn write_to(&self, buf: &mut Vec<u8>) -> Result<(), Error> {
        self.name.write_to(buf)?;
        buf.write_u16::<BigEndian>(self.typ() as u16)?;
        buf.write_u16::<BigEndian>(self.cls as u16)?;
        buf.write_u32::<BigEndian>(self.ttl)?;

        let size_offset = buf.len();
        buf.write_u16::<BigEndian>(0)?;

        let data_offset = buf.len();
        self.data.write_to(buf)?;
        let data_size =
            u16::try_from(buf.len() - data_offset).map_err(|_| Error::WrongRdataLength)?;

        BigEndian::write_u16(&mut buf[size_offset..size_offset + 2], data_size);
        Ok(())
    }
}

fn section_len<T>(section: &[T]) -> Result<u16, Error> {
    u16::try_from(section.len()).map_err(|_| Error::SectionTooLarge(section.len()))
}

impl Message {
    /// The header as it is written by `encode`
    ///
    /// Section counts come from the section lengths, the QR bit is set, and
    /// the response code is `NoError` for standard queries and
    /// `NotImplemented` for every other opcode.
    pub fn response_header(&self) -> Result<Header, Error> {
        let mut header = self.header;
        header.questions = section_len(&self.questions)?;
        header.answers = section_len(&self.answers)?;
        header.nameservers = section_len(&self.nameservers)?;
        header.additional = section_len(&self.additional)?;

        header.flags.response = true;
        header.flags.response_code = if header.flags.opcode == Opcode::StandardQuery {
            ResponseCode::NoError
        } else {
            ResponseCode::NotImplemented
        };
        Ok(header)
    }

    /// Serializes the message as a response
    ///
    /// When the result is longer than 512 octets the whole message is still
    /// returned, with the TC bit set.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        self.encode_with_limit(Some(MAX_MESSAGE_SIZE))
    }

    pub fn encode_with_limit(&self, max_size: Option<usize>) -> Result<Vec<u8>, Error> {
        let header = self.response_header()?;

        let mut buf = Vec::with_capacity(MAX_MESSAGE_SIZE);
        buf.extend_from_slice(&header.to_bytes());
        for question in &self.questions {
            question.write_to(&mut buf)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.nameservers)
            .chain(&self.additional)
        {
            record.write_to(&mut buf)?;
        }

        match max_size {
            Some(max_size) if buf.len() > max_size => {
                debug!(
                    "response is {} octets, limit is {}; setting TC",
                    buf.len(),
                    max_size
                );
                Header::set_truncated(&mut buf[..HEADER_SIZE]);
            }
            _ => (),
        }
        Ok(buf)
    }
}
