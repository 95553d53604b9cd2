use byteorder::{BigEndian, ByteOrder};
use log::trace;

use super::header::HEADER_SIZE;
use super::{Class, Error, Header, Message, Name, Question, RRData, ResourceRecord, Type};

/// Sequential reader over a packet
///
/// Every section decoder takes its fields from the current position and
/// advances past them, so boundaries never depend on the end of the buffer.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Cursor<'a> {
        Cursor { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let end = self.pos.checked_add(len).ok_or(Error::TruncatedInput)?;
        let bytes = self.data.get(self.pos..end).ok_or(Error::TruncatedInput)?;
        self.pos = end;
        Ok(bytes)
    }

    fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    fn read_name(&mut self) -> Result<Name, Error> {
        let (name, consumed) = Name::scan(&self.data[self.pos..])?;
        self.pos += consumed;
        Ok(name)
    }

    fn read_question(&mut self) -> Result<Question, Error> {
        let qname = self.read_name()?;
        let qtype = Type::parse(self.read_u16()?)?;
        let qclass = Class::parse(self.read_u16()?)?;
        Ok(Question {
            qname,
            qtype,
            qclass,
        })
    }

    fn read_record(&mut self) -> Result<ResourceRecord, Error> {
        let name = self.read_name()?;
        let typ = Type::parse(self.read_u16()?)?;
        let cls = Class::parse(self.read_u16()?)?;
        let ttl = self.read_u32()?;
        let rdlen = self.read_u16()? as usize;
        let data = RRData::parse(typ, self.take(rdlen)?)?;
        Ok(ResourceRecord {
            name,
            cls,
            ttl,
            data,
        })
    }

    fn read_questions(&mut self, count: u16) -> Result<Vec<Question>, Error> {
        (0..count).map(|_| self.read_question()).collect()
    }

    fn read_records(&mut self, count: u16) -> Result<Vec<ResourceRecord>, Error> {
        (0..count).map(|_| self.read_record()).collect()
    }
}

impl Question {
    /// Parses one question at the start of `data`
    ///
    /// Returns the question and the number of octets it occupies.
    pub fn parse(data: &[u8]) -> Result<(Question, usize), Error> {
        let mut cursor = Cursor::new(data);
        let question = cursor.read_question()?;
        Ok((question, cursor.pos))
    }
}

impl ResourceRecord {
    /// Parses one resource record at the start of `data`
    ///
    /// Returns the record and the number of octets it occupies.
    pub fn parse(data: &[u8]) -> Result<(ResourceRecord, usize), Error> {
        let mut cursor = Cursor::new(data);
        let record = cursor.read_record()?;
        Ok((record, cursor.pos))
    }
}

impl Message {
    /// Parses the header and the question section only
    ///
    /// This is what a server needs from a query; the record sections of the
    /// result are left empty whatever the header announces, so records this
    /// parser does not understand cannot make the query unreadable.
    pub fn parse_query(data: &[u8]) -> Result<Message, Error> {
        let header = Header::parse(data)?;
        let mut cursor = Cursor::new(data);
        cursor.take(HEADER_SIZE)?;

        let questions = cursor.read_questions(header.questions)?;

        Ok(Message {
            header,
            questions,
            ..Message::default()
        })
    }

    /// Parses a whole packet
    ///
    /// Sections are read in order using the counts from the header. Octets
    /// after the last announced record are ignored.
    pub fn parse(data: &[u8]) -> Result<Message, Error> {
        let header = Header::parse(data)?;
        let mut cursor = Cursor::new(data);
        cursor.take(HEADER_SIZE)?;

        let questions = cursor.read_questions(header.questions)?;
        let answers = cursor.read_records(header.answers)?;
        let nameservers = cursor.read_records(header.nameservers)?;
        let additional = cursor.read_records(header.additional)?;

        if cursor.pos < data.len() {
            trace!("ignoring {} trailing octets", data.len() - cursor.pos);
        }

        Ok(Message {
            header,
            questions,
            answers,
            nameservers,
            additional,
        })
    }
}
