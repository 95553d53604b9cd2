use super::{Class, Header, Name, RRData, Type};

/// A whole DNS message
///
/// The counts in `header` are ignored when encoding; the lengths of the
/// section vectors are written instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub nameservers: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

/// A parsed chunk of data in the Query section of the packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub qname: Name,
    pub qtype: Type,
    pub qclass: Class,
}

/// A single DNS record
///
/// The record TYPE is carried by `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub cls: Class,
    pub ttl: u32,
    pub data: RRData,
}

impl ResourceRecord {
    pub fn typ(&self) -> Type {
        self.data.typ()
    }
}
