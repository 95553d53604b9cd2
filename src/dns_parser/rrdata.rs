use std::io;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use super::{Error, Name, Type};

/// The enumeration that represents known types of DNS resource records data
///
/// The variant decides the TYPE code written for the record. Types without a
/// variant of their own travel as `Unknown` with their payload untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RRData {
    CNAME(Name),
    NS(Name),
    PTR(Name),
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    // Anything that can't be parsed yet
    Unknown { typ: Type, data: Vec<u8> },
}

impl RRData {
    /// Builds an address record payload from a dotted quad such as `"8.8.8.8"`
    pub fn a(address: &str) -> Result<RRData, Error> {
        let mut octets = [0u8; 4];
        let mut parts = address.split('.');
        for octet in octets.iter_mut() {
            *octet = parts
                .next()
                .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|part| part.parse::<u8>().ok())
                .ok_or_else(|| Error::InvalidAddress(address.to_owned()))?;
        }
        if parts.next().is_some() {
            return Err(Error::InvalidAddress(address.to_owned()));
        }
        Ok(RRData::A(Ipv4Addr::from(octets)))
    }

    pub fn typ(&self) -> Type {
        match *self {
            RRData::CNAME(..) => Type::CNAME,
            RRData::NS(..) => Type::NS,
            RRData::PTR(..) => Type::PTR,
            RRData::A(..) => Type::A,
            RRData::AAAA(..) => Type::AAAA,
            RRData::Unknown { typ, .. } => typ,
        }
    }

    pub fn write_to<T: io::Write>(&self, writer: &mut T) -> io::Result<()> {
        match *self {
            RRData::CNAME(ref name) | RRData::NS(ref name) | RRData::PTR(ref name) => {
                name.write_to(writer)
            }

            RRData::A(ip) => writer.write_u32::<BigEndian>(ip.into()),

            RRData::AAAA(ip) => {
                for segment in ip.segments().iter() {
                    writer.write_u16::<BigEndian>(*segment)?;
                }
                Ok(())
            }
            RRData::Unknown { ref data, .. } => writer.write_all(data),
        }
    }

    /// Parses the payload of a record of type `typ`
    ///
    /// Names inside the payload must fill it exactly.
    pub fn parse(typ: Type, rdata: &[u8]) -> Result<RRData, Error> {
        match typ {
            Type::A => {
                if rdata.len() != 4 {
                    return Err(Error::WrongRdataLength);
                }
                Ok(RRData::A(Ipv4Addr::from(BigEndian::read_u32(rdata))))
            }
            Type::AAAA => {
                if rdata.len() != 16 {
                    return Err(Error::WrongRdataLength);
                }
                let mut segments = [0u16; 8];
                BigEndian::read_u16_into(rdata, &mut segments);
                Ok(RRData::AAAA(Ipv6Addr::from(segments)))
            }
            Type::CNAME => Ok(RRData::CNAME(parse_name(rdata)?)),
            Type::NS => Ok(RRData::NS(parse_name(rdata)?)),
            Type::PTR => Ok(RRData::PTR(parse_name(rdata)?)),
            typ => Ok(RRData::Unknown {
                typ,
                data: rdata.to_vec(),
            }),
        }
    }
}

fn parse_name(rdata: &[u8]) -> Result<Name, Error> {
    let (name, consumed) = Name::scan(rdata)?;
    if consumed != rdata.len() {
        return Err(Error::WrongRdataLength);
    }
    Ok(name)
}
