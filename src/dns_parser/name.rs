use std::fmt;
use std::io;
use std::str::FromStr;

use byteorder::WriteBytesExt;

use super::{Error, LabelError};

pub const MAX_LABEL_LEN: usize = 63;
/// Maximum length of an encoded name, terminating root octet included
pub const MAX_NAME_LEN: usize = 255;

/// A domain name made of dot-separated ASCII labels
///
/// The root name is the empty string. Names never carry a trailing dot, so
/// `"example.com."` and `"example.com"` parse to the same value.
/// Construct one with `"example.com".parse::<Name>()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Name(String);

impl Name {
    pub fn root() -> Name {
        Name(String::new())
    }

    /// Scans an uncompressed name at the start of `data`
    ///
    /// Returns the name and the number of octets it occupies in `data`,
    /// including the terminating zero octet.
    pub fn scan(data: &[u8]) -> Result<(Name, usize), Error> {
        let mut name = String::new();
        let mut pos = 0;
        loop {
            let byte = *data.get(pos).ok_or(Error::TruncatedInput)?;
            if byte == 0 {
                return Ok((Name(name), pos + 1));
            } else if byte & 0b1100_0000 == 0b1100_0000 {
                return Err(Error::UnsupportedFeature("compressed names"));
            } else if byte & 0b1100_0000 != 0 {
                return Err(LabelError::ReservedFormat(byte).into());
            }

            let end = pos + 1 + byte as usize;
            if end > data.len() {
                return Err(Error::TruncatedInput);
            }
            if end + 1 > MAX_NAME_LEN {
                return Err(LabelError::NameTooLong(end + 1).into());
            }

            let label = &data[pos + 1..end];
            if !label.is_ascii() {
                return Err(LabelError::NotAscii.into());
            }
            if label.contains(&b'.') {
                return Err(LabelError::ContainsDot.into());
            }
            if !name.is_empty() {
                name.push('.');
            }
            name.extend(label.iter().map(|&b| b as char));
            pos = end;
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|label| !label.is_empty())
    }

    /// Number of octets `write_to` emits
    pub fn encoded_len(&self) -> usize {
        if self.is_root() {
            1
        } else {
            self.0.len() + 2
        }
    }

    pub fn write_to<T: io::Write>(&self, writer: &mut T) -> io::Result<()> {
        for label in self.labels() {
            writer.write_u8(label.len() as u8)?;
            writer.write_all(label.as_bytes())?;
        }
        writer.write_u8(0)
    }

    fn validate(name: &str) -> Result<(), LabelError> {
        if name.is_empty() {
            return Ok(());
        }
        for label in name.split('.') {
            if label.is_empty() {
                return Err(LabelError::Empty);
            }
            if !label.is_ascii() {
                return Err(LabelError::NotAscii);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(LabelError::TooLong(label.len()));
            }
        }
        if name.len() + 2 > MAX_NAME_LEN {
            return Err(LabelError::NameTooLong(name.len() + 2));
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(name: &str) -> Result<Name, Error> {
        let name = if name == "." {
            ""
        } else {
            name.strip_suffix('.').unwrap_or(name)
        };
        Name::validate(name)?;
        Ok(Name(name.to_owned()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.0)
    }
}

/// Encodes a dotted name as length-prefixed labels ending in a zero octet
pub fn encode_name(name: &str) -> Result<Vec<u8>, Error> {
    let name: Name = name.parse()?;
    let mut buf = Vec::with_capacity(name.encoded_len());
    name.write_to(&mut buf)?;
    Ok(buf)
}

/// Decodes a name from the start of `data`, returning it with the octets consumed
pub fn decode_name(data: &[u8]) -> Result<(String, usize), Error> {
    let (name, consumed) = Name::scan(data)?;
    Ok((name.0, consumed))
}
