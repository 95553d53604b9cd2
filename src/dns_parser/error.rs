use std::io;

use thiserror::Error;

/// Error parsing or serializing a DNS packet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("packet is truncated")]
    TruncatedInput,
    #[error("type {0} is unknown")]
    UnknownType(u16),
    #[error("class {0} is unknown")]
    UnknownClass(u16),
    #[error("invalid label: {0}")]
    InvalidLabel(#[from] LabelError),
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(&'static str),
    #[error("wrong (too short or too long) size of RDATA")]
    WrongRdataLength,
    #[error("{0:?} is not a dotted-quad address")]
    InvalidAddress(String),
    #[error("section has {0} entries, at most 65535 fit in the header")]
    SectionTooLarge(usize),
    #[error("i/o error while writing packet: {0:?}")]
    Io(io::ErrorKind),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err.kind())
    }
}

impl Error {
    /// Whether the error is caused by a type or class code outside the known set
    pub fn is_unknown_code(&self) -> bool {
        matches!(*self, Error::UnknownType(_) | Error::UnknownClass(_))
    }
}

/// Reason a domain name label was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("label is {0} octets long, at most 63 are allowed")]
    TooLong(usize),
    #[error("name contains an empty label")]
    Empty,
    #[error("label contains non-ascii characters")]
    NotAscii,
    #[error("label contains a dot")]
    ContainsDot,
    #[error("name is {0} octets long, at most 255 are allowed")]
    NameTooLong(usize),
    #[error("label length octet {0:#04x} has an unknown format")]
    ReservedFormat(u8),
}
