//! DNS wire format: uncompressed names, the fixed header and its flag word,
//! questions, resource records and whole messages.

mod builder;
mod enums;
mod error;
mod flags;
mod header;
mod name;
mod parser;
mod rrdata;
mod structs;

pub use self::builder::MAX_MESSAGE_SIZE;
pub use self::enums::{Class, Type};
pub use self::error::{Error, LabelError};
pub use self::flags::{Flags, Opcode, ResponseCode};
pub use self::header::{Header, HEADER_SIZE};
pub use self::name::{decode_name, encode_name, Name, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use self::rrdata::RRData;
pub use self::structs::{Message, Question, ResourceRecord};
