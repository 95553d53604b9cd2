/// The kind of query, 4 bits wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    StandardQuery,
    InverseQuery,
    ServerStatus,
    Reserved(u8),
}

/// The status of a response, 4 bits wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormatError,
    ServerFailure,
    NameError,
    NotImplemented,
    Refused,
    Reserved(u8),
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Opcode {
        use self::Opcode::*;
        match code & 0b1111 {
            0 => StandardQuery,
            1 => InverseQuery,
            2 => ServerStatus,
            x => Reserved(x),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> u8 {
        use self::Opcode::*;
        match opcode {
            StandardQuery => 0,
            InverseQuery => 1,
            ServerStatus => 2,
            Reserved(x) => x & 0b1111,
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> ResponseCode {
        use self::ResponseCode::*;
        match code & 0b1111 {
            0 => NoError,
            1 => FormatError,
            2 => ServerFailure,
            3 => NameError,
            4 => NotImplemented,
            5 => Refused,
            x => Reserved(x),
        }
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        use self::ResponseCode::*;
        match code {
            NoError => 0,
            FormatError => 1,
            ServerFailure => 2,
            NameError => 3,
            NotImplemented => 4,
            Refused => 5,
            Reserved(x) => x & 0b1111,
        }
    }
}

/// The 16-bit control word of the header
///
/// ```text
///  15 | 14..11 | 10 |  9 |  8 |  7 | 6..4 | 3..0
///  QR | OPCODE | AA | TC | RD | RA |  Z   | RCODE
/// ```
///
/// Conversion from and to `u16` is total and lossless; multi-bit fields are
/// masked to their width when packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub response: bool,
    pub opcode: Opcode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub response_code: ResponseCode,
}

impl Flags {
    pub fn from_bits(bits: u16) -> Flags {
        Flags {
            response: bits & 0x8000 != 0,
            opcode: Opcode::from(((bits >> 11) & 0b1111) as u8),
            authoritative: bits & 0x0400 != 0,
            truncated: bits & 0x0200 != 0,
            recursion_desired: bits & 0x0100 != 0,
            recursion_available: bits & 0x0080 != 0,
            z: ((bits >> 4) & 0b111) as u8,
            response_code: ResponseCode::from((bits & 0b1111) as u8),
        }
    }

    pub fn to_bits(&self) -> u16 {
        let mut bits = 0;
        if self.response {
            bits |= 0x8000;
        }
        bits |= (u8::from(self.opcode) as u16) << 11;
        if self.authoritative {
            bits |= 0x0400;
        }
        if self.truncated {
            bits |= 0x0200;
        }
        if self.recursion_desired {
            bits |= 0x0100;
        }
        if self.recursion_available {
            bits |= 0x0080;
        }
        bits |= ((self.z & 0b111) as u16) << 4;
        bits | u8::from(self.response_code) as u16
    }
}

impl Default for Flags {
    fn default() -> Flags {
        Flags::from_bits(0)
    }
}

impl From<u16> for Flags {
    fn from(bits: u16) -> Flags {
        Flags::from_bits(bits)
    }
}

impl From<Flags> for u16 {
    fn from(flags: Flags) -> u16 {
        flags.to_bits()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_word_round_trips() {
        for bits in 0..=u16::MAX {
            assert_eq!(Flags::from_bits(bits).to_bits(), bits);
        }
    }

    #[test]
    fn unpack_fields() {
        // standard query, recursion desired
        let flags = Flags::from_bits(0x0100);
        assert!(!flags.response);
        assert_eq!(flags.opcode, Opcode::StandardQuery);
        assert!(flags.recursion_desired);
        assert_eq!(flags.response_code, ResponseCode::NoError);

        let flags = Flags::from_bits(0b1_1111_1_0_0_1_101_0100);
        assert!(flags.response);
        assert_eq!(flags.opcode, Opcode::Reserved(15));
        assert!(flags.authoritative);
        assert!(!flags.truncated);
        assert!(!flags.recursion_desired);
        assert!(flags.recursion_available);
        assert_eq!(flags.z, 0b101);
        assert_eq!(flags.response_code, ResponseCode::NotImplemented);
    }

    #[test]
    fn pack_masks_out_of_range_fields() {
        let flags = Flags {
            opcode: Opcode::Reserved(0xff),
            z: 0xff,
            response_code: ResponseCode::Reserved(0xff),
            ..Flags::default()
        };
        assert_eq!(flags.to_bits(), 0b0_1111_0_0_0_0_111_1111);
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..16u8 {
            assert_eq!(u8::from(Opcode::from(code)), code);
            assert_eq!(u8::from(ResponseCode::from(code)), code);
        }
    }
}
