use super::Error;

/// The TYPE value according to RFC 1035
///
/// All "EXPERIMENTAL" markers here are from the RFC
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u16)]
pub enum Type {
    /// a host addresss
    A = 1,
    /// an authoritative name server
    NS = 2,
    /// a mail destination (Obsolete - use MX)
    MD = 3,
    /// a mail forwarder (Obsolete - use MX)
    MF = 4,
    /// the canonical name for an alias
    CNAME = 5,
    /// marks the start of a zone of authority
    SOA = 6,
    /// a mailbox domain name (EXPERIMENTAL)
    MB = 7,
    /// a mail group member (EXPERIMENTAL)
    MG = 8,
    /// a mail rename domain name (EXPERIMENTAL)
    MR = 9,
    /// a null RR (EXPERIMENTAL)
    NULL = 10,
    /// a well known service description
    WKS = 11,
    /// a domain name pointer
    PTR = 12,
    /// host information
    HINFO = 13,
    /// mailbox or mail list information
    MINFO = 14,
    /// mail exchange
    MX = 15,
    /// text strings
    TXT = 16,
    /// IPv6 host address (RFC 3596)
    AAAA = 28,
    /// A request for all records (only valid in questions)
    All = 255,
}

/// The CLASS value according to RFC 1035
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u16)]
pub enum Class {
    /// the Internet
    IN = 1,
    /// the CSNET class (Obsolete - used only for examples in some obsolete
    /// RFCs)
    CS = 2,
    /// the CHAOS class
    CH = 3,
    /// Hesiod [Dyer 87]
    HS = 4,
    /// Any class (only valid in questions)
    Any = 255,
}

impl Type {
    pub fn parse(code: u16) -> Result<Type, Error> {
        use self::Type::*;
        match code {
            1 => Ok(A),
            2 => Ok(NS),
            3 => Ok(MD),
            4 => Ok(MF),
            5 => Ok(CNAME),
            6 => Ok(SOA),
            7 => Ok(MB),
            8 => Ok(MG),
            9 => Ok(MR),
            10 => Ok(NULL),
            11 => Ok(WKS),
            12 => Ok(PTR),
            13 => Ok(HINFO),
            14 => Ok(MINFO),
            15 => Ok(MX),
            16 => Ok(TXT),
            28 => Ok(AAAA),
            255 => Ok(All),
            x => Err(Error::UnknownType(x)),
        }
    }
}

impl Class {
    pub fn parse(code: u16) -> Result<Class, Error> {
        use self::Class::*;
        match code {
            1 => Ok(IN),
            2 => Ok(CS),
            3 => Ok(CH),
            4 => Ok(HS),
            255 => Ok(Any),
            x => Err(Error::UnknownClass(x)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(Type::parse(1), Ok(Type::A));
        assert_eq!(Type::parse(28), Ok(Type::AAAA));
        assert_eq!(Type::parse(16).map(|t| t as u16), Ok(16));
        assert_eq!(Class::parse(1), Ok(Class::IN));
        assert_eq!(Class::parse(255), Ok(Class::Any));
    }

    #[test]
    fn unknown_codes_fail() {
        assert_eq!(Type::parse(0), Err(Error::UnknownType(0)));
        assert_eq!(Type::parse(17), Err(Error::UnknownType(17)));
        assert_eq!(Class::parse(0), Err(Error::UnknownClass(0)));
        assert!(Class::parse(254).unwrap_err().is_unknown_code());
    }
}
