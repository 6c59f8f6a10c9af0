use super::{read_u16, MESSAGE_HEADER_LENGTH};
use crate::DomainError;
use std::fmt;

/// Whether a message is a query or a reply. Drives the QR bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Request,
    Response,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Query,
    IQuery,
    Status,
    Other(u8),
}

impl Opcode {
    pub fn to_u8(&self) -> u8 {
        match self {
            Opcode::Query => 0,
            Opcode::IQuery => 1,
            Opcode::Status => 2,
            Opcode::Other(code) => *code & 0x0F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Query => "QUERY",
            Opcode::IQuery => "IQUERY",
            Opcode::Status => "STATUS",
            Opcode::Other(_) => "RESERVED",
        }
    }
}

impl From<u8> for Opcode {
    fn from(code: u8) -> Self {
        match code & 0x0F {
            0 => Opcode::Query,
            1 => Opcode::IQuery,
            2 => Opcode::Status,
            other => Opcode::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    YxDomain,
    XrrSet,
    NotAuth,
    NotZone,
    Other(u8),
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::YxDomain => 6,
            ResponseCode::XrrSet => 7,
            ResponseCode::NotAuth => 8,
            ResponseCode::NotZone => 9,
            ResponseCode::Other(code) => *code & 0x0F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::YxDomain => "YXDOMAIN",
            ResponseCode::XrrSet => "XRRSET",
            ResponseCode::NotAuth => "NOTAUTH",
            ResponseCode::NotZone => "NOTZONE",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            6 => ResponseCode::YxDomain,
            7 => ResponseCode::XrrSet,
            8 => ResponseCode::NotAuth,
            9 => ResponseCode::NotZone,
            other => ResponseCode::Other(other),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

/// Header flags word.
///
/// Bit layout, most significant first:
/// QR(1) Opcode(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub qr: bool,
    pub opcode: Opcode,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    /// Reserved, three bits. Carried through untouched.
    pub z: u8,
    pub rcode: ResponseCode,
}

const FLAG_QR: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const FLAG_AA: u16 = 1 << 10;
const FLAG_TC: u16 = 1 << 9;
const FLAG_RD: u16 = 1 << 8;
const FLAG_RA: u16 = 1 << 7;
const Z_SHIFT: u16 = 4;

impl Flags {
    pub fn to_u16(&self) -> u16 {
        let mut word = 0u16;
        if self.qr {
            word |= FLAG_QR;
        }
        word |= (self.opcode.to_u8() as u16) << OPCODE_SHIFT;
        if self.aa {
            word |= FLAG_AA;
        }
        if self.tc {
            word |= FLAG_TC;
        }
        if self.rd {
            word |= FLAG_RD;
        }
        if self.ra {
            word |= FLAG_RA;
        }
        word |= ((self.z & 0x07) as u16) << Z_SHIFT;
        word | self.rcode.to_u8() as u16
    }

    pub fn from_u16(word: u16) -> Self {
        Self {
            qr: word & FLAG_QR != 0,
            opcode: Opcode::from(((word >> OPCODE_SHIFT) & 0x0F) as u8),
            aa: word & FLAG_AA != 0,
            tc: word & FLAG_TC != 0,
            rd: word & FLAG_RD != 0,
            ra: word & FLAG_RA != 0,
            z: ((word >> Z_SHIFT) & 0x07) as u8,
            rcode: ResponseCode::from((word & 0x0F) as u8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    /// Standard query header: recursion desired, all counts zero, ID zero.
    pub fn new(message_type: MessageType) -> Self {
        Self {
            id: 0,
            flags: Flags {
                qr: message_type == MessageType::Response,
                opcode: Opcode::Query,
                aa: false,
                tc: false,
                rd: true,
                ra: false,
                z: 0,
                rcode: ResponseCode::NoError,
            },
            qd_count: 0,
            an_count: 0,
            ns_count: 0,
            ar_count: 0,
        }
    }

    pub fn message_type(&self) -> MessageType {
        if self.flags.qr {
            MessageType::Response
        } else {
            MessageType::Request
        }
    }

    pub fn pack(&self) -> [u8; MESSAGE_HEADER_LENGTH] {
        let mut buf = [0u8; MESSAGE_HEADER_LENGTH];
        let fields = [
            self.id,
            self.flags.to_u16(),
            self.qd_count,
            self.an_count,
            self.ns_count,
            self.ar_count,
        ];
        for (chunk, field) in buf.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        buf
    }

    /// Reads the 12-byte header at `offset`. Returns the header and the offset after it.
    pub fn unpack(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        if buf.len() < offset + MESSAGE_HEADER_LENGTH {
            return Err(DomainError::Format(format!(
                "Header needs {} bytes, only {} available",
                MESSAGE_HEADER_LENGTH,
                buf.len().saturating_sub(offset)
            )));
        }

        let header = Self {
            id: read_u16(buf, offset, "header ID")?,
            flags: Flags::from_u16(read_u16(buf, offset + 2, "header flags")?),
            qd_count: read_u16(buf, offset + 4, "QDCOUNT")?,
            an_count: read_u16(buf, offset + 6, "ANCOUNT")?,
            ns_count: read_u16(buf, offset + 8, "NSCOUNT")?,
            ar_count: read_u16(buf, offset + 10, "ARCOUNT")?,
        };

        Ok((header, offset + MESSAGE_HEADER_LENGTH))
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            ";; opcode: {}, status: {}, id: {}",
            self.flags.opcode.as_str(),
            self.flags.rcode,
            self.id
        )?;

        let mut names = Vec::with_capacity(5);
        let set = [
            (self.flags.qr, "qr"),
            (self.flags.aa, "aa"),
            (self.flags.tc, "tc"),
            (self.flags.rd, "rd"),
            (self.flags.ra, "ra"),
        ];
        for (on, name) in set {
            if on {
                names.push(name);
            }
        }

        write!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            names.join(" "),
            self.qd_count,
            self.an_count,
            self.ns_count,
            self.ar_count
        )
    }
}
