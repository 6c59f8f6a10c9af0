use super::name::decode_name;
use super::{read_u16, read_u32};
use crate::{DnsClass, DomainError, RecordType};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Typed view of a record's RDATA.
///
/// Anything the resolver does not interpret, or RDATA that does not match
/// the shape its type implies, is kept as `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    TXT(Vec<Vec<u8>>),
    Opaque(Vec<u8>),
}

impl RecordData {
    /// Interprets `rdlength` bytes at `offset` of `message` as RDATA of `type_code`.
    ///
    /// Names inside RDATA may be compressed, so the whole message is needed.
    pub fn parse(type_code: u16, message: &[u8], offset: usize, rdlength: usize) -> Self {
        let end = offset + rdlength;
        let Some(rdata) = message.get(offset..end) else {
            return RecordData::Opaque(Vec::new());
        };

        let parsed = match RecordType::from_u16(type_code) {
            Some(RecordType::A) => <[u8; 4]>::try_from(rdata)
                .ok()
                .map(|octets| RecordData::A(Ipv4Addr::from(octets))),
            Some(RecordType::AAAA) => <[u8; 16]>::try_from(rdata)
                .ok()
                .map(|octets| RecordData::AAAA(Ipv6Addr::from(octets))),
            Some(RecordType::NS) => Self::parse_name(message, offset, end).map(RecordData::NS),
            Some(RecordType::CNAME) => {
                Self::parse_name(message, offset, end).map(RecordData::CNAME)
            }
            Some(RecordType::TXT) => Self::parse_txt(rdata).map(RecordData::TXT),
            None => None,
        };

        parsed.unwrap_or_else(|| RecordData::Opaque(rdata.to_vec()))
    }

    fn parse_name(message: &[u8], offset: usize, end: usize) -> Option<String> {
        match decode_name(message, offset) {
            Ok((name, next)) if next == end => Some(name),
            _ => None,
        }
    }

    fn parse_txt(rdata: &[u8]) -> Option<Vec<Vec<u8>>> {
        let mut strings = Vec::new();
        let mut pos = 0;
        while pos < rdata.len() {
            let len = rdata[pos] as usize;
            let chunk = rdata.get(pos + 1..pos + 1 + len)?;
            strings.push(chunk.to_vec());
            pos += 1 + len;
        }
        Some(strings)
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::AAAA(addr) => write!(f, "{}", addr),
            RecordData::NS(name) | RecordData::CNAME(name) => write!(f, "{}.", name),
            RecordData::TXT(strings) => {
                let quoted: Vec<String> = strings
                    .iter()
                    .map(|s| format!("{:?}", String::from_utf8_lossy(s)))
                    .collect();
                write!(f, "{}", quoted.join(" "))
            }
            RecordData::Opaque(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for byte in bytes {
                        write!(f, "{:02x}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// A resource record from the answer, authority or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: String,
    /// Raw type code; records of types the resolver cannot ask for still parse.
    pub type_code: u16,
    pub class: DnsClass,
    pub ttl: u32,
    pub rdata: Vec<u8>,
    pub data: RecordData,
}

impl Resource {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.type_code)
    }

    /// Reads a resource record at `offset`. Returns it with the offset of the next record.
    pub fn unpack(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, offset) = decode_name(buf, offset)?;

        let type_code = read_u16(buf, offset, "record type")?;
        let class = DnsClass::from(read_u16(buf, offset + 2, "record class")?);
        let ttl = read_u32(buf, offset + 4, "record TTL")?;
        let rdlength = read_u16(buf, offset + 8, "RDLENGTH")? as usize;

        let rdata_start = offset + 10;
        let rdata_end = rdata_start + rdlength;
        let rdata = buf.get(rdata_start..rdata_end).ok_or_else(|| {
            DomainError::Format(format!(
                "RDATA for '{}' declares {} bytes but only {} remain",
                name,
                rdlength,
                buf.len().saturating_sub(rdata_start)
            ))
        })?;

        let data = RecordData::parse(type_code, buf, rdata_start, rdlength);

        Ok((
            Self {
                name,
                type_code,
                class,
                ttl,
                rdata: rdata.to_vec(),
                data,
            },
            rdata_end,
        ))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t{}",
            self.name,
            self.ttl,
            self.class,
            RecordType::mnemonic(self.type_code),
            self.data
        )
    }
}
