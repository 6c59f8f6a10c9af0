use super::name::{decode_name, encode_name};
use super::{read_u16, DOMAIN_LABEL_SEPARATOR};
use crate::{DnsClass, DomainError, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    /// Raw type code; a reply may echo a question for a type nslite never asks.
    pub type_code: u16,
    pub class: DnsClass,
}

impl Question {
    /// Builds an IN-class question. Fails if `name` cannot be encoded.
    ///
    /// The name is stored without its trailing dot, the same form decoding yields.
    pub fn new(name: &str, record_type: RecordType) -> Result<Self, DomainError> {
        encode_name(name)?;
        let name = name.strip_suffix(DOMAIN_LABEL_SEPARATOR).unwrap_or(name);
        Ok(Self {
            name: name.to_string(),
            type_code: record_type.to_u16(),
            class: DnsClass::IN,
        })
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.type_code)
    }

    pub fn pack(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = encode_name(&self.name)?;
        buf.extend_from_slice(&self.type_code.to_be_bytes());
        buf.extend_from_slice(&self.class.to_u16().to_be_bytes());
        Ok(buf)
    }

    /// Reads a question at `offset`. Returns it with the offset of the next record.
    pub fn unpack(buf: &[u8], offset: usize) -> Result<(Self, usize), DomainError> {
        let (name, offset) = decode_name(buf, offset)?;

        let type_code = read_u16(buf, offset, "question type")?;
        let class = DnsClass::from(read_u16(buf, offset + 2, "question class")?);

        Ok((
            Self {
                name,
                type_code,
                class,
            },
            offset + 4,
        ))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}",
            self.name,
            self.class,
            RecordType::mnemonic(self.type_code)
        )
    }
}
