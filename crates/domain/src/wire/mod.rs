//! DNS wire format codec (RFC 1035 §4)
//!
//! Everything here is pure: byte buffers in, structured values out, and the
//! reverse. No sockets, no logging.

pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod resource;

pub use header::{Flags, Header, MessageType, Opcode, ResponseCode};
pub use message::Message;
pub use name::{decode_name, encode_name};
pub use question::Question;
pub use resource::{RecordData, Resource};

pub const DNS_PORT_NUMBER: u16 = 53;
pub const DOMAIN_LABEL_LIMIT: usize = 63;
pub const DOMAIN_NAME_LIMIT: usize = 255;
pub const DOMAIN_LABEL_SEPARATOR: char = '.';
pub const UDP_MESSAGE_SIZE_LIMIT: usize = 512;
pub const MESSAGE_HEADER_LENGTH: usize = 12;

/// Top two bits of a length octet that mark a compression pointer.
pub const DOMAIN_NAME_PTR_MASK: u8 = 0xC0;

pub(crate) fn read_u16(buf: &[u8], offset: usize, what: &str) -> Result<u16, crate::DomainError> {
    buf.get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| {
            crate::DomainError::Format(format!(
                "Truncated {} at offset {} (message is {} bytes)",
                what,
                offset,
                buf.len()
            ))
        })
}

pub(crate) fn read_u32(buf: &[u8], offset: usize, what: &str) -> Result<u32, crate::DomainError> {
    buf.get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| {
            crate::DomainError::Format(format!(
                "Truncated {} at offset {} (message is {} bytes)",
                what,
                offset,
                buf.len()
            ))
        })
}
