//! Domain name encoding: length-prefixed labels and compression pointers.

use super::{DOMAIN_LABEL_LIMIT, DOMAIN_LABEL_SEPARATOR, DOMAIN_NAME_LIMIT, DOMAIN_NAME_PTR_MASK};
use crate::DomainError;

/// Encodes `name` as a sequence of length-prefixed labels ending in a zero octet.
///
/// A single trailing dot is accepted, and both `""` and `"."` encode the root
/// name as a lone zero octet. Compression is never emitted.
pub fn encode_name(name: &str) -> Result<Vec<u8>, DomainError> {
    let relative = name.strip_suffix(DOMAIN_LABEL_SEPARATOR).unwrap_or(name);
    let mut buf = Vec::with_capacity(relative.len() + 2);

    if !relative.is_empty() {
        for label in relative.split(DOMAIN_LABEL_SEPARATOR) {
            if label.is_empty() {
                return Err(DomainError::Encoding(format!(
                    "Empty label in domain name '{}'",
                    name
                )));
            }
            if label.len() > DOMAIN_LABEL_LIMIT {
                return Err(DomainError::Encoding(format!(
                    "Label '{}' is {} octets long, the limit is {}",
                    label,
                    label.len(),
                    DOMAIN_LABEL_LIMIT
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);

    if buf.len() > DOMAIN_NAME_LIMIT {
        return Err(DomainError::Encoding(format!(
            "Domain name '{}' encodes to {} octets, the limit is {}",
            name,
            buf.len(),
            DOMAIN_NAME_LIMIT
        )));
    }

    Ok(buf)
}

/// Decodes the name starting at `offset`, following compression pointers.
///
/// Returns the dotted name (no trailing dot, `""` for the root) and the offset
/// just past the name as it appears at `offset`: past the terminating zero, or
/// past the first two-octet pointer if the name was compressed.
///
/// Every pointer must target an offset strictly before the start of the
/// labels read so far. The read floor therefore decreases on each jump, which
/// bounds the loop without tracking visited offsets.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    let mut name = String::new();
    let mut cursor = offset;
    let mut floor = offset;
    let mut resume_at: Option<usize> = None;
    // Terminating zero octet.
    let mut encoded_len = 1;

    loop {
        let length = *buf.get(cursor).ok_or_else(|| {
            DomainError::Format(format!(
                "Domain name runs past the end of the message at offset {}",
                cursor
            ))
        })?;

        match length & DOMAIN_NAME_PTR_MASK {
            0x00 if length == 0 => {
                let next = resume_at.unwrap_or(cursor + 1);
                return Ok((name, next));
            }
            0x00 => {
                let start = cursor + 1;
                let end = start + length as usize;
                let label = buf.get(start..end).ok_or_else(|| {
                    DomainError::Format(format!(
                        "Label of {} octets at offset {} is truncated",
                        length, cursor
                    ))
                })?;

                encoded_len += label.len() + 1;
                if encoded_len > DOMAIN_NAME_LIMIT {
                    return Err(DomainError::Format(format!(
                        "Domain name at offset {} exceeds {} octets",
                        offset, DOMAIN_NAME_LIMIT
                    )));
                }

                if !name.is_empty() {
                    name.push(DOMAIN_LABEL_SEPARATOR);
                }
                name.push_str(&String::from_utf8_lossy(label));
                cursor = end;
            }
            DOMAIN_NAME_PTR_MASK => {
                let low = *buf.get(cursor + 1).ok_or_else(|| {
                    DomainError::Format(format!(
                        "Compression pointer at offset {} is truncated",
                        cursor
                    ))
                })?;
                let target = (((length & !DOMAIN_NAME_PTR_MASK) as usize) << 8) | low as usize;

                if target >= floor {
                    return Err(DomainError::Format(format!(
                        "Compression pointer at offset {} targets offset {}, which is not strictly before {}",
                        cursor, target, floor
                    )));
                }

                if resume_at.is_none() {
                    resume_at = Some(cursor + 2);
                }
                floor = target;
                cursor = target;
            }
            _ => {
                return Err(DomainError::Format(format!(
                    "Unsupported label type {:#04x} at offset {}",
                    length, cursor
                )));
            }
        }
    }
}
