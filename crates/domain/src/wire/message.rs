use super::header::{Header, MessageType};
use super::question::Question;
use super::resource::Resource;
use crate::{DomainError, RecordType};
use std::fmt;

/// A complete DNS message: header plus the four sections.
///
/// On the encode side, `add_question` is the only way to grow a section, so
/// the header counts always match the packed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Resource>,
    pub authoritative: Vec<Resource>,
    pub additional: Vec<Resource>,
}

impl Message {
    pub fn new(message_type: MessageType) -> Self {
        Self {
            header: Header::new(message_type),
            questions: Vec::new(),
            answers: Vec::new(),
            authoritative: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.header.id = id;
        self
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn add_question(&mut self, name: &str, record_type: RecordType) -> Result<(), DomainError> {
        let question = Question::new(name, record_type)?;
        self.questions.push(question);
        self.header.qd_count += 1;
        Ok(())
    }

    /// Header followed by the question section. Resource sections are never
    /// packed: outbound messages are always plain queries.
    pub fn pack(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(super::UDP_MESSAGE_SIZE_LIMIT);
        buf.extend_from_slice(&self.header.pack());
        if self.header.qd_count > 0 {
            for question in &self.questions {
                buf.extend_from_slice(&question.pack()?);
            }
        }
        Ok(buf)
    }

    /// Parses a whole message. Each section is read exactly as many times as
    /// its own header count says, with one cursor moving forward.
    pub fn unpack(buf: &[u8]) -> Result<Self, DomainError> {
        let (header, mut offset) = Header::unpack(buf, 0)?;

        let mut questions = Vec::with_capacity(capacity_for(
            header.qd_count,
            buf.len() - offset,
            MIN_QUESTION_LENGTH,
        ));
        for _ in 0..header.qd_count {
            let (question, next) = Question::unpack(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        let answers = unpack_resources(buf, &mut offset, header.an_count)?;
        let authoritative = unpack_resources(buf, &mut offset, header.ns_count)?;
        let additional = unpack_resources(buf, &mut offset, header.ar_count)?;

        Ok(Self {
            header,
            questions,
            answers,
            authoritative,
            additional,
        })
    }
}

/// Root name plus type and class.
const MIN_QUESTION_LENGTH: usize = 5;
/// Root name plus type, class, TTL and RDLENGTH.
const MIN_RESOURCE_LENGTH: usize = 11;

/// Header counts are untrusted; never reserve more entries than `remaining`
/// bytes could hold.
fn capacity_for(count: u16, remaining: usize, min_len: usize) -> usize {
    (count as usize).min(remaining / min_len)
}

fn unpack_resources(
    buf: &[u8],
    offset: &mut usize,
    count: u16,
) -> Result<Vec<Resource>, DomainError> {
    let remaining = buf.len().saturating_sub(*offset);
    let mut records = Vec::with_capacity(capacity_for(count, remaining, MIN_RESOURCE_LENGTH));
    for _ in 0..count {
        let (record, next) = Resource::unpack(buf, *offset)?;
        records.push(record);
        *offset = next;
    }
    Ok(records)
}

fn write_section<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    count: u16,
    records: &[T],
) -> fmt::Result {
    if count == 0 {
        return Ok(());
    }
    writeln!(f, "{}", title)?;
    for record in records {
        writeln!(f, "{}", record)?;
    }
    writeln!(f)
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;
        write_section(f, "QUESTION SECTION:", self.header.qd_count, &self.questions)?;
        write_section(f, "ANSWER SECTION:", self.header.an_count, &self.answers)?;
        write_section(f, "AUTHORITY SECTION:", self.header.ns_count, &self.authoritative)?;
        write_section(f, "ADDITIONAL SECTION:", self.header.ar_count, &self.additional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_bounded_by_remaining_bytes() {
        assert_eq!(capacity_for(u16::MAX, 0, MIN_RESOURCE_LENGTH), 0);
        assert_eq!(capacity_for(u16::MAX, 500, MIN_RESOURCE_LENGTH), 45);
        assert_eq!(capacity_for(2, 500, MIN_QUESTION_LENGTH), 2);
    }
}
