#![allow(dead_code)]

/// Offset of the question name in every message built here.
pub const QUESTION_NAME_OFFSET: u8 = 12;

pub fn label_name(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    buf
}

pub fn pointer(offset: u16) -> Vec<u8> {
    vec![0xC0 | (offset >> 8) as u8, offset as u8]
}

pub fn record(owner: &[u8], type_code: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut buf = owner.to_vec();
    buf.extend_from_slice(&type_code.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    buf.extend_from_slice(rdata);
    buf
}

/// Raw response buffers, built byte by byte independently of the codec.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Option<(String, u16)>,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x8180,
            question: None,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, type_code: u16) -> Self {
        self.question = Some((name.to_string(), type_code));
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additional.push(record);
        self
    }

    /// A record for the question name, owner compressed to offset 12.
    pub fn a_answer(self, octets: [u8; 4], ttl: u32) -> Self {
        let rec = record(&pointer(QUESTION_NAME_OFFSET as u16), 1, ttl, &octets);
        self.answer(rec)
    }

    pub fn build(&self) -> Vec<u8> {
        let qd_count: u16 = if self.question.is_some() { 1 } else { 0 };
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&qd_count.to_be_bytes());
        buf.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.authority.len() as u16).to_be_bytes());
        buf.extend_from_slice(&(self.additional.len() as u16).to_be_bytes());

        if let Some((name, type_code)) = &self.question {
            buf.extend_from_slice(&label_name(name));
            buf.extend_from_slice(&type_code.to_be_bytes());
            buf.extend_from_slice(&1u16.to_be_bytes());
        }

        for rec in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            buf.extend_from_slice(rec);
        }
        buf
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
