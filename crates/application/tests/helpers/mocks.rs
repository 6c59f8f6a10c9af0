#![allow(dead_code)]

use async_trait::async_trait;
use nslite_application::ports::{DnsConnection, QueryReporter};
use nslite_domain::{DomainError, Message, RecordType};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub enum MockReply {
    Bytes(Vec<u8>),
    Error(DomainError),
}

#[derive(Default)]
struct ConnectionState {
    sent: Vec<Vec<u8>>,
    replies: VecDeque<MockReply>,
    recv_calls: usize,
    closed: bool,
    keep_reply_id: bool,
    mismatch_reply_id: bool,
}

/// Scripted connection. Clones share state, so a test can hand one clone to
/// the resolver and inspect traffic through another.
///
/// By default each reply gets the ID of the last request patched in, so
/// canned responses match whatever random ID the resolver picked.
#[derive(Clone, Default)]
pub struct MockDnsConnection {
    state: Arc<Mutex<ConnectionState>>,
}

impl MockDnsConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(&self, bytes: Vec<u8>) {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(MockReply::Bytes(bytes));
    }

    pub fn fail_with(&self, error: DomainError) {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(MockReply::Error(error));
    }

    /// Deliver replies with their own ID instead of echoing the request's.
    pub fn keep_reply_id(&self) {
        self.state.lock().unwrap().keep_reply_id = true;
    }

    /// Deliver replies whose ID differs from the last request's in every bit.
    pub fn mismatch_reply_id(&self) {
        self.state.lock().unwrap().mismatch_reply_id = true;
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn recv_calls(&self) -> usize {
        self.state.lock().unwrap().recv_calls
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}

#[async_trait]
impl DnsConnection for MockDnsConnection {
    async fn send(&self, message_bytes: &[u8]) -> Result<usize, DomainError> {
        self.state
            .lock()
            .unwrap()
            .sent
            .push(message_bytes.to_vec());
        Ok(message_bytes.len())
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DomainError> {
        let mut state = self.state.lock().unwrap();
        state.recv_calls += 1;

        let mut bytes = match state.replies.pop_front() {
            Some(MockReply::Bytes(bytes)) => bytes,
            Some(MockReply::Error(e)) => return Err(e),
            None => return Err(DomainError::IoError("no reply scripted".to_string())),
        };

        if !state.keep_reply_id && bytes.len() >= 2 {
            if let Some(request) = state.sent.last() {
                let mut id = u16::from_be_bytes([request[0], request[1]]);
                if state.mismatch_reply_id {
                    id ^= 0xFFFF;
                }
                bytes[..2].copy_from_slice(&id.to_be_bytes());
            }
        }

        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        Ok(len)
    }

    fn peer(&self) -> String {
        "mock".to_string()
    }

    async fn close(&self) -> Result<(), DomainError> {
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    attempts: Mutex<Vec<(String, RecordType)>>,
    requests: Mutex<Vec<Vec<u8>>>,
    responses: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(&self) -> Vec<(String, RecordType)> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.requests.lock().unwrap().clone()
    }

    pub fn responses(&self) -> Vec<String> {
        self.responses.lock().unwrap().clone()
    }
}

impl QueryReporter for RecordingReporter {
    fn attempt(&self, name: &str, record_type: RecordType) {
        self.attempts
            .lock()
            .unwrap()
            .push((name.to_string(), record_type));
    }

    fn request_packed(&self, request: &[u8]) {
        self.requests.lock().unwrap().push(request.to_vec());
    }

    fn response(&self, response: &Message) {
        self.responses.lock().unwrap().push(response.to_string());
    }
}

/// `name` IN A response carrying one answer per address, owners compressed.
pub fn a_response(name: &str, addresses: &[[u8; 4]]) -> Vec<u8> {
    let mut buf = vec![0x00, 0x00, 0x81, 0x80, 0x00, 0x01];
    buf.extend_from_slice(&(addresses.len() as u16).to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    for label in name.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x00, 0x01]);

    for octets in addresses {
        buf.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);
        buf.extend_from_slice(&300u32.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x04]);
        buf.extend_from_slice(octets);
    }
    buf
}
