use crate::ports::{DnsConnection, QueryReporter};
use nslite_domain::{
    DomainError, Message, MessageType, RecordType, RecordTypes, UDP_MESSAGE_SIZE_LIMIT,
};
use std::sync::Arc;
use tracing::debug;

/// Stub resolver: one query, one reply, over a connection it owns.
///
/// Holds no state between calls besides its collaborators. Every failure
/// aborts the query in progress and is returned to the caller; nothing is
/// retried.
pub struct Resolver {
    connection: Box<dyn DnsConnection>,
    allowed: RecordTypes,
    reporter: Arc<dyn QueryReporter>,
}

impl Resolver {
    pub fn new(
        connection: Box<dyn DnsConnection>,
        allowed: RecordTypes,
        reporter: Arc<dyn QueryReporter>,
    ) -> Self {
        Self {
            connection,
            allowed,
            reporter,
        }
    }

    pub fn allowed_record_types(&self) -> &RecordTypes {
        &self.allowed
    }

    /// Fetches the `record_type` records for `name` and returns the parsed reply.
    ///
    /// Types outside the allow-list are rejected before any I/O happens.
    pub async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        if !self.allowed.contains(record_type) {
            return Err(DomainError::UnsupportedRecordType(
                record_type.to_string(),
            ));
        }

        self.reporter.attempt(name, record_type);

        let mut request = Message::new(MessageType::Request).with_id(fastrand::u16(..));
        request.add_question(name, record_type)?;
        let request_bytes = request.pack()?;
        self.reporter.request_packed(&request_bytes);

        self.send(&request_bytes).await?;
        let response_bytes = self.receive().await?;
        let response = Message::unpack(&response_bytes)?;

        if response.id() != request.id() {
            return Err(DomainError::ResponseIdMismatch {
                expected: request.id(),
                received: response.id(),
            });
        }

        self.reporter.response(&response);
        Ok(response)
    }

    /// Like [`Resolver::resolve`], with the type given by its mnemonic.
    pub async fn resolve_by_name(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<Message, DomainError> {
        let record_type = self.get_record_type(record_type)?;
        self.resolve(name, record_type).await
    }

    /// Writes `request` to the connection in one datagram.
    pub async fn send(&self, request: &[u8]) -> Result<(), DomainError> {
        if request.len() > UDP_MESSAGE_SIZE_LIMIT {
            return Err(DomainError::MessageTooLarge {
                size: request.len(),
                limit: UDP_MESSAGE_SIZE_LIMIT,
            });
        }

        let written = self.connection.send(request).await?;
        debug!(
            server = %self.connection.peer(),
            bytes_sent = written,
            "DNS request sent"
        );
        Ok(())
    }

    /// Reads one reply of at most 512 bytes.
    pub async fn receive(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = vec![0u8; UDP_MESSAGE_SIZE_LIMIT];
        let read = self.connection.recv(&mut buf).await?;
        buf.truncate(read);

        debug!(
            server = %self.connection.peer(),
            bytes_received = read,
            "DNS response received"
        );
        Ok(buf)
    }

    pub fn is_allowed(&self, record_type: &str) -> bool {
        self.allowed.is_allowed(record_type)
    }

    pub fn get_record_type(&self, record_type: &str) -> Result<RecordType, DomainError> {
        self.allowed.get(record_type)
    }

    /// Ends the resolver's use of its connection.
    pub async fn close(self) -> Result<(), DomainError> {
        self.connection.close().await
    }
}
