use async_trait::async_trait;
use nslite_domain::DomainError;

/// An already-established datagram exchange with one DNS server.
///
/// Connection setup lives outside the resolver; the resolver only ever sends
/// one packed query and reads one reply per call.
#[async_trait]
pub trait DnsConnection: Send + Sync {
    /// Writes the whole buffer in a single datagram. Returns bytes written.
    async fn send(&self, message_bytes: &[u8]) -> Result<usize, DomainError>;

    /// Reads one datagram into `buf`. Returns bytes read.
    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DomainError>;

    /// Peer description used in log lines.
    fn peer(&self) -> String;

    async fn close(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
