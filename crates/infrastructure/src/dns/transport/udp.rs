//! UDP connection to a single DNS server (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is, no framing. The socket is connected, so the
//! kernel drops datagrams from any other source.

use async_trait::async_trait;
use nslite_application::ports::DnsConnection;
use nslite_domain::DomainError;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Connected UDP socket to one DNS server.
pub struct UdpConnection {
    socket: UdpSocket,
    server_addr: SocketAddr,
    timeout: Option<Duration>,
}

impl UdpConnection {
    /// Binds an ephemeral port of the server's address family and connects it.
    ///
    /// With `timeout` set, each send and receive fails with
    /// [`DomainError::QueryTimeout`] once the deadline passes; without it they
    /// wait indefinitely.
    pub async fn connect(
        server_addr: SocketAddr,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let bind_addr: SocketAddr = if server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        socket.connect(server_addr).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to connect UDP socket to {}: {}",
                server_addr, e
            ))
        })?;

        debug!(server = %server_addr, timeout = ?timeout, "UDP connection ready");

        Ok(Self {
            socket,
            server_addr,
            timeout,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    async fn with_deadline<T>(
        &self,
        operation: impl Future<Output = std::io::Result<T>>,
        what: &str,
    ) -> Result<T, DomainError> {
        let result = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, operation)
                .await
                .map_err(|_| DomainError::QueryTimeout)?,
            None => operation.await,
        };

        result.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to {} {}: {}",
                what, self.server_addr, e
            ))
        })
    }
}

#[async_trait]
impl DnsConnection for UdpConnection {
    async fn send(&self, message_bytes: &[u8]) -> Result<usize, DomainError> {
        self.with_deadline(self.socket.send(message_bytes), "send UDP query to")
            .await
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DomainError> {
        self.with_deadline(self.socket.recv(buf), "receive UDP response from")
            .await
    }

    fn peer(&self) -> String {
        self.server_addr.to_string()
    }

    async fn close(&self) -> Result<(), DomainError> {
        debug!(server = %self.server_addr, "UDP connection closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_ipv4_binds_ipv4() {
        let addr: SocketAddr = "127.0.0.1:53".parse().unwrap();
        let connection = UdpConnection::connect(addr, None).await.unwrap();
        assert_eq!(connection.server_addr(), addr);
        assert!(connection.local_addr().unwrap().is_ipv4());
        assert_eq!(connection.peer(), "127.0.0.1:53");
    }
}
