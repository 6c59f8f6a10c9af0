pub mod udp;

pub use udp::UdpConnection;
