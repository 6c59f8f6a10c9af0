pub mod reporter;
pub mod transport;

pub use reporter::TracingReporter;
pub use transport::UdpConnection;
