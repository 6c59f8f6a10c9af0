mod dns_connection;
mod query_reporter;

pub use dns_connection::DnsConnection;
pub use query_reporter::QueryReporter;
