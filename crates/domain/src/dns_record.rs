pub mod class;
pub mod record_type;

pub use class::DnsClass;
pub use record_type::RecordType;
