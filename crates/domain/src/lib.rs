//! nslite domain layer: DNS wire codec, record types and configuration
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod record_types;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_record::{DnsClass, RecordType};
pub use errors::DomainError;
pub use record_types::RecordTypes;
pub use wire::{
    Flags, Header, Message, MessageType, Opcode, Question, RecordData, Resource, ResponseCode,
    UDP_MESSAGE_SIZE_LIMIT,
};
