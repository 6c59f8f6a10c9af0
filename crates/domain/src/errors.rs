use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Malformed DNS message: {0}")]
    Format(String),

    #[error("Message of {size} bytes exceeds the {limit} byte UDP limit")]
    MessageTooLarge { size: usize, limit: usize },

    #[error("Record type {0} is not one of the types accepted by the resolver")]
    UnsupportedRecordType(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Response ID {received:#06x} does not match request ID {expected:#06x}")]
    ResponseIdMismatch { expected: u16, received: u16 },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,
}
