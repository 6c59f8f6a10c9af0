use crate::wire::DNS_PORT_NUMBER;
use crate::RecordType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IP address of the DNS server queries are sent to
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per send/receive deadline in milliseconds; 0 waits indefinitely
    #[serde(default)]
    pub query_timeout_ms: u64,

    /// Record type mnemonics the resolver accepts
    #[serde(default = "default_allowed_record_types")]
    pub allowed_record_types: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            query_timeout_ms: 0,
            allowed_record_types: default_allowed_record_types(),
        }
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    DNS_PORT_NUMBER
}

fn default_allowed_record_types() -> Vec<String> {
    RecordType::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}
