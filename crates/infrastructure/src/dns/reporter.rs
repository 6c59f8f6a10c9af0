use nslite_application::ports::QueryReporter;
use nslite_domain::{Message, RecordType};
use tracing::{debug, info};

/// Reports resolver progress as `tracing` events.
///
/// The attempt and a one-line summary of the reply go out at `info`; the
/// packed request and the full rendered reply at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl QueryReporter for TracingReporter {
    fn attempt(&self, name: &str, record_type: RecordType) {
        info!(
            domain = %name,
            record_type = %record_type,
            "Attempting to fetch '{}' type record for {}",
            record_type,
            name
        );
    }

    fn request_packed(&self, request: &[u8]) {
        debug!(bytes = request.len(), request = ?request, "DNS request packed");
    }

    fn response(&self, response: &Message) {
        info!(
            id = response.id(),
            rcode = %response.header.flags.rcode,
            answers = response.answers.len(),
            authority = response.authoritative.len(),
            additional = response.additional.len(),
            truncated = response.header.flags.tc,
            "DNS response parsed"
        );
        debug!("\n{}", response);
    }
}
