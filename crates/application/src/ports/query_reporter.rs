use nslite_domain::{Message, RecordType};

/// Sink for the resolver's progress and results.
///
/// Injected at construction so the codec and use case stay free of global
/// logging state.
pub trait QueryReporter: Send + Sync {
    fn attempt(&self, name: &str, record_type: RecordType);

    fn request_packed(&self, request: &[u8]);

    fn response(&self, response: &Message);
}
