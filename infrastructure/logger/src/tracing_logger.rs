use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`, emitting under the `pantry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pantry", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pantry", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pantry", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pantry", "{}", message);
    }
}
