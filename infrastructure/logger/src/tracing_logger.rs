use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single `itemiser` target,
/// so `RUST_LOG=itemiser=debug` isolates pipeline output from HTTP noise.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "itemiser", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "itemiser", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "itemiser", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "itemiser", "{}", message);
    }
}
