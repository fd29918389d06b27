use std::io;
use std::io::Write;

#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;
use tracing::debug;

use crate::constants::REPORT_PREFIX;

/// Emits one line per matched target identifier.
///
/// Implementations must not fail for any finite non-negative elapsed value;
/// a reporter that cannot deliver its line drops it.
#[cfg_attr(test, automock)]
pub trait Reporter: Send + Sync {
    fn report(&self, identifier: &str, elapsed_secs: f64);
}

/// Renders the report line for an identifier.
///
/// Elapsed time is rendered to four decimal places. An empty identifier
/// (the pipeline's default query) gets the untagged variant.
pub fn format_report_line(identifier: &str, elapsed_secs: f64) -> String {
    if identifier.is_empty() {
        format!("{}: {:.4} seconds", REPORT_PREFIX, elapsed_secs)
    } else {
        format!("{} for {}: {:.4} seconds", REPORT_PREFIX, identifier, elapsed_secs)
    }
}

/// Writes report lines to a byte sink, stdout unless overridden.
pub struct ConsoleReporter {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn stdout() -> Self {
        Self::with_sink(Box::new(io::stdout()))
    }

    /// Routes report lines into an arbitrary sink, e.g. a capture buffer or
    /// a log file handle.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, identifier: &str, elapsed_secs: f64) {
        let line = format_report_line(identifier, elapsed_secs);
        debug!("{}", line);

        // Sink failures must not disturb the pipeline being observed
        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{}", line);
        let _ = sink.flush();
    }
}
