//! Leveled text logging seam for similarity computations.
//!
//! Components take an optional sink; when a caller supplies none they fall
//! back to a console logger, so no process-wide logging state is ever
//! configured as a side effect of being invoked.

/// Destination for leveled diagnostic messages.
pub trait LogSink {
    fn info(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn warn(&self, msg: &str);
}

/// Console logger: info to stdout, warnings to stderr, debug to stderr only
/// in verbose mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger {
    verbose: bool,
}

impl ConsoleLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl LogSink for ConsoleLogger {
    fn info(&self, msg: &str) {
        println!("{}", msg);
    }

    fn debug(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    fn warn(&self, msg: &str) {
        eprintln!("WARNING: {}", msg);
    }
}

/// Logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl LogSink for NullLogger {
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
}
