use codemap::SpanLoc;
use std::fmt::Debug;

/// Sink for log messages
pub trait Logger: Debug {
    /// Logs a trace of a selector conversion
    ///
    /// `location` is the source of the selector being converted, if it was
    /// parsed through the active [`crate::Context`]
    fn debug(&self, location: Option<&SpanLoc>, message: &str);

    /// Logs an internal error that is about to abort the current pass
    fn warning(&self, location: Option<&SpanLoc>, message: &str);
}

/// Logs events to standard error
#[derive(Debug)]
pub struct StdLogger;

impl Logger for StdLogger {
    #[inline]
    fn debug(&self, location: Option<&SpanLoc>, message: &str) {
        match location {
            Some(location) => eprintln!(
                "{}:{} DEBUG: {}",
                location.file.name(),
                location.begin.line + 1,
                message
            ),
            None => eprintln!("DEBUG: {}", message),
        }
    }

    #[inline]
    fn warning(&self, location: Option<&SpanLoc>, message: &str) {
        eprintln!("Warning: {}", message);
        if let Some(location) = location {
            eprintln!(
                "    ./{}:{}:{}",
                location.file.name(),
                location.begin.line + 1,
                location.begin.column + 1
            );
        }
    }
}

/// Discards all log events
#[derive(Debug)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn debug(&self, _location: Option<&SpanLoc>, _message: &str) {}

    #[inline]
    fn warning(&self, _location: Option<&SpanLoc>, _message: &str) {}
}
