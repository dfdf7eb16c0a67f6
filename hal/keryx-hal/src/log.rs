//! Diagnostic text sink
//!
//! The transport can mirror every packet it queues or delivers to a
//! debug sink. This is pure observability: nothing in the protocol
//! depends on it.

/// Destination for diagnostic lines
pub trait DebugSink {
    /// Write one line of diagnostic text
    fn write_line(&mut self, line: &str);
}

/// Sink that discards everything
///
/// The default when no diagnostics are wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn write_line(&mut self, _line: &str) {}
}
