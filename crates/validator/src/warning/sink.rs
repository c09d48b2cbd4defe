//! Destinations for emitted warnings

use parking_lot::Mutex;

/// Receives fully formatted warning lines (`Warning: ...`).
///
/// Sinks must not fail and must not panic; emission is advisory.
pub trait WarningSink: Send + Sync {
    fn emit(&self, message: &str);
}

impl<F> WarningSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn emit(&self, message: &str) {
        self(message);
    }
}

/// Logs through `tracing` at WARN level, target `prop_types`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&self, message: &str) {
        tracing::warn!(target: "prop_types", "{message}");
    }
}

/// Writes each warning to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl WarningSink for StderrSink {
    fn emit(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Keeps every warning in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Drains the recorded warnings.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn emit(&self, message: &str) {
        self.lines.lock().push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit("Warning: first");
        sink.emit("Warning: second");
        assert_eq!(sink.messages(), ["Warning: first", "Warning: second"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let sink = move |_: &str| {
            seen.fetch_add(1, Ordering::SeqCst);
        };
        sink.emit("Warning: counted");
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
