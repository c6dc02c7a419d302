//! # Diagnostic Notifications
//!
//! Order processing reports back to its host through a diagnostic side
//! channel instead of a logger: pricing fallbacks, defensive corrections,
//! short-circuits, and per-order summaries all flow through one injected
//! sink.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Diagnostic Side Channel                            │
//! │                                                                         │
//! │  PriceResolver ──┐                                                      │
//! │                  │                                                      │
//! │  OrderPipeline ──┼──► DiagnosticSink::emit(message)                    │
//! │                  │          │                                           │
//! │  Registration ───┘          ├──► DiagnosticBuffer (tests: inspect)     │
//! │  (petro-store)              └──► console sink (demo app: print)        │
//! │                                                                         │
//! │  Messages are informational only: nothing reads them back into         │
//! │  the computation                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Sink Trait
// =============================================================================

/// Receiver for diagnostic messages produced during processing.
///
/// Hosts decide what emission means: the demo prints messages as they
/// arrive, tests collect them in a [`DiagnosticBuffer`]. Emission order
/// matters and implementations must preserve it.
pub trait DiagnosticSink {
    /// Receives one diagnostic message.
    fn emit(&mut self, message: String);
}

// =============================================================================
// In-Memory Buffer
// =============================================================================

/// Collects diagnostics in memory, preserving emission order.
#[derive(Debug, Default)]
pub struct DiagnosticBuffer {
    messages: Vec<String>,
}

impl DiagnosticBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages emitted so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// True when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages emitted so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when any collected message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|message| message.contains(needle))
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn emit(&mut self, message: String) {
        self.messages.push(message);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_preserves_order() {
        let mut buffer = DiagnosticBuffer::new();
        assert!(buffer.is_empty());

        buffer.emit("primeiro".to_string());
        buffer.emit("segundo".to_string());

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.messages(), &["primeiro", "segundo"]);
    }

    #[test]
    fn test_buffer_contains() {
        let mut buffer = DiagnosticBuffer::new();
        buffer.emit("calc diesel 4788".to_string());

        assert!(buffer.contains("calc diesel"));
        assert!(!buffer.contains("calc gas"));
    }
}
