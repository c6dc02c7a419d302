//! # Store Error Types
//!
//! Typed errors for ledger persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  std::io::Error ──────► StoreError::Io      (with the path)     │
//! │  serde_json::Error ───► StoreError::Record  (via #[from])       │
//! │                              │                                  │
//! │                              ▼                                  │
//! │                    StoreResult<T> to callers                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File system access failed; carries the ledger path involved.
    #[error("ledger io error at {}: {source}", path.display())]
    Io {
        /// Ledger file (or its directory) that was being touched.
        path: PathBuf,
        /// Underlying io error.
        #[source]
        source: std::io::Error,
    },

    /// A ledger line could not be encoded or decoded.
    #[error("malformed ledger record: {0}")]
    Record(#[from] serde_json::Error),
}

impl StoreError {
    /// Wraps an io error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the store crate.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_the_path() {
        let error = StoreError::io(
            "data/clientes.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let rendered = error.to_string();

        assert!(rendered.contains("data/clientes.txt"));
        assert!(rendered.contains("denied"));
    }

    #[test]
    fn test_serde_errors_convert_via_from() {
        let bad = serde_json::from_str::<serde_json::Value>("{ nope");
        let error: StoreError = bad.unwrap_err().into();

        assert!(matches!(error, StoreError::Record(_)));
    }
}
