//! # Customer Ledger
//!
//! Append-only customer file, one JSON record per line.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ data/clientes.txt                                                       │
//! │                                                                         │
//! │ {"nome":"Maria","email":"m@pb.com","cnpj":"...","registrado_em":"..."}  │
//! │ {"nome":"Joao","email":"j@pb.com","cnpj":"...","registrado_em":"..."}   │
//! │ ...                                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are only ever appended; rewriting or compacting the file is
//! out of scope. A missing file reads back as an empty ledger.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use petro_core::Customer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Customer Record
// =============================================================================

/// One persisted ledger line: the customer plus the moment the
/// registration was accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// The registered customer, stored with its wire field names.
    #[serde(flatten)]
    pub customer: Customer,

    /// When the registration was accepted.
    #[serde(rename = "registrado_em")]
    pub registered_at: DateTime<Utc>,
}

// =============================================================================
// Customer Ledger
// =============================================================================

/// Handle to the customer ledger file.
#[derive(Debug, Clone)]
pub struct CustomerLedger {
    path: PathBuf,
}

impl CustomerLedger {
    /// Opens a ledger handle, creating the parent directory if needed.
    ///
    /// The file itself is only created by the first [`append`].
    ///
    /// ## Errors
    /// [`StoreError::Io`] when the parent directory cannot be created.
    ///
    /// [`append`]: CustomerLedger::append
    pub fn new(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StoreError::io(&path, source))?;
            }
        }
        Ok(Self { path })
    }

    /// The ledger file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one customer, stamped with the current time.
    ///
    /// ## Errors
    /// [`StoreError::Io`] on file access failures,
    /// [`StoreError::Record`] when the record cannot be encoded.
    pub fn append(&self, customer: &Customer) -> StoreResult<CustomerRecord> {
        let record = CustomerRecord {
            customer: customer.clone(),
            registered_at: Utc::now(),
        };
        let line = serde_json::to_string(&record)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::io(&self.path, source))?;
        writeln!(file, "{line}").map_err(|source| StoreError::io(&self.path, source))?;

        debug!(
            path = %self.path.display(),
            customer = %record.customer.name,
            "customer appended to ledger"
        );
        Ok(record)
    }

    /// Reads every record in the ledger, oldest first.
    ///
    /// Blank lines are skipped; a ledger that does not exist yet reads
    /// back empty.
    ///
    /// ## Errors
    /// [`StoreError::Io`] on read failures, [`StoreError::Record`] on a
    /// line that is not a valid record.
    pub fn load_all(&self) -> StoreResult<Vec<CustomerRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::io(&self.path, source)),
        };

        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| StoreError::io(&self.path, source))?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn customer(name: &str) -> Customer {
        Customer::new(name, format!("{name}@example.com"), "12345678901234")
    }

    #[test]
    fn test_new_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("clientes.txt");
        assert!(!path.parent().unwrap().exists());

        CustomerLedger::new(&path).unwrap();

        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_append_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let ledger = CustomerLedger::new(dir.path().join("clientes.txt")).unwrap();

        ledger.append(&customer("Maria")).unwrap();
        ledger.append(&customer("Joao")).unwrap();

        let records = ledger.load_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].customer.name, "Maria");
        assert_eq!(records[1].customer.name, "Joao");
        assert_eq!(records[1].customer.email, "Joao@example.com");
        assert!(records[0].registered_at <= Utc::now());
    }

    #[test]
    fn test_missing_ledger_reads_back_empty() {
        let dir = TempDir::new().unwrap();
        let ledger = CustomerLedger::new(dir.path().join("clientes.txt")).unwrap();

        assert!(ledger.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.txt");
        let line = r#"{"nome":"Maria","email":"m@example.com","cnpj":"1","registrado_em":"2024-05-01T12:00:00Z"}"#;
        fs::write(&path, format!("\n{line}\n\n")).unwrap();

        let ledger = CustomerLedger::new(&path).unwrap();
        let records = ledger.load_all().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer.name, "Maria");
    }

    #[test]
    fn test_garbage_line_is_a_record_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clientes.txt");
        fs::write(&path, "nao e json\n").unwrap();

        let ledger = CustomerLedger::new(&path).unwrap();
        assert!(matches!(ledger.load_all(), Err(StoreError::Record(_))));
    }
}
