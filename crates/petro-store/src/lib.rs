//! # petro-store: Persistence Layer for PetroBahia Orders
//!
//! Everything that touches the file system lives here; business rules
//! stay in `petro-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  apps/demo                                                          │
//! │      │ register(draft) / load_all()                                 │
//! │      ▼                                                              │
//! │  ★ petro-store (THIS CRATE) ★                                       │
//! │                                                                     │
//! │   ┌──────────────────────┐      ┌──────────────────────────────┐   │
//! │   │ RegistrationService  │─────►│ CustomerLedger               │   │
//! │   │ two-phase validation │      │ append-only JSON lines       │   │
//! │   └──────────┬───────────┘      └──────────────────────────────┘   │
//! │              │ validation rules                                     │
//! │              ▼                                                      │
//! │   petro-core (pure, no I/O)                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Store error types
//! - [`ledger`] - Append-only customer ledger file
//! - [`service`] - Registration service over the ledger

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod service;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use ledger::{CustomerLedger, CustomerRecord};
pub use service::RegistrationService;
