//! # Registration Service
//!
//! Coordinates draft validation, ledger persistence and the welcome
//! message for new customers.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CustomerDraft                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  field phase (presence, nome, cnpj) ──invalid──► emit problems,     │
//! │       │ ok                                       return false       │
//! │       ▼                                                             │
//! │  email phase ───────────────────────invalid──► emit problem,        │
//! │       │ ok                                     return false         │
//! │       ▼                                                             │
//! │  ledger.append ──► emit welcome ──► return true                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation problems are reported through the caller's sink using the
//! exact field-check wording; only io failures surface as `Err`.

use petro_core::diagnostics::DiagnosticSink;
use petro_core::validation::{validate_email, validate_registration};
use petro_core::{Customer, CustomerDraft};
use tracing::debug;

use crate::error::StoreResult;
use crate::ledger::CustomerLedger;

/// Customer registration over a [`CustomerLedger`].
#[derive(Debug, Clone)]
pub struct RegistrationService {
    ledger: CustomerLedger,
}

impl RegistrationService {
    /// Builds a service writing to the given ledger.
    pub fn new(ledger: CustomerLedger) -> Self {
        Self { ledger }
    }

    /// The ledger this service writes to.
    pub fn ledger(&self) -> &CustomerLedger {
        &self.ledger
    }

    /// Validates and registers one customer draft.
    ///
    /// Returns `Ok(true)` when the customer was persisted, `Ok(false)`
    /// when validation rejected the draft. Field values are stored as
    /// supplied; validation trims only for checking.
    ///
    /// ## Errors
    /// [`crate::StoreError`] when the ledger cannot be written.
    pub fn register(
        &self,
        draft: &CustomerDraft,
        sink: &mut dyn DiagnosticSink,
    ) -> StoreResult<bool> {
        let report = validate_registration(draft);
        for error in report.errors() {
            sink.emit(error.to_string());
        }
        if !report.is_valid() {
            debug!(problems = report.errors().len(), "registration draft rejected");
            return Ok(false);
        }

        // The field phase guarantees every field is present past this point.
        if let Err(error) = validate_email(draft.email.as_deref().unwrap_or_default()) {
            sink.emit(error.to_string());
            debug!("registration draft rejected on email shape");
            return Ok(false);
        }

        let customer = Customer::new(
            draft.name.clone().unwrap_or_default(),
            draft.email.clone().unwrap_or_default(),
            draft.cnpj.clone().unwrap_or_default(),
        );
        self.ledger.append(&customer)?;
        sink.emit(format!(
            "enviando mensagem de boas vindas para {}",
            customer.name
        ));
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
