//! # Registration Validation
//!
//! Field checks for customer registration payloads.
//!
//! ## Two-Phase Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  CustomerDraft                                                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  validate_registration ──► presence + name + cnpj               │
//! │       │ (all problems collected, reported together)             │
//! │       ▼                                                         │
//! │  validate_email ─────────► shape check, runs only after the     │
//! │                            first phase passes                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks are plain character scans. The shapes accepted here are
//! deliberately loose: a 14-digit string passes as a cnpj without any
//! check-digit math.

use crate::error::ValidationError;
use crate::types::CustomerDraft;

/// Result alias for the validators in this module.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Validation Report
// =============================================================================

/// Accumulated validation problems, in the order they were found.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when no problems were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded problems, oldest first.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that a customer name has visible content.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "nome".to_string(),
        });
    }
    Ok(())
}

/// Checks that a cnpj is exactly 14 digits after trimming.
pub fn validate_cnpj(cnpj: &str) -> ValidationResult<()> {
    let cnpj = cnpj.trim();
    if cnpj.len() != 14 || !cnpj.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "cnpj".to_string(),
            expected: "14 digitos numericos".to_string(),
        });
    }
    Ok(())
}

/// Checks the basic shape of an email address.
///
/// ## Rules
/// - no whitespace anywhere
/// - exactly one `@`, with content on both sides
/// - the domain carries a dot with at least one character on each side
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let invalid = || ValidationError::InvalidField {
        field: "email".to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let has_interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len());
    if !has_interior_dot {
        return Err(invalid());
    }
    Ok(())
}

// =============================================================================
// Registration Gate
// =============================================================================

/// First-phase registration check: presence, name, cnpj.
///
/// All problems are collected so the caller can report them together.
/// A draft with an absent field is flagged once for the absence and
/// again by the field check that then runs against the empty value.
/// Email format is deliberately not checked here; it has its own
/// second phase via [`validate_email`].
pub fn validate_registration(draft: &CustomerDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.is_none() || draft.email.is_none() || draft.cnpj.is_none() {
        report.push(ValidationError::MissingField);
    }

    if let Err(error) = validate_name(draft.name.as_deref().unwrap_or_default()) {
        report.push(error);
    }
    if let Err(error) = validate_cnpj(draft.cnpj.as_deref().unwrap_or_default()) {
        report.push(error);
    }

    report
}

// =============================================================================
// Unit Tests
// =============================================================================
