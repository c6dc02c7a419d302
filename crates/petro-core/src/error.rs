//! # Error Types
//!
//! Domain-specific error types for petro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petro-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog configuration + order normalization    │
//! │  └── ValidationError  - Customer registration check failures           │
//! │                                                                         │
//! │  petro-store errors (separate crate)                                   │
//! │  └── StoreError       - Customer ledger persistence failures           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError (wrapped); StoreError never         │
//! │  crosses into pure code                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (offending value, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Validation failures double as the report lines a rejected
//!    registration prints, so their display strings keep the wording the
//!    back office already knows

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These cover the two ways order processing can fail before any price
/// is computed: a misconfigured pricing catalog, and a raw request that
/// cannot be normalized into an [`Order`](crate::types::Order).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The pricing catalog has no rules.
    ///
    /// ## When This Occurs
    /// - `PriceResolver::new` is called with an empty rule list
    /// - A configuration refactor drops the catalog wiring
    ///
    /// This is a construction-time error: it is never produced while
    /// processing an order.
    #[error("pricing catalog is empty: at least one pricing rule is required")]
    EmptyPricingCatalog,

    /// The `qtd` field of a raw order could not be read as a number.
    ///
    /// ## When This Occurs
    /// - The payload carries `"qtd": "trezentos"` or another non-numeric
    ///   JSON value (string, boolean, array, object)
    /// - An upstream producer serializes quantities as strings
    ///
    /// JSON `null` is not malformed; it counts as an absent quantity.
    ///
    /// ## Processing Workflow
    /// ```text
    /// payload {"cliente": "X", "produto": "diesel", "qtd": "trezentos"}
    ///      │
    ///      ▼
    /// Order::from_request
    ///      │
    ///      ▼
    /// MalformedQuantity { value: "\"trezentos\"" }
    ///      │
    ///      ▼
    /// caller reports this order and continues with the next one
    /// ```
    #[error("malformed quantity: {value}")]
    MalformedQuantity { value: String },

    /// The `qtd` field is numeric but negative.
    ///
    /// ## When This Occurs
    /// - The payload carries `"qtd": -5` or similar
    ///
    /// Quantities are non-negative by contract; a negative value is a
    /// producer bug and is rejected at normalization instead of flowing
    /// into the tier math.
    #[error("quantity must not be negative: {quantity}")]
    NegativeQuantity { quantity: f64 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Customer registration validation errors.
///
/// These errors occur when a registration payload does not meet the
/// intake requirements. Their display strings are emitted verbatim in
/// registration reports.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// One or more required fields are absent from the payload.
    ///
    /// Reported once per payload, however many fields are missing; the
    /// per-field checks below still run against the fields' defaults.
    #[error("faltou campo")]
    MissingField,

    /// A field is present but blank or otherwise unusable.
    #[error("{field} invalido")]
    InvalidField { field: String },

    /// A field is present but does not match the expected format.
    #[error("{field} invalido (esperado {expected})")]
    InvalidFormat { field: String, expected: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
