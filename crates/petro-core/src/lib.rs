//! # petro-core: Pure Business Logic for PetroBahia Orders
//!
//! This crate is the **heart** of the PetroBahia order platform. It contains
//! all pricing and validation logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PetroBahia Order Platform                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/demo (CLI driver)                      │   │
//! │  │    registration walkthrough ──► order batch ──► fleet report    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                petro-store (Persistence Layer)                  │   │
//! │  │          customer ledger on disk, registration service          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ petro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  pricing  │  │ discount  │  │ validation│   │   │
//! │  │   │   Order   │  │   rules   │  │  coupons  │  │   checks  │   │   │
//! │  │   │ Customer  │  │ resolver  │  │ resolver  │  │   report  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, Customer, PriceTable, etc.)
//! - [`error`] - Domain error types
//! - [`diagnostics`] - Diagnostic sink the pipeline reports through
//! - [`pricing`] - Ordered product pricing rules and their resolver
//! - [`discount`] - Coupon discount rules and their resolver
//! - [`rounding`] - Per-product final price rounding
//! - [`validation`] - Registration field checks
//! - [`pipeline`] - End-to-end order processing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here;
//!    diagnostics go through a sink the caller owns
//! 3. **Pinned Arithmetic**: Prices are `f64` and every step runs in one
//!    fixed order, so a given order always lands on the same bits
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use petro_core::{DiagnosticBuffer, OrderPipeline, OrderRequest};
//!
//! let pipeline = OrderPipeline::with_defaults()?;
//! let request: OrderRequest = serde_json::from_value(serde_json::json!({
//!     "cliente": "Ana",
//!     "produto": "diesel",
//!     "qtd": 1200,
//!     "cupom": "MEGA10",
//! }))?;
//!
//! let mut sink = DiagnosticBuffer::new();
//! let price = pipeline.process(&request, &mut sink)?;
//!
//! // 1200 L lands in the top diesel tier, then MEGA10 takes 10% off.
//! assert_eq!(price, 3878.0);
//! assert!(sink.contains("pedido ok: Ana diesel 1200 => 3878"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod diagnostics;
pub mod discount;
pub mod error;
pub mod pipeline;
pub mod pricing;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use petro_core::OrderPipeline` instead of
// `use petro_core::pipeline::OrderPipeline`

pub use diagnostics::{DiagnosticBuffer, DiagnosticSink};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pipeline::OrderPipeline;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Product identifier for diesel orders.
///
/// ## Why constants?
/// Product identifiers double as wire values: order payloads carry them
/// verbatim in `produto` and the rounding rules match on them. Keeping
/// them in one place stops the strings from drifting apart across the
/// pricing, discount and rounding modules.
pub const PRODUCT_DIESEL: &str = "diesel";

/// Product identifier for gasoline orders.
pub const PRODUCT_GASOLINE: &str = "gasolina";

/// Product identifier for ethanol orders.
pub const PRODUCT_ETHANOL: &str = "etanol";

/// Product identifier for lubricant orders.
pub const PRODUCT_LUBRICANT: &str = "lubrificante";
