//! # Order Pipeline
//!
//! End-to-end order processing: normalization through final price.
//!
//! ## Processing Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderRequest                                                           │
//! │       │ 1. normalize (typed errors stop here)                           │
//! │       ▼                                                                 │
//! │  quantity == 0 ──yes──► emit "qtd zero" ──► 0.0                         │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  2. price via rule catalog (emits one calc line)                        │
//! │  3. clamp: negative quote ──► emit warning, continue with 0.0           │
//! │  4. first matching coupon discount                                      │
//! │  5. product rounding                                                    │
//! │  6. emit "pedido ok" summary ──► final price                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The clamp sits between pricing and discounts: a flat coupon can
//! still take the final price below zero, and that is left alone.

use crate::diagnostics::DiagnosticSink;
use crate::discount::{default_discount_rules, DiscountResolver};
use crate::error::CoreResult;
use crate::pricing::{default_pricing_rules, PriceResolver};
use crate::rounding::round_for_product;
use crate::types::{Order, OrderRequest, PriceTable};

/// Coordinates pricing, discounts and rounding for one order at a time.
#[derive(Debug, Clone)]
pub struct OrderPipeline {
    pricing: PriceResolver,
    discounts: DiscountResolver,
}

impl OrderPipeline {
    /// Builds a pipeline from explicit resolvers.
    pub fn new(pricing: PriceResolver, discounts: DiscountResolver) -> Self {
        Self { pricing, discounts }
    }

    /// Builds a pipeline over the built-in catalog and discount list.
    ///
    /// ## Errors
    /// Propagates [`crate::CoreError::EmptyPricingCatalog`]; cannot
    /// actually occur with the built-in catalog.
    pub fn with_defaults() -> CoreResult<Self> {
        let table = PriceTable::default();
        let pricing = PriceResolver::new(default_pricing_rules(&table))?;
        let discounts = DiscountResolver::new(default_discount_rules());
        Ok(Self::new(pricing, discounts))
    }

    /// Runs one raw request through the whole pipeline and returns the
    /// final price.
    ///
    /// Every diagnostic the run produces goes through `sink`, ending
    /// with a `pedido ok` summary line for orders that price normally.
    ///
    /// ## Errors
    /// Normalization failures ([`crate::CoreError::MalformedQuantity`],
    /// [`crate::CoreError::NegativeQuantity`]) abort before any
    /// diagnostic is emitted.
    pub fn process(
        &self,
        request: &OrderRequest,
        sink: &mut dyn DiagnosticSink,
    ) -> CoreResult<f64> {
        let order = Order::from_request(request)?;

        // Exact zero only; fractional quantities price normally.
        if order.quantity == 0.0 {
            sink.emit("qtd zero, retornando 0".to_string());
            return Ok(0.0);
        }

        let mut price = self.pricing.price(&order, sink);
        if price < 0.0 {
            sink.emit("algo deu errado, preco negativo".to_string());
            price = 0.0;
        }

        price = self.discounts.apply(&order, price);
        price = round_for_product(&order.product, price);

        sink.emit(format!(
            "pedido ok: {} {} {} => {}",
            order.customer_name, order.product, order.quantity, price
        ));
        Ok(price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
