//! # Domain Types
//!
//! Core data for order processing and customer registration.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw payload (serde)              normalized domain value               │
//! │  ───────────────────              ───────────────────────               │
//! │  OrderRequest ───► Order::from_request ───► Order                       │
//! │  CustomerDraft ──► validation module ─────► Customer                    │
//! │                                                                         │
//! │  PriceTable: immutable unit prices injected into the pricing catalog   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire field names are the Portuguese ones the intake format uses
//! (`cliente`, `produto`, `qtd`, `cupom`, `nome`); the Rust structs carry
//! English names and map via serde renames.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Order
// =============================================================================

/// A normalized fuel/lubricant order, ready for pricing.
///
/// Immutable after construction: pipeline steps produce new price
/// values, never a changed Order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Customer display name (reporting only; registration checks happen
    /// upstream).
    pub customer_name: String,

    /// Product identifier, matched case-sensitively by pricing rules.
    pub product: String,

    /// Ordered quantity in product units (liters for fuels). Always
    /// non-negative, may be fractional.
    pub quantity: f64,

    /// Coupon code; `None` when the request carried no usable coupon.
    pub coupon: Option<String>,
}

impl Order {
    /// Builds an order from already-normalized parts.
    pub fn new(
        customer_name: impl Into<String>,
        product: impl Into<String>,
        quantity: f64,
        coupon: Option<String>,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            product: product.into(),
            quantity,
            coupon,
        }
    }

    /// Normalizes a raw request into an order.
    ///
    /// ## Rules
    /// - Missing (or JSON `null`) quantity defaults to `0`
    /// - Any other non-numeric quantity is rejected
    /// - Negative quantities are rejected
    /// - A coupon that is blank after trimming becomes "no coupon"
    ///
    /// ## Errors
    /// [`CoreError::MalformedQuantity`] when `qtd` is not a number,
    /// [`CoreError::NegativeQuantity`] when it is numeric but negative.
    pub fn from_request(request: &OrderRequest) -> CoreResult<Self> {
        let quantity = match &request.quantity {
            None => 0.0,
            Some(value) => value.as_f64().ok_or_else(|| CoreError::MalformedQuantity {
                value: value.to_string(),
            })?,
        };
        if quantity < 0.0 {
            return Err(CoreError::NegativeQuantity { quantity });
        }

        let coupon = request
            .coupon
            .as_deref()
            .map(str::trim)
            .filter(|coupon| !coupon.is_empty())
            .map(str::to_string);

        Ok(Self {
            customer_name: request.customer.clone(),
            product: request.product.clone(),
            quantity,
            coupon,
        })
    }
}

// =============================================================================
// Order Request
// =============================================================================

/// Raw order payload as supplied by upstream callers.
///
/// The quantity stays a raw JSON value so a malformed entry surfaces as
/// a typed normalization error for that one order instead of failing
/// deserialization of a whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Customer display name.
    #[serde(rename = "cliente", default)]
    pub customer: String,

    /// Product identifier.
    #[serde(rename = "produto", default)]
    pub product: String,

    /// Quantity as it arrived; absent means zero.
    #[serde(rename = "qtd", default)]
    pub quantity: Option<serde_json::Value>,

    /// Optional coupon code; blank values are dropped at normalization.
    #[serde(rename = "cupom", default)]
    pub coupon: Option<String>,
}

// =============================================================================
// Customer
// =============================================================================

/// An accepted corporate customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Corporate name as registered.
    #[serde(rename = "nome")]
    pub name: String,

    /// Contact email, already shape-checked at registration.
    pub email: String,

    /// Brazilian company tax id, 14 digits.
    pub cnpj: String,
}

impl Customer {
    /// Builds a customer record from already-validated parts.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        cnpj: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            cnpj: cnpj.into(),
        }
    }
}

/// Raw registration payload.
///
/// Every field is optional so validation can report exactly which parts
/// of an incomplete payload are missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Corporate name.
    #[serde(rename = "nome", default)]
    pub name: Option<String>,

    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Company tax id.
    #[serde(default)]
    pub cnpj: Option<String>,
}

// =============================================================================
// Price Table
// =============================================================================

/// Immutable per-product base unit prices.
///
/// Built once at startup and handed to the pricing rule constructors;
/// tests inject alternate tables to exercise tier math in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    /// Diesel price per liter.
    pub diesel: f64,
    /// Gasoline price per liter.
    pub gasoline: f64,
    /// Ethanol price per liter.
    pub ethanol: f64,
    /// Lubricant price per unit.
    pub lubricant: f64,
}

impl Default for PriceTable {
    /// Current published list prices.
    fn default() -> Self {
        Self {
            diesel: 3.99,
            gasoline: 5.19,
            ethanol: 3.59,
            lubricant: 25.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(payload: serde_json::Value) -> OrderRequest {
        serde_json::from_value(payload).unwrap()
    }

    #[test]
    fn test_from_request_normalizes_full_payload() {
        let request = request(json!({
            "cliente": "Maria",
            "produto": "gasolina",
            "qtd": 15,
            "cupom": "MEGA10",
        }));

        let order = Order::from_request(&request).unwrap();

        assert_eq!(order.customer_name, "Maria");
        assert_eq!(order.product, "gasolina");
        assert_eq!(order.quantity, 15.0);
        assert_eq!(order.coupon.as_deref(), Some("MEGA10"));
    }

    #[test]
    fn test_from_request_defaults_missing_fields() {
        let order = Order::from_request(&request(json!({}))).unwrap();

        assert_eq!(order.customer_name, "");
        assert_eq!(order.product, "");
        assert_eq!(order.quantity, 0.0);
        assert_eq!(order.coupon, None);

        // JSON null counts as absent, same as a missing key.
        let order = Order::from_request(&request(json!({ "qtd": null }))).unwrap();
        assert_eq!(order.quantity, 0.0);
    }

    #[test]
    fn test_from_request_keeps_fractional_quantities() {
        let order =
            Order::from_request(&request(json!({ "produto": "diesel", "qtd": 12.5 }))).unwrap();
        assert_eq!(order.quantity, 12.5);
    }

    #[test]
    fn test_from_request_rejects_non_numeric_quantity() {
        for qtd in [json!("trezentos"), json!(true), json!([1, 2]), json!({})] {
            let request = request(json!({ "produto": "diesel", "qtd": qtd }));
            assert!(matches!(
                Order::from_request(&request),
                Err(CoreError::MalformedQuantity { .. })
            ));
        }
    }

    #[test]
    fn test_from_request_rejects_negative_quantity() {
        let request = request(json!({ "produto": "diesel", "qtd": -10 }));
        assert!(matches!(
            Order::from_request(&request),
            Err(CoreError::NegativeQuantity { .. })
        ));
    }

    #[test]
    fn test_from_request_drops_blank_coupons() {
        for cupom in [json!(null), json!(""), json!("   ")] {
            let request = request(json!({ "produto": "diesel", "qtd": 1, "cupom": cupom }));
            let order = Order::from_request(&request).unwrap();
            assert_eq!(order.coupon, None);
        }
    }

    #[test]
    fn test_customer_draft_keeps_missing_fields_as_none() {
        let draft: CustomerDraft = serde_json::from_value(json!({ "nome": "Maria" })).unwrap();

        assert_eq!(draft.name.as_deref(), Some("Maria"));
        assert_eq!(draft.email, None);
        assert_eq!(draft.cnpj, None);
    }

    #[test]
    fn test_default_price_table_carries_published_prices() {
        let table = PriceTable::default();

        assert_eq!(table.diesel, 3.99);
        assert_eq!(table.gasoline, 5.19);
        assert_eq!(table.ethanol, 3.59);
        assert_eq!(table.lubricant, 25.0);
    }
}
