//! # Coupon Discounts
//!
//! Coupon-keyed discount rules applied after pricing, before rounding.
//!
//! ## Rules
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  coupon code        effect                 restriction           │
//! │  ───────────        ──────                 ───────────           │
//! │  MEGA10             10% off                none                  │
//! │  NOVO5              5% off                 none                  │
//! │  LUB2               2.00 off               lubricant orders only │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Codes match exactly, case-sensitive. The first rule that matches
//! wins; an order whose coupon matches nothing keeps its price. A flat
//! discount may push a price below zero, that is left as is here.

use crate::types::Order;
use crate::PRODUCT_LUBRICANT;

// =============================================================================
// Discount Rule
// =============================================================================

/// One coupon-keyed discount.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountRule {
    /// Percentage off the quoted price.
    Percentage {
        /// Coupon code, matched exactly.
        code: String,
        /// Fraction removed, e.g. `0.10` for 10% off.
        rate: f64,
    },

    /// Flat amount off the quoted price.
    Flat {
        /// Coupon code, matched exactly.
        code: String,
        /// Amount subtracted.
        amount: f64,
        /// When set, the coupon only applies to this product.
        required_product: Option<String>,
    },
}

impl DiscountRule {
    /// Whether this discount applies to the given order.
    pub fn supports(&self, order: &Order) -> bool {
        match self {
            Self::Percentage { code, .. } => order.coupon.as_deref() == Some(code.as_str()),
            Self::Flat {
                code,
                required_product,
                ..
            } => {
                let code_matches = order.coupon.as_deref() == Some(code.as_str());
                let product_matches = required_product
                    .as_deref()
                    .map_or(true, |product| order.product == product);
                code_matches && product_matches
            }
        }
    }

    /// Discounted price. Never clamps.
    pub fn apply(&self, price: f64) -> f64 {
        match self {
            Self::Percentage { rate, .. } => price - price * rate,
            Self::Flat { amount, .. } => price - amount,
        }
    }
}

// =============================================================================
// Discount Resolver
// =============================================================================

/// Walks the discount list in order and applies the first match.
///
/// An empty list is valid and means "no discounts configured".
#[derive(Debug, Clone, Default)]
pub struct DiscountResolver {
    rules: Vec<DiscountRule>,
}

impl DiscountResolver {
    /// Builds a resolver over a discount list.
    pub fn new(rules: Vec<DiscountRule>) -> Self {
        Self { rules }
    }

    /// Applies the first matching discount, or returns the price
    /// unchanged when nothing matches.
    pub fn apply(&self, order: &Order, price: f64) -> f64 {
        match self.rules.iter().find(|rule| rule.supports(order)) {
            Some(rule) => rule.apply(price),
            None => price,
        }
    }
}

/// Built-in discounts in evaluation order.
pub fn default_discount_rules() -> Vec<DiscountRule> {
    vec![
        DiscountRule::Percentage {
            code: "MEGA10".to_string(),
            rate: 0.10,
        },
        DiscountRule::Percentage {
            code: "NOVO5".to_string(),
            rate: 0.05,
        },
        DiscountRule::Flat {
            code: "LUB2".to_string(),
            amount: 2.0,
            required_product: Some(PRODUCT_LUBRICANT.to_string()),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(product: &str, coupon: Option<&str>) -> Order {
        Order::new("Teste", product, 1.0, coupon.map(str::to_string))
    }

    fn resolver() -> DiscountResolver {
        DiscountResolver::new(default_discount_rules())
    }

    #[test]
    fn test_mega10_takes_ten_percent() {
        let price = resolver().apply(&order("diesel", Some("MEGA10")), 500.0);
        assert_eq!(price, 450.0);
    }

    #[test]
    fn test_novo5_takes_five_percent() {
        let price = resolver().apply(&order("etanol", Some("NOVO5")), 200.0);
        assert_eq!(price, 190.0);
    }

    #[test]
    fn test_lub2_applies_to_lubricant_only() {
        let resolver = resolver();

        let price = resolver.apply(&order("lubrificante", Some("LUB2")), 300.0);
        assert_eq!(price, 298.0);

        // Same coupon on a different product changes nothing.
        let price = resolver.apply(&order("diesel", Some("LUB2")), 300.0);
        assert_eq!(price, 300.0);
    }

    #[test]
    fn test_codes_match_exactly() {
        let resolver = resolver();

        assert_eq!(resolver.apply(&order("diesel", Some("mega10")), 100.0), 100.0);
        assert_eq!(resolver.apply(&order("diesel", Some("MEGA 10")), 100.0), 100.0);
    }

    #[test]
    fn test_missing_or_unknown_coupon_keeps_price() {
        let resolver = resolver();

        assert_eq!(resolver.apply(&order("diesel", None), 123.45), 123.45);
        assert_eq!(resolver.apply(&order("diesel", Some("NAOEXISTE")), 123.45), 123.45);
    }

    #[test]
    fn test_first_matching_discount_wins() {
        let resolver = DiscountResolver::new(vec![
            DiscountRule::Percentage {
                code: "DUPLO".to_string(),
                rate: 0.10,
            },
            DiscountRule::Percentage {
                code: "DUPLO".to_string(),
                rate: 0.50,
            },
        ]);

        let price = resolver.apply(&order("diesel", Some("DUPLO")), 100.0);
        assert_eq!(price, 90.0);
    }

    #[test]
    fn test_flat_discount_may_go_negative() {
        let resolver = DiscountResolver::new(vec![DiscountRule::Flat {
            code: "GIGANTE".to_string(),
            amount: 50.0,
            required_product: None,
        }]);

        let price = resolver.apply(&order("diesel", Some("GIGANTE")), 10.0);
        assert_eq!(price, -40.0);
    }

    #[test]
    fn test_empty_list_is_identity() {
        let resolver = DiscountResolver::default();
        assert_eq!(resolver.apply(&order("diesel", Some("MEGA10")), 77.0), 77.0);
    }
}
