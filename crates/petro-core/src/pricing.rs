//! # Pricing Rules
//!
//! Ordered catalog of product pricing rules and the resolver that walks it.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order ──► [Diesel] ─► [Gasoline] ─► [Ethanol] ─► [Lubricant] ─► [Unknown]
//! │               │            │             │             │            │    │
//! │               └── first rule whose supports() says yes wins ────────┘    │
//! │                                                                         │
//! │  Unknown matches everything, so it must stay LAST in the catalog.       │
//! │  If no rule matches at all, the last rule prices the order anyway.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every quote emits one diagnostic line through the caller's
//! [`DiagnosticSink`], carrying the rule's pre-discount price.

use crate::diagnostics::DiagnosticSink;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, PriceTable};
use crate::{PRODUCT_DIESEL, PRODUCT_ETHANOL, PRODUCT_GASOLINE, PRODUCT_LUBRICANT};

/// Liters of gasoline above which the flat bulk bonus applies.
pub const GASOLINE_BONUS_THRESHOLD: f64 = 200.0;

/// Flat amount subtracted from gasoline orders past the threshold.
pub const GASOLINE_BONUS_VALUE: f64 = 100.0;

// =============================================================================
// Pricing Rule
// =============================================================================

/// One entry in the pricing catalog.
///
/// Rules are data, not behavior plugins: the full set of products the
/// company sells is closed, so new pricing lives here, next to the
/// existing tier math.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingRule {
    /// Tiered diesel pricing with volume multipliers.
    Diesel {
        /// Price per liter before tier multipliers.
        unit_price: f64,
    },

    /// Linear gasoline pricing with a flat bulk bonus.
    Gasoline {
        /// Price per liter.
        unit_price: f64,
        /// Liters above which the bonus kicks in (strictly greater).
        bonus_threshold: f64,
        /// Flat amount subtracted once the threshold is passed.
        bonus_value: f64,
    },

    /// Linear ethanol pricing with a small bulk multiplier.
    Ethanol {
        /// Price per liter before the bulk multiplier.
        unit_price: f64,
    },

    /// Linear lubricant pricing, no tiers.
    Lubricant {
        /// Price per unit.
        unit_price: f64,
    },

    /// Catch-all for products nobody prices. Matches every order and
    /// always quotes zero.
    Unknown,
}

impl PricingRule {
    /// Whether this rule prices the given order.
    pub fn supports(&self, order: &Order) -> bool {
        match self {
            Self::Diesel { .. } => order.product == PRODUCT_DIESEL,
            Self::Gasoline { .. } => order.product == PRODUCT_GASOLINE,
            Self::Ethanol { .. } => order.product == PRODUCT_ETHANOL,
            Self::Lubricant { .. } => order.product == PRODUCT_LUBRICANT,
            Self::Unknown => true,
        }
    }

    /// Quotes the order before discounts and rounding.
    ///
    /// ## Rules
    /// - Diesel: above 1000 liters the whole subtotal takes a 10% cut,
    ///   above 500 a 5% cut, both thresholds exclusive
    /// - Gasoline: linear, minus a flat bonus above the threshold
    /// - Ethanol: linear, times 0.97 above 80 liters
    /// - Lubricant: strictly linear
    /// - Unknown: always zero
    pub fn calculate(&self, order: &Order) -> f64 {
        match self {
            Self::Diesel { unit_price } => {
                let mut subtotal = order.quantity * unit_price;
                if order.quantity > 1000.0 {
                    subtotal *= 0.9;
                } else if order.quantity > 500.0 {
                    subtotal *= 0.95;
                }
                subtotal
            }
            Self::Gasoline {
                unit_price,
                bonus_threshold,
                bonus_value,
            } => {
                let mut subtotal = order.quantity * unit_price;
                if order.quantity > *bonus_threshold {
                    subtotal -= bonus_value;
                }
                subtotal
            }
            Self::Ethanol { unit_price } => {
                let mut subtotal = order.quantity * unit_price;
                if order.quantity > 80.0 {
                    subtotal *= 0.97;
                }
                subtotal
            }
            Self::Lubricant { unit_price } => order.quantity * unit_price,
            Self::Unknown => 0.0,
        }
    }

    /// Diagnostic line for a quote this rule just produced.
    pub fn debug_message(&self, price: f64) -> String {
        match self {
            Self::Diesel { .. } => format!("calc diesel {price}"),
            Self::Gasoline { .. } => format!("calc gas {price}"),
            Self::Ethanol { .. } => format!("calc eta {price}"),
            Self::Lubricant { .. } => format!("calc lub {price}"),
            Self::Unknown => "tipo desconhecido, devolvendo 0".to_string(),
        }
    }
}

// =============================================================================
// Price Resolver
// =============================================================================

/// Walks the rule catalog in order and quotes orders.
#[derive(Debug, Clone)]
pub struct PriceResolver {
    rules: Vec<PricingRule>,
}

impl PriceResolver {
    /// Builds a resolver over a rule catalog.
    ///
    /// ## Errors
    /// [`CoreError::EmptyPricingCatalog`] when `rules` is empty. An
    /// empty catalog is a deployment mistake and must fail at startup,
    /// not at the first order.
    pub fn new(rules: Vec<PricingRule>) -> CoreResult<Self> {
        if rules.is_empty() {
            return Err(CoreError::EmptyPricingCatalog);
        }
        Ok(Self { rules })
    }

    /// Picks the first rule that claims the order, falling back to the
    /// last rule in the catalog when none does.
    pub fn resolve(&self, order: &Order) -> &PricingRule {
        match self.rules.iter().find(|rule| rule.supports(order)) {
            Some(rule) => rule,
            // Catalog is non-empty by construction.
            None => &self.rules[self.rules.len() - 1],
        }
    }

    /// Quotes the order and emits the winning rule's diagnostic line.
    pub fn price(&self, order: &Order, sink: &mut dyn DiagnosticSink) -> f64 {
        let rule = self.resolve(order);
        let price = rule.calculate(order);
        sink.emit(rule.debug_message(price));
        price
    }
}

/// Built-in catalog in evaluation order.
///
/// The always-matching [`PricingRule::Unknown`] entry must stay last;
/// anything after it would be unreachable.
pub fn default_pricing_rules(table: &PriceTable) -> Vec<PricingRule> {
    vec![
        PricingRule::Diesel {
            unit_price: table.diesel,
        },
        PricingRule::Gasoline {
            unit_price: table.gasoline,
            bonus_threshold: GASOLINE_BONUS_THRESHOLD,
            bonus_value: GASOLINE_BONUS_VALUE,
        },
        PricingRule::Ethanol {
            unit_price: table.ethanol,
        },
        PricingRule::Lubricant {
            unit_price: table.lubricant,
        },
        PricingRule::Unknown,
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticBuffer;

    fn order(product: &str, quantity: f64) -> Order {
        Order::new("Teste", product, quantity, None)
    }

    fn resolver() -> PriceResolver {
        PriceResolver::new(default_pricing_rules(&PriceTable::default())).unwrap()
    }

    #[test]
    fn test_diesel_base_tier() {
        let mut sink = DiagnosticBuffer::new();
        let price = resolver().price(&order("diesel", 100.0), &mut sink);
        assert_eq!(price, 399.0);
    }

    #[test]
    fn test_diesel_mid_tier_strictly_above_500() {
        let mut sink = DiagnosticBuffer::new();
        let resolver = resolver();

        // 500 exactly stays in the base tier.
        assert_eq!(resolver.price(&order("diesel", 500.0), &mut sink), 500.0 * 3.99);
        assert_eq!(
            resolver.price(&order("diesel", 501.0), &mut sink),
            501.0 * 3.99 * 0.95
        );
        // 1000 exactly stays in the mid tier.
        assert_eq!(
            resolver.price(&order("diesel", 1000.0), &mut sink),
            1000.0 * 3.99 * 0.95
        );
    }

    #[test]
    fn test_diesel_top_tier_strictly_above_1000() {
        let mut sink = DiagnosticBuffer::new();
        let price = resolver().price(&order("diesel", 1200.0), &mut sink);
        assert_eq!(price, 1200.0 * 3.99 * 0.9);
    }

    #[test]
    fn test_gasoline_flat_bonus_strictly_above_threshold() {
        let mut sink = DiagnosticBuffer::new();
        let resolver = resolver();

        assert_eq!(resolver.price(&order("gasolina", 200.0), &mut sink), 1038.0);
        assert_eq!(
            resolver.price(&order("gasolina", 201.0), &mut sink),
            201.0 * 5.19 - 100.0
        );
        assert_eq!(
            resolver.price(&order("gasolina", 300.0), &mut sink),
            300.0 * 5.19 - 100.0
        );
    }

    #[test]
    fn test_ethanol_bulk_multiplier_strictly_above_80() {
        let mut sink = DiagnosticBuffer::new();
        let resolver = resolver();

        assert_eq!(resolver.price(&order("etanol", 50.0), &mut sink), 179.5);
        assert_eq!(resolver.price(&order("etanol", 80.0), &mut sink), 80.0 * 3.59);
        assert_eq!(
            resolver.price(&order("etanol", 81.0), &mut sink),
            81.0 * 3.59 * 0.97
        );
    }

    #[test]
    fn test_lubricant_stays_linear() {
        let mut sink = DiagnosticBuffer::new();
        let price = resolver().price(&order("lubrificante", 12.0), &mut sink);
        assert_eq!(price, 300.0);
    }

    #[test]
    fn test_unknown_product_quotes_zero_with_message() {
        let mut sink = DiagnosticBuffer::new();
        let price = resolver().price(&order("querosene", 999.0), &mut sink);

        assert_eq!(price, 0.0);
        assert!(sink.contains("tipo desconhecido, devolvendo 0"));
    }

    #[test]
    fn test_product_match_is_case_sensitive() {
        // "Diesel" is not "diesel"; only the fallback claims it.
        let mut sink = DiagnosticBuffer::new();
        let price = resolver().price(&order("Diesel", 100.0), &mut sink);

        assert_eq!(price, 0.0);
        assert!(sink.contains("tipo desconhecido"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let catalog = vec![
            PricingRule::Diesel { unit_price: 1.0 },
            PricingRule::Diesel { unit_price: 999.0 },
        ];
        let resolver = PriceResolver::new(catalog).unwrap();

        let mut sink = DiagnosticBuffer::new();
        assert_eq!(resolver.price(&order("diesel", 10.0), &mut sink), 10.0);
    }

    #[test]
    fn test_falls_back_to_last_rule_when_none_match() {
        let catalog = vec![
            PricingRule::Diesel { unit_price: 1.0 },
            PricingRule::Lubricant { unit_price: 2.0 },
        ];
        let resolver = PriceResolver::new(catalog).unwrap();

        let mut sink = DiagnosticBuffer::new();
        let price = resolver.price(&order("gasolina", 3.0), &mut sink);

        assert_eq!(price, 6.0);
        assert_eq!(sink.messages(), ["calc lub 6"]);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(matches!(
            PriceResolver::new(Vec::new()),
            Err(CoreError::EmptyPricingCatalog)
        ));
    }

    #[test]
    fn test_diagnostic_line_carries_the_quoted_price() {
        let mut sink = DiagnosticBuffer::new();
        resolver().price(&order("diesel", 100.0), &mut sink);
        assert_eq!(sink.messages(), ["calc diesel 399"]);
    }
}
