//! # Product Rounding
//!
//! Final price presentation step, applied after discounts.
//!
//! ## Rules
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  product      rounding                                         │
//! │  ───────      ────────                                         │
//! │  diesel       nearest whole unit, ties away from zero          │
//! │  gasolina     nearest cent, ties away from zero                │
//! │  everything   truncated to the cent, toward zero               │
//! │  else                                                          │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use crate::{PRODUCT_DIESEL, PRODUCT_GASOLINE};

/// Rounds a final price according to the product's rule.
///
/// The default branch truncates: `10.679` becomes `10.67`, not
/// `10.68`.
pub fn round_for_product(product: &str, price: f64) -> f64 {
    match product {
        PRODUCT_DIESEL => price.round(),
        PRODUCT_GASOLINE => (price * 100.0).round() / 100.0,
        _ => (price * 100.0).trunc() / 100.0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diesel_rounds_to_whole_units() {
        assert_eq!(round_for_product("diesel", 101.7), 102.0);
        assert_eq!(round_for_product("diesel", 101.2), 101.0);
        assert_eq!(round_for_product("diesel", 399.0), 399.0);
    }

    #[test]
    fn test_diesel_ties_round_away_from_zero() {
        assert_eq!(round_for_product("diesel", 101.5), 102.0);
        assert_eq!(round_for_product("diesel", 100.5), 101.0);
    }

    #[test]
    fn test_gasoline_rounds_to_the_cent() {
        assert_eq!(round_for_product("gasolina", 7.1299), 7.13);
        assert_eq!(round_for_product("gasolina", 1457.0), 1457.0);
    }

    #[test]
    fn test_other_products_truncate_to_the_cent() {
        assert_eq!(round_for_product("etanol", 10.6789), 10.67);
        // Truncation, not rounding: .679 still drops to .67.
        assert_eq!(round_for_product("etanol", 10.679), 10.67);
        assert_eq!(round_for_product("lubrificante", 298.456), 298.45);
        assert_eq!(round_for_product("querosene", 1.999), 1.99);
    }

    #[test]
    fn test_truncation_moves_toward_zero() {
        assert_eq!(round_for_product("etanol", -1.239), -1.23);
    }
}
