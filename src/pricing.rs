//! Price breakdown for at-home bookings
//!
//! All amounts are whole rupees. Tax is 18% of subtotal plus travel fee,
//! rounded half-up, computed in integer arithmetic so that results are exact
//! for every input.

use crate::cart::CartStore;
use crate::catalog::find_artist;
use crate::error::{Result, SalonTuiError};
use tracing::debug;

/// Tax rate applied to subtotal plus travel fee, in percent
pub const TAX_RATE_PERCENT: u64 = 18;

/// Derived price summary shown on the booking summary step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceBreakdown {
    /// Sum of service price times quantity
    pub subtotal: u64,
    /// Artist's flat travel fee
    pub travel_fee: u64,
    /// `round(0.18 * (subtotal + travel_fee))`
    pub tax: u64,
    /// `subtotal + travel_fee + tax`
    pub total: u64,
}

impl PriceBreakdown {
    /// Compute the breakdown for a subtotal and a travel fee.
    pub fn compute(subtotal: u64, travel_fee: u64) -> Self {
        let tax = tax_on(subtotal + travel_fee);
        Self {
            subtotal,
            travel_fee,
            tax,
            total: subtotal + travel_fee + tax,
        }
    }

    /// Compute the breakdown for the contents of a cart.
    pub fn for_cart(cart: &CartStore<'_>, travel_fee: u32) -> Self {
        Self::compute(cart.total(), u64::from(travel_fee))
    }
}

/// 18% of `base`, rounded half-up.
pub fn tax_on(base: u64) -> u64 {
    (base * TAX_RATE_PERCENT + 50) / 100
}

/// Amount still missing to reach a minimum booking, if any.
pub fn shortfall(total: u64, minimum: u32) -> Option<u64> {
    let minimum = u64::from(minimum);
    (total < minimum).then(|| minimum - total)
}

/// Format an amount as rupees, e.g. `₹1298`
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", amount)
}

/// Outcome of pricing a set of at-home services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quote {
    /// The cart meets the artist's minimum booking
    Ready {
        artist_name: &'static str,
        breakdown: PriceBreakdown,
    },
    /// The cart is below the minimum booking by `missing`
    BelowMinimum {
        artist_name: &'static str,
        total: u64,
        minimum: u32,
        missing: u64,
    },
}

/// Price `service_ids` (repeats add quantity) for the artist `artist_id`.
///
/// # Errors
///
/// `Validation` for an unknown artist or a service the artist does not offer.
pub fn quote<S: AsRef<str>>(artist_id: &str, service_ids: &[S]) -> Result<Quote> {
    let artist = find_artist(artist_id)
        .ok_or_else(|| SalonTuiError::validation(format!("Unknown artist '{}'", artist_id)))?;

    let mut cart = CartStore::new(artist.services);
    for id in service_ids {
        let id = id.as_ref();
        if artist.service(id).is_none() {
            return Err(SalonTuiError::validation(format!(
                "{} does not offer service '{}'",
                artist.name, id
            )));
        }
        cart.add(id);
    }
    debug!(artist = artist.id, total = cart.total(), "quote computed");

    Ok(match cart.shortfall(artist.minimum_booking) {
        Some(missing) => Quote::BelowMinimum {
            artist_name: artist.name,
            total: cart.total(),
            minimum: artist.minimum_booking,
            missing,
        },
        None => Quote::Ready {
            artist_name: artist.name,
            breakdown: PriceBreakdown::for_cart(&cart, artist.travel_fee),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_breakdown() {
        let b = PriceBreakdown::compute(1000, 100);
        assert_eq!(b.tax, 198);
        assert_eq!(b.total, 1298);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 25 * 0.18 = 4.5
        assert_eq!(tax_on(25), 5);
        // 24 * 0.18 = 4.32
        assert_eq!(tax_on(24), 4);
        // 36 * 0.18 = 6.48
        assert_eq!(tax_on(36), 6);
        assert_eq!(tax_on(0), 0);
    }

    #[test]
    fn test_zero_travel_fee() {
        let b = PriceBreakdown::compute(799, 0);
        assert_eq!(b.travel_fee, 0);
        // 799 * 0.18 = 143.82
        assert_eq!(b.tax, 144);
        assert_eq!(b.total, 943);
    }

    #[test]
    fn test_shortfall() {
        assert_eq!(shortfall(500, 999), Some(499));
        assert_eq!(shortfall(999, 999), None);
        assert_eq!(shortfall(1200, 999), None);
        assert_eq!(shortfall(0, 0), None);
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(1298), "₹1298");
    }

    #[test]
    fn test_quote_ready() {
        let q = quote("ah1", &["h3", "h4"]).unwrap();
        match q {
            Quote::Ready { breakdown, .. } => {
                assert_eq!(breakdown.subtotal, 2298);
                assert_eq!(breakdown.travel_fee, 149);
                assert_eq!(breakdown.tax, 440);
                assert_eq!(breakdown.total, 2887);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_quote_below_minimum() {
        let q = quote("ah1", &["h3"]).unwrap();
        assert_eq!(
            q,
            Quote::BelowMinimum {
                artist_name: "Nisha Kapoor",
                total: 799,
                minimum: 999,
                missing: 200,
            }
        );
    }

    #[test]
    fn test_quote_unknown_ids() {
        assert!(matches!(quote("zz", &["h3"]), Err(SalonTuiError::Validation(_))));
        assert!(matches!(quote("ah1", &["nope"]), Err(SalonTuiError::Validation(_))));
    }
}
