use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

pub const PRICE_PLACES: u32 = 2;

/// Rounds half away from zero at `places` decimals: 2.005 -> 2.01, -2.005 -> -2.01.
///
/// Goes through the shortest decimal rendering of the float, so 2.005 is
/// treated as written rather than as its binary neighbour 2.00499....
pub fn round_half_away_from_zero(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(value),
        // out of Decimal range; f64::round already rounds half away from zero
        Err(_) => {
            let factor = 10f64.powi(places as i32);
            (value * factor).round() / factor
        }
    }
}

pub fn round_price(value: f64) -> f64 {
    round_half_away_from_zero(value, PRICE_PLACES)
}
