use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};

/// Converts a JSON number into an exact decimal, going through its shortest
/// textual form so `2.5` stays `2.5` instead of its binary expansion.
pub fn to_decimal(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

pub fn to_number(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
