//! # Fraction Rounding
//!
//! Snaps a sub-inch remainder to the nearest 1/16 (or any other
//! denominator) and reduces it to lowest terms. A remainder that rounds up
//! to a full unit carries into the whole part, so `num == denom` never
//! escapes.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::fraction::{round_to_nearest_fraction, Fraction};
//!
//! let r = round_to_nearest_fraction(6.375, 16);
//! assert_eq!(r, Fraction { whole: 6, num: 3, denom: 8 });
//! assert_eq!(r.to_string(), "6 3/8");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default rounding denominator (sixteenths of an inch)
pub const DEFAULT_DENOMINATOR: u32 = 16;

/// Fractions available on the keypad rail, as `(label, inches)`.
pub const FRACTION_KEYS: [(&str, f64); 11] = [
    ("1/8", 1.0 / 8.0),
    ("1/4", 1.0 / 4.0),
    ("3/8", 3.0 / 8.0),
    ("1/2", 1.0 / 2.0),
    ("5/8", 5.0 / 8.0),
    ("3/4", 3.0 / 4.0),
    ("7/8", 7.0 / 8.0),
    ("1/16", 1.0 / 16.0),
    ("3/16", 3.0 / 16.0),
    ("5/16", 5.0 / 16.0),
    ("7/16", 7.0 / 16.0),
];

/// Look up a rail fraction by its label (e.g. `"3/8"`).
pub fn fraction_key(label: &str) -> Option<f64> {
    FRACTION_KEYS
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, v)| *v)
}

/// Rounded mixed number `whole + num/denom`.
///
/// Invariant: `num < denom`, and `num/denom` is in lowest terms unless
/// `num == 0` (then `denom` is the requested denominator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub whole: i64,
    pub num: u32,
    pub denom: u32,
}

impl Fraction {
    /// Reconstruct the decimal value
    pub fn to_f64(&self) -> f64 {
        self.whole as f64 + self.num as f64 / self.denom as f64
    }

    /// True when there is no fractional part
    pub fn is_whole(&self) -> bool {
        self.num == 0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole)
        } else {
            write!(f, "{} {}/{}", self.whole, self.num, self.denom)
        }
    }
}

/// Greatest common divisor. Never returns 0: `gcd(0, 0)` is 1.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut x, mut y) = (a, b);
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    if x == 0 {
        1
    } else {
        x
    }
}

/// Round `inches` to the nearest `1/denom`.
///
/// `whole` is the floor of `inches`, so negative inputs produce a negative
/// whole part with a positive fraction (`-0.25` → `-1 3/4`). Display code
/// takes the absolute value first. A `denom` of 0 is treated as 1.
/// Beyond the `i64` range `whole` saturates.
pub fn round_to_nearest_fraction(inches: f64, denom: u32) -> Fraction {
    let denom = denom.max(1);
    let whole = inches.floor();
    let frac = inches - whole;
    let num = (frac * denom as f64).round() as u32;
    let whole = whole as i64;

    if num == 0 {
        return Fraction { whole, num: 0, denom };
    }
    if num >= denom {
        return Fraction {
            whole: whole.saturating_add(1),
            num: 0,
            denom,
        };
    }
    let g = gcd(num, denom);
    Fraction {
        whole,
        num: num / g,
        denom: denom / g,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_stays_within_half_step(x in -10_000.0_f64..10_000.0) {
            let r = round_to_nearest_fraction(x, 16);
            prop_assert!((r.to_f64() - x).abs() <= 1.0 / 32.0 + 1e-9);
        }

        #[test]
        fn rounding_is_lowest_terms(x in -10_000.0_f64..10_000.0) {
            let r = round_to_nearest_fraction(x, 16);
            prop_assert!(r.num < r.denom);
            if r.num != 0 {
                prop_assert_eq!(gcd(r.num, r.denom), 1);
            }
        }

        #[test]
        fn rounding_is_idempotent(x in -10_000.0_f64..10_000.0) {
            let r = round_to_nearest_fraction(x, 16);
            let again = round_to_nearest_fraction(r.to_f64(), 16);
            prop_assert_eq!(again, r);
        }
    }
}
