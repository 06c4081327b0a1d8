//! # Display Formatting
//!
//! Renders values for the calculator readout:
//!
//! - DIMENSION → `-12' 6 3/8"` (sign, feet, whole inches, reduced fraction)
//! - AREA → `40 in²`
//! - NUMBER → `2.5`
//!
//! Any non-finite payload renders as the error token (`ERR` by default).
//! Numbers whose plain rendering is longer than `max_number_len` characters
//! fall back to `fallback_precision` significant digits.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::display::{display_value, DisplayFormat};
//! use culp_core::value::Value;
//!
//! assert_eq!(display_value(&Value::dimension(150.0)), "12' 6\"");
//! assert_eq!(display_value(&Value::number(f64::NAN)), "ERR");
//!
//! let eighths = DisplayFormat { fraction_denominator: 8, ..DisplayFormat::default() };
//! assert_eq!(eighths.display_value(&Value::dimension(6.3)), "0' 6 1/4\"");
//! ```

use serde::{Deserialize, Serialize};

use crate::fraction::{round_to_nearest_fraction, Fraction, DEFAULT_DENOMINATOR};
use crate::value::Value;

/// Readout shown for the total before anything has been committed
pub const EMPTY_READOUT: &str = "0' 0\"";

/// Display options. The defaults reproduce the keypad readout exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Rounding denominator for the inch fraction (power of two)
    pub fraction_denominator: u32,

    /// Longest plain number rendering before switching to fixed precision
    pub max_number_len: usize,

    /// Significant digits used once a number exceeds `max_number_len`
    pub fallback_precision: usize,

    /// Shown in place of any non-finite value
    pub error_token: String,

    /// Appended to area readouts
    pub area_suffix: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        DisplayFormat {
            fraction_denominator: DEFAULT_DENOMINATOR,
            max_number_len: 12,
            fallback_precision: 10,
            error_token: "ERR".to_string(),
            area_suffix: " in²".to_string(),
        }
    }
}

/// A length broken into feet, whole inches and a rounded fraction.
///
/// Magnitudes only; the sign lives in `negative`. `inches` is always below
/// 12 because a fraction carry that reaches a full foot is folded back.
/// `feet` is a whole number kept as f64 so any finite length fits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInches {
    pub negative: bool,
    pub feet: f64,
    pub inches: u32,
    pub num: u32,
    pub denom: u32,
}

impl FeetInches {
    /// Feet as a digit string, no exponent (`1e21` feet → 22 digits)
    pub fn feet_digits(&self) -> String {
        format!("{:.0}", self.feet)
    }

    /// Fractional inches as a decimal (`3/8` → 0.375)
    pub fn fraction_inches(&self) -> f64 {
        if self.num == 0 {
            0.0
        } else {
            self.num as f64 / self.denom as f64
        }
    }
}

impl DisplayFormat {
    /// Render any value for the readout.
    pub fn display_value(&self, value: &Value) -> String {
        if !value.is_finite() {
            return self.error_token.clone();
        }
        match *value {
            Value::Dimension { inches } => self.inches_to_display(inches),
            Value::Area { in2 } => format!("{}{}", self.format_number(in2), self.area_suffix),
            Value::Number { n } => self.format_number(n),
        }
    }

    /// Split a signed inch count into feet, inches and fraction.
    pub fn decompose(&self, total_inches: f64) -> FeetInches {
        let negative = total_inches < 0.0;
        let abs = total_inches.abs();

        // fmod is exact, so the remainder stays in [0, 12) at any magnitude
        let remainder = abs % 12.0;
        let mut feet = ((abs - remainder) / 12.0).round();
        let Fraction { whole, num, denom } = round_to_nearest_fraction(remainder, self.fraction_denominator);

        let mut inches = whole.clamp(0, 12) as u32;
        if inches >= 12 {
            feet += 1.0;
            inches -= 12;
        }

        FeetInches {
            negative,
            feet,
            inches,
            num,
            denom,
        }
    }

    /// Format inches as `{sign}{feet}' {inch}[ num/denom]"`.
    pub fn inches_to_display(&self, total_inches: f64) -> String {
        if !total_inches.is_finite() {
            return self.error_token.clone();
        }
        let parts = self.decompose(total_inches);
        let sign = if parts.negative { "-" } else { "" };
        if parts.num == 0 {
            format!("{}{}' {}\"", sign, parts.feet_digits(), parts.inches)
        } else {
            format!(
                "{}{}' {} {}/{}\"",
                sign,
                parts.feet_digits(),
                parts.inches,
                parts.num,
                parts.denom
            )
        }
    }

    /// Plain numeric rendering, bounded in width.
    ///
    /// The plain form is Rust's shortest round-trip `Display`, which never
    /// uses an exponent: `1e-7` shows as `0.0000001`, and `1e21` is too wide
    /// so it goes through [`to_precision`] as `1.000000000e+21`.
    pub fn format_number(&self, n: f64) -> String {
        if !n.is_finite() {
            return self.error_token.clone();
        }
        // Avoid "-0"
        let n = if n == 0.0 { 0.0 } else { n };
        let plain = n.to_string();
        if plain.chars().count() <= self.max_number_len {
            return plain;
        }
        to_precision(n, self.fallback_precision)
    }
}

/// Render `n` with `precision` significant digits.
///
/// Uses positional notation when the decimal exponent is in `-6..precision`,
/// scientific notation (`1.234500000e+21`) otherwise.
pub fn to_precision(n: f64, precision: usize) -> String {
    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, n);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -6 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        format!("{:.*}", decimals, n)
    }
}

/// [`DisplayFormat::display_value`] with default options.
pub fn display_value(value: &Value) -> String {
    DisplayFormat::default().display_value(value)
}

/// [`DisplayFormat::inches_to_display`] with default options.
pub fn inches_to_display(total_inches: f64) -> String {
    DisplayFormat::default().inches_to_display(total_inches)
}

/// [`DisplayFormat::format_number`] with default options.
pub fn format_number(n: f64) -> String {
    DisplayFormat::default().format_number(n)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dimension_display_keeps_sign(x in -1.0e300_f64..1.0e300) {
            let shown = display_value(&Value::dimension(x));
            prop_assert_eq!(shown.starts_with('-'), x < 0.0);
            prop_assert!(shown.ends_with('"'));
        }

        #[test]
        fn dimension_inches_stay_below_a_foot(x in -1.0e300_f64..1.0e300) {
            let parts = DisplayFormat::default().decompose(x);
            prop_assert!(parts.inches < 12);
            prop_assert_eq!(parts.feet, parts.feet.trunc());
        }
    }
}
