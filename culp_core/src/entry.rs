//! # Entry Layer
//!
//! Keypad-side editing state that turns key presses into one [`Value`].
//! The accumulator never looks inside an `Entry`; it only receives
//! [`Entry::value`].
//!
//! In DIMENSION mode the value is
//! `feet_field * foot_unit + inch_field * inch_unit + fraction`, in NUMBER
//! mode it is the parsed number field. Fields are kept as the strings the
//! user typed so that backspace works digit by digit.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::entry::{Entry, Field};
//! use culp_core::value::Value;
//!
//! let mut entry = Entry::new();
//! entry.append_digit(Field::Feet, 1)?;
//! entry.append_digit(Field::Feet, 2)?;
//! entry.append_digit(Field::Inches, 6)?;
//! entry.add_fraction(0.375)?;
//! assert_eq!(entry.value(), Value::dimension(150.375));
//! # Ok::<(), culp_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::display::DisplayFormat;
use crate::errors::{CalcError, CalcResult};
use crate::units::{FootUnit, InchUnit};
use crate::value::Value;

/// Which readout the entry is producing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Dimension,
    Number,
}

/// Editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Blue field, large units
    Feet,
    /// Green field, small units
    Inches,
    /// Plain number field
    Number,
}

/// Entry fields for one calculator session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    mode: Mode,
    feet: String,
    foot_unit: FootUnit,
    inches: String,
    inch_unit: InchUnit,
    /// Fraction of an inch from the rail, always in `[0, 1)`
    fraction: f64,
    number: String,
    has_dot: bool,
    /// Set when a negative dimension result is re-seeded into the fields
    negative: bool,
    default_foot_unit: FootUnit,
    default_inch_unit: InchUnit,
}

impl Default for Entry {
    fn default() -> Self {
        Entry::with_units(FootUnit::default(), InchUnit::default())
    }
}

impl Entry {
    pub fn new() -> Self {
        Entry::default()
    }

    /// Entry whose fields start in (and all-clear back to) the given units.
    pub fn with_units(foot_unit: FootUnit, inch_unit: InchUnit) -> Self {
        Entry {
            mode: Mode::Dimension,
            feet: "0".to_string(),
            foot_unit,
            inches: "0".to_string(),
            inch_unit,
            fraction: 0.0,
            number: "0".to_string(),
            has_dot: false,
            negative: false,
            default_foot_unit: foot_unit,
            default_inch_unit: inch_unit,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Feet => &self.feet,
            Field::Inches => &self.inches,
            Field::Number => &self.number,
        }
    }

    pub fn foot_unit(&self) -> FootUnit {
        self.foot_unit
    }

    pub fn inch_unit(&self) -> InchUnit {
        self.inch_unit
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The value the current fields describe.
    pub fn value(&self) -> Value {
        match self.mode {
            Mode::Number => Value::number(self.number.parse::<f64>().unwrap_or(f64::NAN)),
            Mode::Dimension => {
                let inches = self.foot_unit.to_inches(parse_or_zero(&self.feet))
                    + self.inch_unit.to_inches(parse_or_zero(&self.inches))
                    + self.fraction;
                Value::dimension(if self.negative { -inches } else { inches })
            }
        }
    }

    /// Type one digit into a field. A field reading "0" is replaced.
    pub fn append_digit(&mut self, field: Field, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::invalid_input(
                "digit",
                digit.to_string(),
                "Only digits 0-9 can be typed",
            ));
        }
        self.mode = match field {
            Field::Number => Mode::Number,
            Field::Feet | Field::Inches => Mode::Dimension,
        };
        let text = self.field_mut(field);
        if text.as_str() == "0" {
            text.clear();
        }
        text.push(char::from(b'0' + digit));
        trace!(?field, text = %self.field(field), "digit");
        Ok(())
    }

    /// Remove the last character of a field; a single character becomes "0".
    pub fn backspace(&mut self, field: Field) {
        let text = self.field_mut(field);
        if text.chars().count() <= 1 {
            *text = "0".to_string();
        } else {
            text.pop();
        }
        if field == Field::Number {
            self.has_dot = self.number.contains('.');
        }
        trace!(?field, text = %self.field(field), "backspace");
    }

    /// Switch to NUMBER mode and add a decimal point, at most once.
    pub fn decimal_point(&mut self) {
        self.mode = Mode::Number;
        if self.has_dot {
            return;
        }
        self.has_dot = true;
        self.number.push('.');
    }

    /// Add a rail fraction (in inches) to the fraction of the entry.
    ///
    /// Once the fraction reaches a whole inch, the whole part is carried
    /// into the inch field, which is forced to inches.
    pub fn add_fraction(&mut self, inches: f64) -> CalcResult<()> {
        if !(inches > 0.0 && inches < 1.0) {
            return Err(CalcError::invalid_input(
                "fraction",
                inches.to_string(),
                "Fraction must be between 0 and 1 inch",
            ));
        }
        self.mode = Mode::Dimension;
        let total = self.fraction + inches;
        if total < 1.0 {
            self.fraction = total;
        } else {
            let carry = total.floor();
            self.inch_unit = InchUnit::In;
            self.inches = format!("{:.0}", leading_number(&self.inches) + carry);
            self.fraction = total - carry;
        }
        trace!(fraction = self.fraction, inches = %self.inches, "fraction");
        Ok(())
    }

    pub fn set_foot_unit(&mut self, unit: FootUnit) {
        self.foot_unit = unit;
    }

    pub fn set_inch_unit(&mut self, unit: InchUnit) {
        self.inch_unit = unit;
    }

    /// "C": reset the fields of the current mode only.
    pub fn clear(&mut self) {
        match self.mode {
            Mode::Number => {
                self.number = "0".to_string();
                self.has_dot = false;
            }
            Mode::Dimension => {
                self.feet = "0".to_string();
                self.inches = "0".to_string();
                self.fraction = 0.0;
                self.negative = false;
            }
        }
    }

    /// "AC": every field back to zero, default units, DIMENSION mode.
    pub fn all_clear(&mut self) {
        *self = Entry::with_units(self.default_foot_unit, self.default_inch_unit);
    }

    /// Load a result into the fields after `=`.
    ///
    /// A finite DIMENSION is split into feet/inches/fraction; anything else
    /// goes to the number field, where an error token re-parses as NaN.
    pub fn reseed(&mut self, result: &Value, format: &DisplayFormat) {
        match *result {
            Value::Dimension { inches } if inches.is_finite() => {
                let parts = format.decompose(inches);
                self.mode = Mode::Dimension;
                self.feet = parts.feet_digits();
                self.foot_unit = FootUnit::Ft;
                self.inches = parts.inches.to_string();
                self.inch_unit = InchUnit::In;
                self.fraction = parts.fraction_inches();
                self.negative = parts.negative;
            }
            _ => {
                self.mode = Mode::Number;
                self.number = format.format_number(result.magnitude());
                self.has_dot = self.number.contains('.');
            }
        }
        trace!(mode = ?self.mode, "reseed");
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Feet => &mut self.feet,
            Field::Inches => &mut self.inches,
            Field::Number => &mut self.number,
        }
    }
}

fn parse_or_zero(text: &str) -> f64 {
    text.parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

/// Whole number formed by the leading digits of `text` (0 if none).
/// Kept in f64 so a field of any length keeps its magnitude.
fn leading_number(text: &str) -> f64 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0.0)
}
