//! # Calculator Session
//!
//! [`Calculator`] wires one [`Entry`] to one [`Accumulator`] and maps every
//! [`Key`] to exactly one synchronous state change. The caller owns the
//! session; nothing here is global.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::calculator::Calculator;
//! use culp_core::keys::parse_keys;
//!
//! let mut calc = Calculator::default();
//! calc.press_all(parse_keys("12ft + 1ft =")?)?;
//!
//! let readout = calc.readout();
//! assert_eq!(readout.total, "13' 0\"");
//! assert_eq!(readout.entry, "13' 0\"");
//! assert_eq!(readout.pending, None);
//! # Ok::<(), culp_core::errors::CalcError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accumulator::{Accumulator, AccumulatorState};
use crate::display::{DisplayFormat, EMPTY_READOUT};
use crate::entry::{Entry, Mode};
use crate::errors::CalcResult;
use crate::keys::Key;
use crate::settings::Settings;
use crate::value::Value;

/// Everything the display shows, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Main display, the value being entered
    pub entry: String,
    /// Running total, `0' 0"` until something is committed
    pub total: String,
    /// Symbol of the pending operator
    pub pending: Option<String>,
    pub state: AccumulatorState,
    pub mode: Mode,
}

/// One interactive calculator session.
#[derive(Debug, Clone)]
pub struct Calculator {
    entry: Entry,
    accumulator: Accumulator,
    format: DisplayFormat,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(&Settings::default())
    }
}

impl Calculator {
    pub fn new(settings: &Settings) -> Self {
        Calculator {
            entry: Entry::with_units(settings.default_foot_unit, settings.default_inch_unit),
            accumulator: Accumulator::new(),
            format: settings.display.clone(),
        }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// The value currently described by the entry fields
    pub fn entry_value(&self) -> Value {
        self.entry.value()
    }

    /// Apply one key press.
    pub fn press(&mut self, key: Key) -> CalcResult<()> {
        debug!(?key, "press");
        match key {
            Key::Digit(field, digit) => self.entry.append_digit(field, digit)?,
            Key::Backspace(field) => self.entry.backspace(field),
            Key::DecimalPoint => self.entry.decimal_point(),
            Key::Fraction(inches) => self.entry.add_fraction(inches)?,
            Key::FootUnit(unit) => self.entry.set_foot_unit(unit),
            Key::InchUnit(unit) => self.entry.set_inch_unit(unit),
            Key::Operator(op) => {
                self.accumulator.commit(op, self.entry.value());
                self.entry.clear();
            }
            Key::Equals => {
                if let Some(total) = self.accumulator.equals(self.entry.value()) {
                    self.entry.reseed(&total, &self.format);
                }
            }
            Key::Clear => self.entry.clear(),
            Key::AllClear => {
                self.entry.all_clear();
                self.accumulator.reset();
            }
        }
        Ok(())
    }

    /// Apply a sequence of key presses, stopping at the first error.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> CalcResult<()> {
        for key in keys {
            self.press(key)?;
        }
        Ok(())
    }

    pub fn readout(&self) -> Readout {
        let total = if self.accumulator.started() {
            self.format.display_value(&self.accumulator.total())
        } else {
            EMPTY_READOUT.to_string()
        };
        Readout {
            entry: self.format.display_value(&self.entry.value()),
            total,
            pending: self.accumulator.pending().map(|op| op.symbol().to_string()),
            state: self.accumulator.state(),
            mode: self.entry.mode(),
        }
    }
}
