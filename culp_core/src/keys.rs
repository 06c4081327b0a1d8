//! # Keys
//!
//! A [`Key`] is one press on the keypad. [`parse_keys`] turns a line of
//! text into key presses so the calculator can be driven from a terminal:
//!
//! | word               | keys                                          |
//! |--------------------|-----------------------------------------------|
//! | `12ft` `12'` `2yd` | unit select, then digits on the blue pad      |
//! | `6in` `6"` `30cm`  | unit select, then digits on the green pad     |
//! | `3/8`              | fraction rail key                             |
//! | `2.5`              | digits and decimal point on the number field  |
//! | `ft` `cm` ...      | unit select only                              |
//! | `+ - x / xd /d`    | operators (`× ÷ ×d ÷d` and `*` also accepted) |
//! | `=` `c` `ac`       | equals, clear entry, all clear                |
//! | `<ft` `<in` `<num` | backspace on a field                          |
//!
//! Words are key presses, not literals: digits append to whatever the field
//! already holds, exactly as on the keypad.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::entry::Field;
//! use culp_core::keys::{parse_keys, Key};
//! use culp_core::units::FootUnit;
//! use culp_core::value::Operator;
//!
//! let keys = parse_keys("12ft +")?;
//! assert_eq!(
//!     keys,
//!     vec![
//!         Key::FootUnit(FootUnit::Ft),
//!         Key::Digit(Field::Feet, 1),
//!         Key::Digit(Field::Feet, 2),
//!         Key::Operator(Operator::Add),
//!     ]
//! );
//! # Ok::<(), culp_core::errors::CalcError>(())
//! ```

use crate::entry::Field;
use crate::errors::{CalcError, CalcResult};
use crate::fraction::fraction_key;
use crate::units::{FootUnit, InchUnit};
use crate::value::Operator;

/// A single keypad press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Digit(Field, u8),
    Backspace(Field),
    DecimalPoint,
    /// Fraction rail key, value in inches
    Fraction(f64),
    FootUnit(FootUnit),
    InchUnit(InchUnit),
    Operator(Operator),
    Equals,
    /// "C"
    Clear,
    /// "AC"
    AllClear,
}

/// Tokenize a whitespace-separated line into key presses.
pub fn parse_keys(text: &str) -> CalcResult<Vec<Key>> {
    let mut keys = Vec::new();
    for word in text.split_whitespace() {
        parse_word(word, &mut keys)?;
    }
    Ok(keys)
}

fn parse_word(word: &str, keys: &mut Vec<Key>) -> CalcResult<()> {
    let lower = word.to_lowercase();
    match lower.as_str() {
        "=" => keys.push(Key::Equals),
        "c" => keys.push(Key::Clear),
        "ac" => keys.push(Key::AllClear),
        "<ft" => keys.push(Key::Backspace(Field::Feet)),
        "<in" => keys.push(Key::Backspace(Field::Inches)),
        "<num" => keys.push(Key::Backspace(Field::Number)),
        _ => return parse_compound(word, &lower, keys),
    }
    Ok(())
}

fn parse_compound(word: &str, lower: &str, keys: &mut Vec<Key>) -> CalcResult<()> {
    if let Ok(op) = lower.parse::<Operator>() {
        keys.push(Key::Operator(op));
        return Ok(());
    }

    if lower.contains('/') && lower.starts_with(|c: char| c.is_ascii_digit()) {
        let inches = fraction_key(lower)
            .ok_or_else(|| CalcError::unknown_token(word, "not a key on the fraction rail"))?;
        keys.push(Key::Fraction(inches));
        return Ok(());
    }

    let split = lower
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(lower.len());
    let (digits, suffix) = lower.split_at(split);

    if digits.is_empty() {
        if let Ok(unit) = suffix.parse::<FootUnit>() {
            keys.push(Key::FootUnit(unit));
        } else if let Ok(unit) = suffix.parse::<InchUnit>() {
            keys.push(Key::InchUnit(unit));
        } else {
            return Err(CalcError::unknown_token(word, "not a recognized key"));
        }
        return Ok(());
    }

    if suffix.is_empty() {
        for c in digits.chars() {
            keys.push(match c {
                '.' => Key::DecimalPoint,
                _ => Key::Digit(Field::Number, digit_of(c)),
            });
        }
        return Ok(());
    }

    let field = if let Ok(unit) = suffix.parse::<FootUnit>() {
        keys.push(Key::FootUnit(unit));
        Field::Feet
    } else if let Ok(unit) = suffix.parse::<InchUnit>() {
        keys.push(Key::InchUnit(unit));
        Field::Inches
    } else {
        return Err(CalcError::unknown_token(word, format!("unknown unit '{}'", suffix)));
    };

    if digits.contains('.') {
        return Err(CalcError::unknown_token(
            word,
            "length fields take whole numbers; use the fraction rail",
        ));
    }
    keys.extend(digits.chars().map(|c| Key::Digit(field, digit_of(c))));
    Ok(())
}

fn digit_of(c: char) -> u8 {
    c.to_digit(10).map(|d| d as u8).unwrap_or(0)
}
