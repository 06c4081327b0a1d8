//! # Values and Operators
//!
//! Every entry and every running total is a [`Value`]: a scalar, a length in
//! inches, or an area in square inches. The kind fixes the unit, so a value
//! never mixes units. A `NaN` (or infinite) payload is how an invalid
//! operation is represented; it is never an error return.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::value::{Operator, Value, ValueKind};
//!
//! let board = Value::dimension(150.0);
//! assert_eq!(board.kind(), ValueKind::Dimension);
//!
//! let op: Operator = "×d".parse().unwrap();
//! assert_eq!(op, Operator::MulDim);
//!
//! let json = serde_json::to_string(&board).unwrap();
//! assert_eq!(json, r#"{"kind":"DIMENSION","inches":150.0}"#);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// A tagged calculator value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum Value {
    /// Dimensionless scalar
    Number { n: f64 },
    /// Length, canonical unit inches. May be negative.
    Dimension { inches: f64 },
    /// Square inches. Only produced by dimension-style multiply.
    Area { in2: f64 },
}

impl Value {
    pub fn number(n: f64) -> Self {
        Value::Number { n }
    }

    pub fn dimension(inches: f64) -> Self {
        Value::Dimension { inches }
    }

    pub fn area(in2: f64) -> Self {
        Value::Area { in2 }
    }

    /// The invalid-operation sentinel, `NUMBER{NaN}`.
    pub fn invalid() -> Self {
        Value::Number { n: f64::NAN }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Number { .. } => ValueKind::Number,
            Value::Dimension { .. } => ValueKind::Dimension,
            Value::Area { .. } => ValueKind::Area,
        }
    }

    /// Raw payload with the unit tag stripped (n, inches or in2).
    pub fn magnitude(&self) -> f64 {
        match *self {
            Value::Number { n } => n,
            Value::Dimension { inches } => inches,
            Value::Area { in2 } => in2,
        }
    }

    /// False once an invalid operation has poisoned the payload.
    pub fn is_finite(&self) -> bool {
        self.magnitude().is_finite()
    }
}

impl Default for Value {
    /// Zero length, the reading of a freshly cleared calculator.
    fn default() -> Self {
        Value::Dimension { inches: 0.0 }
    }
}

/// Value kind without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueKind {
    Number,
    Dimension,
    Area,
}

impl ValueKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ValueKind::Number => "NUMBER",
            ValueKind::Dimension => "DIMENSION",
            ValueKind::Area => "AREA",
        }
    }
}

/// Calculator operators.
///
/// `MulNum`/`DivNum` are the plain "×, ÷" keys; `MulDim`/`DivDim` are the
/// dimension-aware "×d, ÷d" keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "×")]
    MulNum,
    #[serde(rename = "÷")]
    DivNum,
    #[serde(rename = "×d")]
    MulDim,
    #[serde(rename = "÷d")]
    DivDim,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::MulNum,
        Operator::DivNum,
        Operator::MulDim,
        Operator::DivDim,
    ];

    /// Key label as printed on the keypad
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::MulNum => "×",
            Operator::DivNum => "÷",
            Operator::MulDim => "×d",
            Operator::DivDim => "÷d",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts keypad symbols plus ASCII spellings (`x`, `*`, `/`, `xd`, `/d`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "×" | "x" | "*" => Ok(Operator::MulNum),
            "÷" | "/" => Ok(Operator::DivNum),
            "×d" | "xd" | "*d" => Ok(Operator::MulDim),
            "÷d" | "/d" => Ok(Operator::DivDim),
            _ => Err(CalcError::unknown_token(s, "not an operator")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_strips_unit() {
        assert_eq!(Value::number(3.0).magnitude(), 3.0);
        assert_eq!(Value::dimension(-6.0).magnitude(), -6.0);
        assert_eq!(Value::area(40.0).magnitude(), 40.0);
    }

    #[test]
    fn test_invalid_is_not_finite() {
        let v = Value::invalid();
        assert_eq!(v.kind(), ValueKind::Number);
        assert!(!v.is_finite());
        assert!(!Value::dimension(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_value_serialization() {
        let json = serde_json::to_string(&Value::area(40.0)).unwrap();
        assert_eq!(json, r#"{"kind":"AREA","in2":40.0}"#);

        let v: Value = serde_json::from_str(r#"{"kind":"NUMBER","n":2.5}"#).unwrap();
        assert_eq!(v, Value::number(2.5));
    }

    #[test]
    fn test_operator_parsing() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        assert_eq!("/d".parse::<Operator>().unwrap(), Operator::DivDim);
        assert_eq!("*".parse::<Operator>().unwrap(), Operator::MulNum);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_serialization() {
        let json = serde_json::to_string(&Operator::DivDim).unwrap();
        assert_eq!(json, "\"÷d\"");
    }
}
