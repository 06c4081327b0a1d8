//! # Entry Units
//!
//! The keypad has two length fields, each with its own unit selector:
//!
//! - the blue field takes large units: feet, yards, miles ([`FootUnit`])
//! - the green field takes small units: inches and metric ([`InchUnit`])
//!
//! Everything is converted to inches, the canonical unit of a DIMENSION.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::units::{FootUnit, InchUnit};
//!
//! let yards: FootUnit = "yd".parse().unwrap();
//! assert_eq!(yards.inches_per_unit(), 36.0);
//! assert_eq!(InchUnit::Cm.to_inches(2.54), 2.54 * 0.393700787);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Units for the blue (large unit) field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FootUnit {
    #[default]
    Ft,
    Yd,
    Mi,
}

impl FootUnit {
    pub fn inches_per_unit(&self) -> f64 {
        match self {
            FootUnit::Ft => INCHES_PER_FOOT,
            FootUnit::Yd => 36.0,
            FootUnit::Mi => 63360.0,
        }
    }

    pub fn to_inches(&self, amount: f64) -> f64 {
        amount * self.inches_per_unit()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FootUnit::Ft => "FT",
            FootUnit::Yd => "YD",
            FootUnit::Mi => "MI",
        }
    }
}

/// Units for the green (small unit) field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InchUnit {
    #[default]
    In,
    M,
    Cm,
    Mm,
}

impl InchUnit {
    pub fn inches_per_unit(&self) -> f64 {
        match self {
            InchUnit::In => 1.0,
            InchUnit::M => 39.3700787,
            InchUnit::Cm => 0.393700787,
            InchUnit::Mm => 0.0393700787,
        }
    }

    pub fn to_inches(&self, amount: f64) -> f64 {
        amount * self.inches_per_unit()
    }

    pub fn label(&self) -> &'static str {
        match self {
            InchUnit::In => "IN",
            InchUnit::M => "M",
            InchUnit::Cm => "CM",
            InchUnit::Mm => "MM",
        }
    }
}

impl fmt::Display for FootUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for InchUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FootUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ft" | "'" => Ok(FootUnit::Ft),
            "yd" => Ok(FootUnit::Yd),
            "mi" => Ok(FootUnit::Mi),
            _ => Err(CalcError::unknown_token(s, "expected FT, YD or MI")),
        }
    }
}

impl FromStr for InchUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "\"" => Ok(InchUnit::In),
            "m" => Ok(InchUnit::M),
            "cm" => Ok(InchUnit::Cm),
            "mm" => Ok(InchUnit::Mm),
            _ => Err(CalcError::unknown_token(s, "expected IN, M, CM or MM")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_units() {
        assert_eq!(FootUnit::Ft.to_inches(10.0), 120.0);
        assert_eq!(FootUnit::Yd.to_inches(2.0), 72.0);
        assert_eq!(FootUnit::Mi.to_inches(1.0), 63360.0);
    }

    #[test]
    fn test_small_units() {
        assert_eq!(InchUnit::In.to_inches(7.0), 7.0);
        assert!((InchUnit::M.to_inches(1.0) - 39.37).abs() < 0.001);
        assert!((InchUnit::Mm.to_inches(25.4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("FT".parse::<FootUnit>().unwrap(), FootUnit::Ft);
        assert_eq!("'".parse::<FootUnit>().unwrap(), FootUnit::Ft);
        assert_eq!("cm".parse::<InchUnit>().unwrap(), InchUnit::Cm);
        assert!("km".parse::<InchUnit>().is_err());
        assert!("in".parse::<FootUnit>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&InchUnit::Mm).unwrap();
        assert_eq!(json, "\"MM\"");

        let roundtrip: FootUnit = serde_json::from_str("\"YD\"").unwrap();
        assert_eq!(roundtrip, FootUnit::Yd);
    }
}
