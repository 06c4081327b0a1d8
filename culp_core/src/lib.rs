//! # culp_core - Feet-Inch-Fraction Calculator Engine
//!
//! `culp_core` is the computational heart of the Culp carpentry calculator.
//! It combines lengths, plain numbers and areas, and renders results as
//! feet/inches rounded to the nearest 1/16".
//!
//! ## Design Philosophy
//!
//! - **Never throws**: invalid arithmetic is a NaN payload, displayed as `ERR`
//! - **Explicit state**: the running total lives in an [`Accumulator`] owned by the caller
//! - **JSON-First**: values, readouts and settings implement Serialize/Deserialize
//! - **f64 throughout**: IEEE-754 double semantics are authoritative
//!
//! ## Quick Start
//!
//! ```rust
//! use culp_core::{apply_operator, display_value, Operator, Value};
//!
//! let total = apply_operator(Value::dimension(144.0), Value::dimension(6.375), Operator::Add);
//! assert_eq!(display_value(&total), "12' 6 3/8\"");
//! ```
//!
//! ## Modules
//!
//! - [`value`] - Tagged values and operators
//! - [`algebra`] - Operator application across value kinds
//! - [`fraction`] - Nearest-fraction rounding
//! - [`display`] - Readout formatting
//! - [`accumulator`] - Running total state machine
//! - [`units`] - Entry units and their inch multipliers
//! - [`entry`] - Keypad entry fields
//! - [`keys`] - Key presses and the text key tokenizer
//! - [`calculator`] - A complete calculator session
//! - [`settings`] - Settings file with atomic saves
//! - [`errors`] - Structured error types

pub mod accumulator;
pub mod algebra;
pub mod calculator;
pub mod display;
pub mod entry;
pub mod errors;
pub mod fraction;
pub mod keys;
pub mod settings;
pub mod units;
pub mod value;

// Re-export commonly used types at crate root for convenience
pub use accumulator::{Accumulator, AccumulatorState};
pub use algebra::apply_operator;
pub use calculator::{Calculator, Readout};
pub use display::{display_value, DisplayFormat};
pub use errors::{CalcError, CalcResult};
pub use fraction::{round_to_nearest_fraction, Fraction};
pub use settings::{load_settings, save_settings, Settings};
pub use value::{Operator, Value, ValueKind};
