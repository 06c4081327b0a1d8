//! # Accumulator Engine
//!
//! The running total of the calculator. It has three states:
//!
//! ```text
//!            commit(op)               commit(op')
//!   EMPTY ──────────────► ARMED ◄──────────────┐
//!     ▲                   │  │  fold total     │
//!     │ reset()   equals()│  └─────────────────┘
//!     │                   ▼
//!     └──────────────── HOLDING ── commit(op) ──► ARMED (total kept)
//! ```
//!
//! - **EMPTY**: no left operand yet.
//! - **HOLDING**: a total exists but no operator is pending (after `=`).
//! - **ARMED**: a total and a pending operator wait for the next entry.
//!
//! The engine owns no entry state. Callers pass the entry value produced by
//! the keypad into [`Accumulator::commit`] and [`Accumulator::equals`].
//! Invalid arithmetic lands in the total as a non-finite NUMBER and stays
//! there until [`Accumulator::reset`].
//!
//! One accumulator belongs to one calculator session. It is not meant to be
//! shared between threads without a lock around it.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::accumulator::{Accumulator, AccumulatorState};
//! use culp_core::display::display_value;
//! use culp_core::value::{Operator, Value};
//!
//! let mut acc = Accumulator::new();
//! acc.commit(Operator::Add, Value::dimension(144.0));
//! assert_eq!(acc.state(), AccumulatorState::Armed);
//!
//! let total = acc.equals(Value::dimension(12.0)).unwrap();
//! assert_eq!(display_value(&total), "13' 0\"");
//! assert_eq!(acc.state(), AccumulatorState::Holding);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::algebra::apply_operator;
use crate::value::{Operator, Value};

/// Coarse state of the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccumulatorState {
    Empty,
    Holding,
    Armed,
}

/// Running total, pending operator and "total started" flag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Accumulator {
    total: Value,
    pending: Option<Operator>,
    started: bool,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Accumulator::default()
    }

    /// Current total. Meaningless (zero length) while [`started`](Self::started) is false.
    pub fn total(&self) -> Value {
        self.total
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn state(&self) -> AccumulatorState {
        match (self.started, self.pending) {
            (false, _) => AccumulatorState::Empty,
            (true, None) => AccumulatorState::Holding,
            (true, Some(_)) => AccumulatorState::Armed,
        }
    }

    /// Choose `op` as the next operator, consuming the current `entry`.
    ///
    /// - EMPTY: `entry` becomes the total.
    /// - HOLDING: `entry` is ignored, the total is kept.
    /// - ARMED: the total is folded with `entry` under the old operator.
    ///
    /// Always ends ARMED with `op` pending.
    pub fn commit(&mut self, op: Operator, entry: Value) {
        let before = self.state();
        if !self.started {
            self.total = entry;
            self.started = true;
        } else if let Some(pending) = self.pending {
            self.fold(pending, entry);
        }
        self.pending = Some(op);
        debug!(?before, operator = %op, total = ?self.total, "commit");
    }

    /// Resolve the pending operator against `entry`.
    ///
    /// Only acts when ARMED; returns the new total in that case and ends in
    /// HOLDING. Returns `None` and changes nothing otherwise.
    pub fn equals(&mut self, entry: Value) -> Option<Value> {
        let pending = match (self.started, self.pending) {
            (true, Some(op)) => op,
            _ => {
                debug!(state = ?self.state(), "equals ignored");
                return None;
            }
        };
        self.fold(pending, entry);
        self.pending = None;
        debug!(operator = %pending, total = ?self.total, "equals");
        Some(self.total)
    }

    /// Back to EMPTY.
    pub fn reset(&mut self) {
        *self = Accumulator::default();
        debug!("reset");
    }

    fn fold(&mut self, op: Operator, entry: Value) {
        let was_finite = self.total.is_finite();
        self.total = apply_operator(self.total, entry, op);
        if was_finite && !self.total.is_finite() {
            warn!(operator = %op, ?entry, "invalid operation, total is now non-finite");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::display_value;
    use crate::value::ValueKind;

    #[test]
    fn test_new_is_empty() {
        let acc = Accumulator::new();
        assert_eq!(acc.state(), AccumulatorState::Empty);
        assert!(!acc.started());
        assert_eq!(acc.pending(), None);
    }

    #[test]
    fn test_first_commit_stores_entry() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::Add, Value::dimension(144.0));
        assert_eq!(acc.state(), AccumulatorState::Armed);
        assert_eq!(acc.total(), Value::dimension(144.0));
        assert_eq!(acc.pending(), Some(Operator::Add));
    }

    #[test]
    fn test_commit_then_equals() {
        let mut acc = Accumulator::new();
        acc.reset();
        acc.commit(Operator::Add, Value::dimension(144.0));
        let total = acc.equals(Value::dimension(12.0));
        assert_eq!(total, Some(Value::dimension(156.0)));
        assert_eq!(display_value(&acc.total()), "13' 0\"");
        assert_eq!(acc.state(), AccumulatorState::Holding);
    }

    #[test]
    fn test_chained_commits_fold_with_previous_operator() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::Add, Value::dimension(24.0));
        acc.commit(Operator::MulNum, Value::dimension(12.0));
        assert_eq!(acc.total(), Value::dimension(36.0));
        assert_eq!(acc.pending(), Some(Operator::MulNum));

        let total = acc.equals(Value::number(2.0)).unwrap();
        assert_eq!(total, Value::dimension(72.0));
    }

    #[test]
    fn test_commit_from_holding_keeps_total() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::Sub, Value::dimension(100.0));
        acc.equals(Value::dimension(40.0));
        assert_eq!(acc.state(), AccumulatorState::Holding);

        acc.commit(Operator::DivDim, Value::dimension(999.0));
        assert_eq!(acc.state(), AccumulatorState::Armed);
        assert_eq!(acc.total(), Value::dimension(60.0));

        let total = acc.equals(Value::dimension(12.0)).unwrap();
        assert_eq!(total, Value::number(5.0));
    }

    #[test]
    fn test_equals_is_noop_unless_armed() {
        let mut acc = Accumulator::new();
        assert_eq!(acc.equals(Value::dimension(5.0)), None);
        assert_eq!(acc.state(), AccumulatorState::Empty);

        acc.commit(Operator::Add, Value::dimension(5.0));
        acc.equals(Value::dimension(5.0));
        let held = acc;
        assert_eq!(acc.equals(Value::dimension(7.0)), None);
        assert_eq!(acc, held);
    }

    #[test]
    fn test_area_round_trip() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::MulDim, Value::dimension(10.0));
        acc.commit(Operator::DivDim, Value::dimension(4.0));
        assert_eq!(acc.total(), Value::area(40.0));
        assert_eq!(acc.equals(Value::dimension(4.0)), Some(Value::dimension(10.0)));
    }

    #[test]
    fn test_nan_sticks_until_reset() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::Add, Value::number(5.0));
        acc.commit(Operator::Add, Value::dimension(10.0));
        assert_eq!(acc.total().kind(), ValueKind::Number);
        assert!(acc.total().magnitude().is_nan());

        acc.commit(Operator::MulNum, Value::number(3.0));
        let total = acc.equals(Value::number(2.0)).unwrap();
        assert_eq!(display_value(&total), "ERR");

        acc.reset();
        assert_eq!(acc.state(), AccumulatorState::Empty);
        acc.commit(Operator::Add, Value::number(1.0));
        assert_eq!(acc.equals(Value::number(1.0)), Some(Value::number(2.0)));
    }

    #[test]
    fn test_division_by_zero_reaches_display() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::DivNum, Value::dimension(10.0));
        let total = acc.equals(Value::number(0.0)).unwrap();
        assert_eq!(display_value(&total), "ERR");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut acc = Accumulator::new();
        acc.commit(Operator::Add, Value::dimension(3.0));
        acc.reset();
        let once = acc;
        acc.reset();
        assert_eq!(acc, once);
        assert_eq!(acc.state(), AccumulatorState::Empty);
    }
}
