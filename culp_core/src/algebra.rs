//! # Value Algebra
//!
//! [`apply_operator`] folds two values under one operator. It is total:
//! every (kind, kind, operator) triple has an outcome, and combinations with
//! no physical meaning produce `NUMBER{NaN}` instead of an error.
//!
//! | op          | D∘D       | N∘N    | D∘N       | N∘D       | any AREA      |
//! |-------------|-----------|--------|-----------|-----------|---------------|
//! | `+` `-`     | DIMENSION | NUMBER | NaN       | NaN       | NaN           |
//! | `×`         | NaN       | NUMBER | DIMENSION | DIMENSION | NUMBER (raw)  |
//! | `÷`         | NUMBER    | NUMBER | DIMENSION | NUMBER    | NUMBER (raw)  |
//! | `×d`        | AREA      | NaN    | AREA      | AREA      | NaN           |
//! | `÷d`        | NUMBER    | NaN    | NUMBER    | NaN       | A÷D→DIMENSION |
//!
//! `NUMBER ÷ DIMENSION` giving a NUMBER while `DIMENSION ÷ NUMBER` gives a
//! DIMENSION is intentional. So is the raw-magnitude treatment of AREA under
//! the plain `×`/`÷` keys, which lets an accumulated area be scaled or
//! divided down without switching operators.
//!
//! Division by zero follows IEEE-754 (±inf or NaN) and propagates.
//!
//! ## Example
//!
//! ```rust
//! use culp_core::algebra::apply_operator;
//! use culp_core::value::{Operator, Value};
//!
//! let wall = apply_operator(Value::dimension(120.0), Value::dimension(96.0), Operator::MulDim);
//! assert_eq!(wall, Value::area(11520.0));
//!
//! let height = apply_operator(wall, Value::dimension(120.0), Operator::DivDim);
//! assert_eq!(height, Value::dimension(96.0));
//! ```

use crate::value::{Operator, Value};

/// Apply `op` with `a` as left operand and `b` as right operand.
pub fn apply_operator(a: Value, b: Value, op: Operator) -> Value {
    use Value::{Area, Dimension, Number};

    match op {
        Operator::Add | Operator::Sub => {
            let combine = |x: f64, y: f64| if op == Operator::Add { x + y } else { x - y };
            match (a, b) {
                (Dimension { inches: x }, Dimension { inches: y }) => Value::dimension(combine(x, y)),
                (Number { n: x }, Number { n: y }) => Value::number(combine(x, y)),
                _ => Value::invalid(),
            }
        }
        Operator::MulNum | Operator::DivNum => {
            let multiply = op == Operator::MulNum;
            let combine = |x: f64, y: f64| if multiply { x * y } else { x / y };
            match (a, b) {
                (Number { n: x }, Number { n: y }) => Value::number(combine(x, y)),
                (Dimension { inches: x }, Number { n: y }) => Value::dimension(combine(x, y)),
                (Number { n: x }, Dimension { inches: y }) => {
                    if multiply {
                        Value::dimension(x * y)
                    } else {
                        Value::number(x / y)
                    }
                }
                (Dimension { inches: x }, Dimension { inches: y }) => {
                    if multiply {
                        Value::invalid()
                    } else {
                        Value::number(x / y)
                    }
                }
                (Area { .. }, _) | (_, Area { .. }) => Value::number(combine(a.magnitude(), b.magnitude())),
            }
        }
        Operator::MulDim => match (a, b) {
            (Dimension { inches: x }, Dimension { inches: y }) => Value::area(x * y),
            (Dimension { inches: x }, Number { n: y }) => Value::area(x * y),
            (Number { n: x }, Dimension { inches: y }) => Value::area(x * y),
            _ => Value::invalid(),
        },
        Operator::DivDim => match (a, b) {
            (Dimension { inches: x }, Dimension { inches: y }) => Value::number(x / y),
            (Area { in2: x }, Dimension { inches: y }) => Value::dimension(x / y),
            (Dimension { inches: x }, Number { n: y }) => Value::number(x / y),
            _ => Value::invalid(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    fn assert_invalid(v: Value) {
        assert_eq!(v.kind(), ValueKind::Number);
        assert!(v.magnitude().is_nan(), "expected NaN, got {:?}", v);
    }

    #[test]
    fn test_add_sub_dimensions() {
        let a = Value::dimension(144.0);
        let b = Value::dimension(12.5);
        assert_eq!(apply_operator(a, b, Operator::Add), Value::dimension(156.5));
        assert_eq!(apply_operator(a, b, Operator::Sub), Value::dimension(131.5));
        assert_eq!(apply_operator(b, a, Operator::Sub), Value::dimension(-131.5));
    }

    #[test]
    fn test_add_numbers() {
        let v = apply_operator(Value::number(2.0), Value::number(3.0), Operator::Add);
        assert_eq!(v, Value::number(5.0));
    }

    #[test]
    fn test_mixed_kinds_cannot_be_added() {
        assert_invalid(apply_operator(Value::number(5.0), Value::dimension(10.0), Operator::Add));
        assert_invalid(apply_operator(Value::dimension(10.0), Value::number(5.0), Operator::Sub));
        assert_invalid(apply_operator(Value::area(10.0), Value::area(5.0), Operator::Add));
    }

    #[test]
    fn test_plain_multiply_divide() {
        let d = Value::dimension(24.0);
        let n = Value::number(3.0);
        assert_eq!(apply_operator(d, n, Operator::MulNum), Value::dimension(72.0));
        assert_eq!(apply_operator(d, n, Operator::DivNum), Value::dimension(8.0));
        assert_eq!(apply_operator(n, d, Operator::MulNum), Value::dimension(72.0));
        assert_eq!(apply_operator(n, d, Operator::DivNum), Value::number(0.125));
        assert_eq!(apply_operator(n, n, Operator::MulNum), Value::number(9.0));
        assert_eq!(apply_operator(d, Value::dimension(6.0), Operator::DivNum), Value::number(4.0));
        assert_invalid(apply_operator(d, d, Operator::MulNum));
    }

    #[test]
    fn test_plain_operators_treat_area_as_raw_number() {
        let area = Value::area(40.0);
        assert_eq!(apply_operator(area, Value::number(2.0), Operator::MulNum), Value::number(80.0));
        assert_eq!(apply_operator(area, Value::dimension(4.0), Operator::DivNum), Value::number(10.0));
        assert_eq!(apply_operator(Value::dimension(2.0), area, Operator::MulNum), Value::number(80.0));
        assert_eq!(apply_operator(area, area, Operator::DivNum), Value::number(1.0));
    }

    #[test]
    fn test_dimension_multiply_makes_area() {
        assert_eq!(
            apply_operator(Value::dimension(10.0), Value::dimension(4.0), Operator::MulDim),
            Value::area(40.0)
        );
        assert_eq!(
            apply_operator(Value::dimension(10.0), Value::number(4.0), Operator::MulDim),
            Value::area(40.0)
        );
        assert_eq!(
            apply_operator(Value::number(4.0), Value::dimension(10.0), Operator::MulDim),
            Value::area(40.0)
        );
        assert_invalid(apply_operator(Value::number(4.0), Value::number(10.0), Operator::MulDim));
        assert_invalid(apply_operator(Value::area(4.0), Value::dimension(10.0), Operator::MulDim));
    }

    #[test]
    fn test_dimension_divide() {
        assert_eq!(
            apply_operator(Value::dimension(24.0), Value::dimension(6.0), Operator::DivDim),
            Value::number(4.0)
        );
        assert_eq!(
            apply_operator(Value::area(40.0), Value::dimension(4.0), Operator::DivDim),
            Value::dimension(10.0)
        );
        assert_eq!(
            apply_operator(Value::dimension(24.0), Value::number(6.0), Operator::DivDim),
            Value::number(4.0)
        );
        assert_invalid(apply_operator(Value::number(24.0), Value::dimension(6.0), Operator::DivDim));
        assert_invalid(apply_operator(Value::area(24.0), Value::number(6.0), Operator::DivDim));
    }

    #[test]
    fn test_division_by_zero_follows_ieee() {
        let v = apply_operator(Value::dimension(10.0), Value::number(0.0), Operator::DivNum);
        assert_eq!(v.kind(), ValueKind::Dimension);
        assert_eq!(v.magnitude(), f64::INFINITY);

        let v = apply_operator(Value::number(0.0), Value::number(0.0), Operator::DivNum);
        assert!(v.magnitude().is_nan());
    }

    #[test]
    fn test_nan_propagates_through_every_operator() {
        let bad = Value::number(f64::NAN);
        for op in Operator::ALL {
            let v = apply_operator(bad, Value::number(2.0), op);
            assert!(!v.is_finite(), "{} should keep NaN", op);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn dimension_add_sub_is_plain_arithmetic(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
            let sum = apply_operator(Value::dimension(a), Value::dimension(b), Operator::Add);
            prop_assert_eq!(sum, Value::dimension(a + b));

            let diff = apply_operator(Value::dimension(a), Value::dimension(b), Operator::Sub);
            prop_assert_eq!(diff, Value::dimension(a - b));
        }

        #[test]
        fn dimension_add_commutes(a in -1.0e6_f64..1.0e6, b in -1.0e6_f64..1.0e6) {
            let ab = apply_operator(Value::dimension(a), Value::dimension(b), Operator::Add);
            let ba = apply_operator(Value::dimension(b), Value::dimension(a), Operator::Add);
            prop_assert_eq!(ab, ba);
        }
    }
}
