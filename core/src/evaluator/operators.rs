//! Binary operator implementations.

use crate::parser::BinaryOp;

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than panicking).
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right, // Division by zero produces inf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_add() {
        assert_eq!(eval_binary_float(BinaryOp::Add, 1.25, 2.0), 3.25);
    }

    #[test]
    fn test_float_sub() {
        assert_eq!(eval_binary_float(BinaryOp::Sub, 3.0, 10.0), -7.0);
    }

    #[test]
    fn test_float_mul() {
        assert_eq!(eval_binary_float(BinaryOp::Mul, -2.0, 5.0), -10.0);
    }

    #[test]
    fn test_float_div() {
        assert_eq!(eval_binary_float(BinaryOp::Div, 10.0, 3.0), 10.0 / 3.0);
    }

    #[test]
    fn test_float_div_by_zero() {
        // Float division by zero produces infinity (IEEE 754)
        let result = eval_binary_float(BinaryOp::Div, 10.0, 0.0);
        assert!(result.is_infinite() && result.is_sign_positive());

        let result = eval_binary_float(BinaryOp::Div, -1.0, 0.0);
        assert!(result.is_infinite() && result.is_sign_negative());

        assert!(eval_binary_float(BinaryOp::Div, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_float_overflow_saturates_to_infinity() {
        let result = eval_binary_float(BinaryOp::Mul, f64::MAX, 2.0);
        assert_eq!(result, f64::INFINITY);
    }
}
