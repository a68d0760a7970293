//! Evaluation of a single binary operation.
//!
//! Plain IEEE double arithmetic, except that division by zero is reported as
//! an error instead of producing an infinity. The engine maps the error to its
//! error state; it is never surfaced to the caller of `dispatch`.

use super::action::Operator;

/// Failure of a binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The divisor of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Apply `op` to the operand pair `(a, b)`.
pub fn apply(a: f64, b: f64, op: Operator) -> Result<f64, ArithmeticError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}
