//! Action and operator enums dispatched into the engine.
//!
//! The presentation layer (keymap, buttons) translates raw input into these
//! closed enums; the engine never sees key characters or display glyphs.

use std::fmt;

/// One of the four binary operators of the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        write!(f, "{}", symbol)
    }
}

/// A single user action fed into [`CalculatorEngine::dispatch`].
///
/// [`CalculatorEngine::dispatch`]: crate::engine::CalculatorEngine::dispatch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A digit key, 0 through 9. Values above 9 are ignored by the engine.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// The ± key: negate the current display value.
    ToggleSign,
    /// The % key: percent of the pending left operand, or of itself.
    Percent,
    /// One of the four operator keys.
    Operator(Operator),
    /// The = key: evaluate the pending operation.
    Equals,
    /// Delete the last entered character of the current operand.
    Backspace,
    /// The clear key (C clears the entry, AC resets the session).
    Clear,
}
