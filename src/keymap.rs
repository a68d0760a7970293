//! Key-to-action mapping for the terminal front-end.
//!
//! This is the presentation boundary: display glyphs (`×`, `÷`, `−`, `±`) and
//! their ASCII equivalents both resolve to the same closed [`Action`] enum, so
//! the engine never has to interpret characters itself.

use crate::engine::{Action, Operator};

/// Map one input character to a calculator action.
///
/// Returns `None` for characters that have no meaning on the keypad
/// (whitespace included); callers skip those.
pub fn action_for_char(c: char) -> Option<Action> {
    match c {
        '0'..='9' => Some(Action::Digit(c as u8 - b'0')),
        '.' | ',' => Some(Action::Decimal),
        '+' => Some(Action::Operator(Operator::Add)),
        '-' | '−' => Some(Action::Operator(Operator::Sub)),
        '*' | 'x' | 'X' | '×' => Some(Action::Operator(Operator::Mul)),
        '/' | '÷' => Some(Action::Operator(Operator::Div)),
        '%' => Some(Action::Percent),
        '=' => Some(Action::Equals),
        'n' | '±' => Some(Action::ToggleSign),
        '<' => Some(Action::Backspace),
        'c' | 'C' => Some(Action::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_digit_actions() {
        assert_eq!(action_for_char('0'), Some(Action::Digit(0)));
        assert_eq!(action_for_char('9'), Some(Action::Digit(9)));
    }

    #[test]
    fn test_ascii_and_glyph_operators_agree() {
        assert_eq!(
            action_for_char('*'),
            Some(Action::Operator(Operator::Mul))
        );
        assert_eq!(action_for_char('*'), action_for_char('×'));
        assert_eq!(action_for_char('/'), action_for_char('÷'));
        assert_eq!(action_for_char('-'), action_for_char('−'));
        assert_eq!(action_for_char('n'), action_for_char('±'));
    }

    #[test]
    fn test_decimal_accepts_comma() {
        assert_eq!(action_for_char(','), Some(Action::Decimal));
        assert_eq!(action_for_char('.'), Some(Action::Decimal));
    }

    #[test]
    fn test_unmapped_characters_are_skipped() {
        assert_eq!(action_for_char(' '), None);
        assert_eq!(action_for_char('a'), None);
        assert_eq!(action_for_char('('), None);
    }
}
