//! Calculator engine: the state machine behind the display.
//!
//! This module provides functionality to:
//! - Fold a stream of user actions into one authoritative display string
//! - Evaluate chained binary operations with a single pending operator
//! - Derive the AC/C caption of the clear key from the current state
//!
//! The engine is synchronous and owns nothing but its own state; every
//! failure (division by zero, overflow, unparsable display text) becomes a
//! transition into the error state, never an error returned to the caller.

mod action;
mod arithmetic;
mod format;

pub use action::{Action, Operator};
pub use arithmetic::{ArithmeticError, apply};
pub use format::{ERROR_TOKEN, MAX_DIGITS, format};

use serde::Serialize;
use tracing::{debug, trace, warn};

/// Caption of the clear key, derived from the state on every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ClearLabel {
    /// Full reset: shown only while the engine sits in its initial state.
    #[serde(rename = "AC")]
    AllClear,
    /// Clear entry: something has been typed or captured.
    #[serde(rename = "C")]
    Clear,
}

impl ClearLabel {
    /// The caption text as rendered on the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::Clear => "C",
        }
    }
}

/// Everything the presentation layer needs to render one frame.
///
/// The display text and the clear caption are rendered verbatim; the
/// presentation layer applies no calculator semantics of its own.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplayFrame {
    /// Exact text of the display: a number literal, `"0"`, or the error token.
    pub display_text: String,
    /// Caption of the clear key.
    pub clear_label: ClearLabel,
}

/// The left operand and the operator waiting for the second operand.
///
/// Captured together so that operand and operator can never be set
/// independently of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    operand: f64,
    operator: Operator,
}

/// Persistent state of one calculator session.
#[derive(Clone, Debug, PartialEq)]
struct EngineState {
    /// Exact text shown to the user.
    display_text: String,
    /// Left operand and operator of an unfinished binary operation.
    pending: Option<Pending>,
    /// When set, the next digit replaces the display instead of appending.
    overwrite: bool,
    /// Set after an invalid operation; only clear leaves this state.
    error: bool,
}

impl EngineState {
    fn initial() -> Self {
        Self {
            display_text: "0".to_string(),
            pending: None,
            overwrite: true,
            error: false,
        }
    }
}

/// The calculator state machine.
///
/// Create one per session and feed it actions in arrival order:
///
/// ```
/// use pocketcalc::engine::{Action, CalculatorEngine, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.dispatch(Action::Digit(3));
/// engine.dispatch(Action::Operator(Operator::Add));
/// engine.dispatch(Action::Digit(4));
/// let frame = engine.dispatch(Action::Equals);
/// assert_eq!(frame.display_text, "7");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    state: EngineState,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine in its initial state (display `"0"`, nothing pending).
    pub fn new() -> Self {
        Self {
            state: EngineState::initial(),
        }
    }

    /// The frame for the current state, without dispatching anything.
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame {
            display_text: self.state.display_text.clone(),
            clear_label: if self.state == EngineState::initial() {
                ClearLabel::AllClear
            } else {
                ClearLabel::Clear
            },
        }
    }

    /// Whether the engine sits in the error state.
    pub fn is_error(&self) -> bool {
        self.state.error
    }

    /// Process one user action and return the resulting frame.
    ///
    /// While the engine is in the error state every action except
    /// [`Action::Clear`] is ignored.
    pub fn dispatch(&mut self, action: Action) -> DisplayFrame {
        trace!(?action, "dispatch");

        if self.state.error && action != Action::Clear {
            return self.frame();
        }

        match action {
            Action::Digit(d) => self.input_digit(d),
            Action::Decimal => self.input_decimal(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
            Action::Operator(op) => self.choose_operator(op),
            Action::Equals => self.equals(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
        }

        self.frame()
    }

    fn input_digit(&mut self, d: u8) {
        if d > 9 {
            warn!(digit = d, "ignoring out-of-range digit");
            return;
        }

        if self.state.overwrite {
            self.state.display_text = d.to_string();
            self.state.overwrite = false;
        } else if self.state.display_text == "0" {
            self.state.display_text = d.to_string();
        } else if format::digit_count(&self.state.display_text) < MAX_DIGITS {
            self.state.display_text.push((b'0' + d) as char);
        }
        // Digits beyond the cap are dropped silently.
    }

    fn input_decimal(&mut self) {
        if self.state.overwrite {
            self.state.display_text = "0.".to_string();
            self.state.overwrite = false;
        } else if !self.state.display_text.contains('.') {
            self.state.display_text.push('.');
        }
    }

    fn toggle_sign(&mut self) {
        if self.state.display_text == "0" {
            return;
        }

        if let Some(stripped) = self.state.display_text.strip_prefix('-') {
            self.state.display_text = stripped.to_string();
        } else {
            self.state.display_text.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        let Some(v) = self.parse_display() else {
            return;
        };

        let result = match self.state.pending {
            // Percent of the pending left operand: 200 + 10 % means 200 + 20.
            Some(pending) => pending.operand * v / 100.0,
            None => v / 100.0,
        };

        if !result.is_finite() {
            self.enter_error();
            return;
        }

        // The result stays editable: overwrite is deliberately left clear.
        self.state.display_text = format(result);
        self.state.overwrite = false;
    }

    fn choose_operator(&mut self, op: Operator) {
        match self.state.pending {
            None => {
                let Some(v) = self.parse_display() else {
                    return;
                };
                self.state.pending = Some(Pending {
                    operand: v,
                    operator: op,
                });
            }
            Some(pending) if !self.state.overwrite => {
                // A second operand was typed: evaluate before chaining.
                let Some(result) = self.evaluate(pending) else {
                    return;
                };
                self.state.display_text = format(result);
                self.state.pending = Some(Pending {
                    operand: result,
                    operator: op,
                });
            }
            Some(pending) => {
                // Operator pressed again before any digit: substitution only.
                self.state.pending = Some(Pending {
                    operator: op,
                    ..pending
                });
            }
        }

        self.state.overwrite = true;
    }

    fn equals(&mut self) {
        let Some(pending) = self.state.pending else {
            return;
        };

        let Some(result) = self.evaluate(pending) else {
            return;
        };

        self.state.display_text = format(result);
        self.state.pending = None;
        self.state.overwrite = true;
    }

    fn backspace(&mut self) {
        // Right after an operator/equals/clear there is nothing to delete.
        if self.state.overwrite {
            return;
        }

        let text = &self.state.display_text;
        if text.len() <= 1 || (text.len() == 2 && text.starts_with('-')) {
            self.state.display_text = "0".to_string();
            self.state.overwrite = true;
        } else {
            self.state.display_text.pop();
        }
    }

    fn clear(&mut self) {
        if self.state.error || self.state.display_text == "0" {
            // AC: error recovery and clearing an already-clear display both
            // reset the whole session.
            self.state = EngineState::initial();
        } else {
            // C: drop the current entry, keep the pending operation.
            self.state.display_text = "0".to_string();
            self.state.overwrite = true;
        }
    }

    /// Evaluate `pending` against the current display value.
    ///
    /// Returns `None` after moving into the error state (division by zero,
    /// overflow, or unparsable display text).
    fn evaluate(&mut self, pending: Pending) -> Option<f64> {
        let b = self.parse_display()?;

        match apply(pending.operand, b, pending.operator) {
            Ok(result) if result.is_finite() => {
                debug!(
                    a = pending.operand,
                    op = %pending.operator,
                    b,
                    result,
                    "evaluated"
                );
                Some(result)
            }
            Ok(_) => {
                warn!(a = pending.operand, op = %pending.operator, b, "overflow");
                self.enter_error();
                None
            }
            Err(ArithmeticError::DivisionByZero) => {
                warn!(a = pending.operand, "division by zero");
                self.enter_error();
                None
            }
        }
    }

    /// Parse the display text, entering the error state on failure.
    ///
    /// The input-buffer rules keep the display parsable; this guards against
    /// a corrupted buffer anyway instead of panicking.
    fn parse_display(&mut self) -> Option<f64> {
        match self.state.display_text.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                warn!(text = %self.state.display_text, "display text not a number");
                self.enter_error();
                None
            }
        }
    }

    fn enter_error(&mut self) {
        self.state = EngineState {
            display_text: ERROR_TOKEN.to_string(),
            pending: None,
            overwrite: true,
            error: true,
        };
    }
}
