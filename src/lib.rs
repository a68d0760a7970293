//! Input/state engine of a pocket calculator.
//!
//! The [`engine`] module is the core: a synchronous state machine that folds
//! digit, operator, and control actions into one authoritative display
//! string. [`keymap`] and [`repl`] form the thin terminal presentation layer
//! on top of it.

pub mod engine;
pub mod keymap;
pub mod repl;
