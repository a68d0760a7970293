//! Terminal front-end around the calculator engine.
//!
//! Two modes, both line-oriented:
//! - scripted: feed one key string, print the final frame (plain or JSON);
//! - interactive: read key strokes line by line, echo the display after each,
//!   with `copy` / `quit` commands on top of the keypad characters.
//!
//! All calculator semantics live in the engine; this module only maps
//! characters through the keymap and renders frames verbatim.

mod clipboard;

use std::io::{self, BufRead, Write};

use tracing::trace;

use crate::engine::{CalculatorEngine, DisplayFrame};
use crate::keymap::action_for_char;

/// Feed every mapped character of `keys` into `engine`, returning the frame
/// after the last one. Unmapped characters are skipped.
pub fn feed_keys(engine: &mut CalculatorEngine, keys: &str) -> DisplayFrame {
    let mut frame = engine.frame();
    for c in keys.chars() {
        match action_for_char(c) {
            Some(action) => frame = engine.dispatch(action),
            None => trace!(key = %c, "skipping unmapped key"),
        }
    }
    frame
}

/// Run a scripted key sequence and print the final frame.
pub fn run_script(keys: &str, json: bool) -> anyhow::Result<()> {
    let mut engine = CalculatorEngine::new();
    let frame = feed_keys(&mut engine, keys);

    if json {
        println!("{}", serde_json::to_string(&frame)?);
    } else {
        println!("{}", frame.display_text);
    }
    Ok(())
}

/// Read key strokes from stdin line by line until EOF or `quit`.
pub fn run_interactive() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut engine = CalculatorEngine::new();

    print_frame(&mut stdout, &engine.frame())?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "q" | "quit" | "exit" => break,
            "copy" => {
                let frame = engine.frame();
                if let Err(e) = clipboard::copy_display(&frame.display_text) {
                    eprintln!("{:#}", e);
                }
                print_frame(&mut stdout, &frame)?;
            }
            _ => {
                let frame = feed_keys(&mut engine, input);
                print_frame(&mut stdout, &frame)?;
            }
        }
    }

    Ok(())
}

/// Print one frame as `[AC] 0` style prompt line.
fn print_frame(out: &mut impl Write, frame: &DisplayFrame) -> io::Result<()> {
    writeln!(out, "[{}] {}", frame.clear_label.as_str(), frame.display_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ERROR_TOKEN;

    #[test]
    fn test_feed_keys_runs_a_whole_calculation() {
        let mut engine = CalculatorEngine::new();
        let frame = feed_keys(&mut engine, "3+4+5=");
        assert_eq!(frame.display_text, "12");
    }

    #[test]
    fn test_feed_keys_skips_whitespace_and_noise() {
        let mut engine = CalculatorEngine::new();
        let frame = feed_keys(&mut engine, " 12 * 3 = please");
        assert_eq!(frame.display_text, "36");
    }

    #[test]
    fn test_feed_keys_with_display_glyphs() {
        let mut engine = CalculatorEngine::new();
        let frame = feed_keys(&mut engine, "9÷0=");
        assert_eq!(frame.display_text, ERROR_TOKEN);
        let frame = feed_keys(&mut engine, "c");
        assert_eq!(frame.display_text, "0");
    }
}
