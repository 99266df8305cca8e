use anyhow::{Context, Result};
use inquire::Text;
use tally::{format_result, Engine, TallyResult};

use crate::error_formatter::{format_error, ExpressionError};

/// Prompt for expressions and print each result until an empty line.
///
/// Evaluation errors are shown and the loop continues; only a failing
/// prompt ends the session with an error.
pub fn run_interactive(engine: &Engine) -> Result<()> {
    loop {
        let input = Text::new("Expression:")
            .with_help_message("Empty line to quit. Example: (2+3)*4")
            .prompt()
            .context("Failed to read expression")?;

        let Some(outcome) = evaluate_line(engine, &input) else {
            return Ok(());
        };

        match outcome {
            Ok(value) => println!("{}", format_result(value)),
            Err(e) => eprintln!("{}", format_error(&ExpressionError::new(&input, e))),
        }
    }
}

/// `None` for a blank line. Anything else is evaluated exactly as typed.
fn evaluate_line(engine: &Engine, input: &str) -> Option<TallyResult<f64>> {
    if input.trim().is_empty() {
        return None;
    }
    Some(engine.evaluate(input))
}
