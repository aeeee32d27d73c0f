//! Console programs
//!
//! Each command reads its answers from `input` and writes prompts and results
//! to `output`, so the same code serves stdin/stdout and in-memory tests.

pub mod caesar;
pub mod format;
pub mod min_loss;

use engine::EngineError;
use std::io::Write;

// Writes a prompt without a line break and makes sure it is visible before
// the program blocks on input.
pub(crate) fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), EngineError> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}
