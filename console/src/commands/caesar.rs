//! Caesar command: encode a message, then decode it back.

use anyhow::Result;
use engine::cipher::{Caesar, TextCipher};
use engine::config::CipherSettings;
use engine::data::input_parser::{parse_shift_key, read_line};
use engine::EngineError;
use shared::models::Problem;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use super::prompt;

/// Run the caesar command.
///
/// An invalid key and any other failure are reported on `output`; only a
/// failure to write that report is returned as an error.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, settings: &CipherSettings) -> Result<()> {
    match session(input, output, settings) {
        Ok(()) => {}
        Err(e) if e.is_invalid_input() => {
            warn!(problem = %Problem::Caesar, error = %e, "Rejected shift key");
            writeln!(output, "\nInvalid input. The shift key must be a whole number.")?;
        }
        Err(e) => {
            warn!(problem = %Problem::Caesar, error = %e, "Caesar command failed");
            writeln!(output, "\nAn error occurred: {}", e)?;
        }
    }
    Ok(())
}

fn session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &CipherSettings,
) -> Result<(), EngineError> {
    prompt(output, "Enter the message: ")?;
    let message = read_line(input)?;

    prompt(output, "Enter the shift key (a number): ")?;
    let key = parse_shift_key(&read_line(input)?)?;

    let cipher = Caesar::new(key);
    debug!(
        problem = %Problem::Caesar,
        cipher = cipher.name(),
        parameters = %cipher.parameters(),
        chars = message.chars().count(),
        "Encoding message"
    );

    let encoded = cipher.encode(&message);
    writeln!(output, "\nEncoded: {}", encoded)?;

    if settings.show_decoded {
        let decoded = cipher.decode(&encoded);
        writeln!(output, "Decoded back: {}", decoded)?;
    }
    Ok(())
}
