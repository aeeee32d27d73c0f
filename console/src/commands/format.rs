//! Format command: group a number with Indian digit grouping.
//!
//! The number is printed in its shortest exact form, so whole values carry no
//! fractional part: `1234567` prints `12,34,567`, not `12,34,567.0`.

use anyhow::Result;
use engine::config::FormatterSettings;
use engine::data::input_parser::{parse_number, read_line};
use engine::EngineError;
use shared::models::Problem;
use shared::utils::indian_format::IndianFormat;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

use super::prompt;

/// Run the format command.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, settings: &FormatterSettings) -> Result<()> {
    writeln!(output, "--- Indian Currency Formatter ---")?;

    match session(input, output, settings) {
        Ok(()) => {}
        Err(e) if e.is_invalid_input() => {
            warn!(problem = %Problem::IndianFormat, error = %e, "Rejected number");
            writeln!(output, "Invalid input. Please enter a valid number.")?;
        }
        Err(e) => {
            warn!(problem = %Problem::IndianFormat, error = %e, "Format command failed");
            writeln!(output, "An error occurred: {}", e)?;
        }
    }
    Ok(())
}

fn session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &FormatterSettings,
) -> Result<(), EngineError> {
    prompt(output, "Enter a number to format: ")?;
    let number = parse_number(&read_line(input)?)?;

    let formatter = IndianFormat::from(settings);
    let formatted = formatter.format_f64(number);
    debug!(problem = %Problem::IndianFormat, number, formatted = %formatted, "Formatted number");

    writeln!(output, "Formatted number: {}", formatted)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(stdin: &str, settings: &FormatterSettings) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut input, &mut output, settings).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_format_number() {
        let out = run_with("1234567.89\n", &FormatterSettings::default());
        assert_eq!(
            out,
            "--- Indian Currency Formatter ---\nEnter a number to format: Formatted number: 12,34,567.89\n"
        );
    }

    #[test]
    fn test_format_whole_number_has_no_fraction() {
        let out = run_with("1000\n", &FormatterSettings::default());
        assert!(out.ends_with("Formatted number: 1,000\n"));
    }

    #[test]
    fn test_format_negative_number() {
        let out = run_with("-1234567\n", &FormatterSettings::default());
        assert!(out.ends_with("Formatted number: -12,34,567\n"));
    }

    #[test]
    fn test_invalid_number_message() {
        let out = run_with("12abc\n", &FormatterSettings::default());
        assert!(out.ends_with("Invalid input. Please enter a valid number.\n"));
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let out = run_with("", &FormatterSettings::default());
        assert!(out.ends_with("An error occurred: EOF when reading a line\n"));
    }

    #[test]
    fn test_configured_separators() {
        let settings = FormatterSettings {
            group_separator: "'".to_string(),
            decimal_separator: ",".to_string(),
        };
        let out = run_with("1234567.5\n", &settings);
        assert!(out.ends_with("Formatted number: 12'34'567,5\n"));
    }
}
