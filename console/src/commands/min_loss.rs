//! Min-loss command: print the minimum loss over a series of yearly prices.
//!
//! Unlike the other commands this one never reports a failure on `output`.
//! Bad or missing input produces no output at all; the reason is only logged.

use engine::analysis::find_minimum_loss_i64;
use engine::data::input_parser::{parse_prices, parse_year_count, read_line};
use engine::EngineError;
use shared::models::Problem;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the min-loss command. Always succeeds.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<()> {
    if let Err(e) = session(input, output) {
        debug!(problem = %Problem::MinimumLoss, error = %e, "Suppressed min-loss failure");
    }
    Ok(())
}

fn session<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), EngineError> {
    let num_years = parse_year_count(&read_line(input)?)?;
    let prices = parse_prices(&read_line(input)?)?;

    if usize::try_from(num_years).ok() != Some(prices.len()) {
        debug!(num_years, prices = prices.len(), "Year count does not match number of prices");
    }

    match find_minimum_loss_i64(&prices) {
        Some(pair) => {
            debug!(
                problem = %Problem::MinimumLoss,
                loss = %pair.loss,
                buy_year = pair.higher.year,
                sell_year = pair.lower.year,
                "Found minimum loss"
            );
            writeln!(output, "{}", pair.loss)?;
            output.flush()?;
        }
        None => debug!(problem = %Problem::MinimumLoss, "No qualifying pair of years"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(stdin: &str) -> String {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_minimum_loss() {
        assert_eq!(run_with("6\n10 7 19 15 8 12\n"), "2\n");
    }

    #[test]
    fn test_extreme_prices_print_exact_gap() {
        assert_eq!(
            run_with("2\n9223372036854775807 -9223372036854775808\n"),
            "18446744073709551615\n"
        );
        assert_eq!(run_with("3\n9223372036854775807 0 -9223372036854775808\n"), "9223372036854775807\n");
    }

    #[test]
    fn test_price_beyond_i64_is_silent() {
        assert_eq!(run_with("2\n9223372036854775808 1\n"), "");
    }

    #[test]
    fn test_count_is_informational() {
        assert_eq!(run_with("2\n20 9 5 2\n"), "3\n");
    }

    #[test]
    fn test_no_output_when_no_loss() {
        assert_eq!(run_with("4\n1 2 3 4\n"), "");
        assert_eq!(run_with("0\n\n"), "");
        assert_eq!(run_with("1\n42\n"), "");
    }

    #[test]
    fn test_failures_are_silent() {
        assert_eq!(run_with("six\n10 7 19\n"), "");
        assert_eq!(run_with("3\n10 seven 19\n"), "");
        assert_eq!(run_with("3\n"), "");
        assert_eq!(run_with(""), "");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let mut input = Cursor::new(b"2\n5 3\n".to_vec());
        assert!(run(&mut input, &mut BrokenPipe).is_ok());
    }
}
