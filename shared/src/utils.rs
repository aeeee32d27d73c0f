// Utility functions shared by the engine and the console front end.

// Indian (South Asian) digit grouping: the last three integer digits form one
// group and every digit before them is grouped in pairs, e.g. 12,34,567.
pub mod indian_format {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct IndianFormat {
        pub group_separator: String,
        pub decimal_separator: String,
    }

    impl Default for IndianFormat {
        fn default() -> Self {
            IndianFormat {
                group_separator: ",".to_string(),
                decimal_separator: ".".to_string(),
            }
        }
    }

    impl IndianFormat {
        pub fn new(group_separator: impl Into<String>, decimal_separator: impl Into<String>) -> Self {
            IndianFormat {
                group_separator: group_separator.into(),
                decimal_separator: decimal_separator.into(),
            }
        }

        // f64 is rendered with Display, which is the shortest representation that
        // round-trips and never switches to exponent notation.
        pub fn format_f64(&self, value: f64) -> String {
            self.format_decimal_str(&value.to_string())
        }

        pub fn format_integer(&self, value: i64) -> String {
            self.format_decimal_str(&value.to_string())
        }

        // Groups an already-rendered decimal string. The input is split on the
        // first '.'; a leading sign is set aside and put back in front of the
        // grouped digits. The fractional part is copied as is, and dropped when
        // empty ("123." -> "123").
        pub fn format_decimal_str(&self, num_str: &str) -> String {
            let (sign, unsigned) = match num_str.chars().next() {
                Some(c @ ('-' | '+')) => (Some(c), &num_str[1..]),
                _ => (None, num_str),
            };

            let (integer_part, fractional_part) = match unsigned.split_once('.') {
                Some((int, frac)) => (int, Some(frac)),
                None => (unsigned, None),
            };

            let mut formatted = String::with_capacity(num_str.len() + num_str.len() / 2);
            if let Some(c) = sign {
                formatted.push(c);
            }
            formatted.push_str(&self.group_integer_digits(integer_part));

            if let Some(frac) = fractional_part.filter(|f| !f.is_empty()) {
                formatted.push_str(&self.decimal_separator);
                formatted.push_str(frac);
            }
            formatted
        }

        fn group_integer_digits(&self, integer_part: &str) -> String {
            let digits: Vec<char> = integer_part.chars().collect();
            if digits.len() <= 3 {
                return integer_part.to_string();
            }

            let (remaining, last_three) = digits.split_at(digits.len() - 3);

            // Pairs are counted from the right, so an odd-length prefix leaves a
            // single leading digit as the first group.
            let lead = remaining.len() % 2;
            let mut groups: Vec<String> = Vec::with_capacity(remaining.len() / 2 + 2);
            if lead == 1 {
                groups.push(remaining[..1].iter().collect());
            }
            groups.extend(remaining[lead..].chunks(2).map(|pair| pair.iter().collect::<String>()));
            groups.push(last_three.iter().collect());

            groups.join(&self.group_separator)
        }
    }

    pub fn to_indian_format(value: f64) -> String {
        IndianFormat::default().format_f64(value)
    }

    pub fn format_integer(value: i64) -> String {
        IndianFormat::default().format_integer(value)
    }

    pub fn format_decimal_str(num_str: &str) -> String {
        IndianFormat::default().format_decimal_str(num_str)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_integer_values() {
            assert_eq!(to_indian_format(1234567.0), "12,34,567");
            assert_eq!(to_indian_format(100.0), "100");
            assert_eq!(to_indian_format(1000.0), "1,000");
            assert_eq!(format_integer(1234567), "12,34,567");
        }

        #[test]
        fn test_format_with_fraction() {
            assert_eq!(to_indian_format(1234567.89), "12,34,567.89");
            assert_eq!(to_indian_format(0.5), "0.5");
        }

        #[test]
        fn test_format_group_boundaries() {
            assert_eq!(format_integer(0), "0");
            assert_eq!(format_integer(999), "999");
            assert_eq!(format_integer(1000), "1,000");
            assert_eq!(format_integer(12345), "12,345");
            assert_eq!(format_integer(123456), "1,23,456");
            assert_eq!(format_integer(1234567890), "1,23,45,67,890");
        }

        #[test]
        fn test_format_negative_values_keep_sign_outside_groups() {
            assert_eq!(format_integer(-1234567), "-12,34,567");
            assert_eq!(format_integer(-100), "-100");
            assert_eq!(to_indian_format(-1000.25), "-1,000.25");
        }

        #[test]
        fn test_format_large_f64_has_no_exponent() {
            assert_eq!(to_indian_format(1e20), "10,00,00,00,00,00,00,00,00,000");
        }

        #[test]
        fn test_format_non_finite_values_pass_through() {
            assert_eq!(to_indian_format(f64::INFINITY), "inf");
            assert_eq!(to_indian_format(f64::NEG_INFINITY), "-inf");
            assert_eq!(to_indian_format(f64::NAN), "NaN");
        }

        #[test]
        fn test_format_decimal_str_preserves_all_digits() {
            assert_eq!(
                format_decimal_str("12345678901234567890.0001"),
                "1,23,45,67,89,01,23,45,67,890.0001"
            );
            assert_eq!(format_decimal_str("1234."), "1,234");
            assert_eq!(format_decimal_str("+1234"), "+1,234");
        }

        #[test]
        fn test_custom_separators() {
            let fmt = IndianFormat::new(" ", ",");
            assert_eq!(fmt.format_f64(1234567.89), "12 34 567,89");
        }
    }
}
