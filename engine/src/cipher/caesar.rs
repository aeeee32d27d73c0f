// Caesar cipher: rotates ASCII Latin letters within their own case.
use super::TextCipher;
use serde_json::Value;
use shared::models::{ShiftKey, ALPHABET_LEN};

/// Rotates every ASCII letter of `text` by `key` places, keeping its case.
/// Anything else (digits, punctuation, whitespace, non-ASCII letters) is
/// copied unchanged. Negative and oversized keys wrap around the alphabet.
pub fn perform_shift(text: &str, key: i64) -> String {
    let shift = key.rem_euclid(ALPHABET_LEN) as u8;

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                (((c as u8 - base + shift) % ALPHABET_LEN as u8) + base) as char
            } else {
                c
            }
        })
        .collect()
}

pub fn caesar_encode(message: &str, shift: i64) -> String {
    perform_shift(message, shift)
}

pub fn caesar_decode(encoded_message: &str, shift: i64) -> String {
    // Negating i64::MIN overflows; reducing first keeps the negation in range.
    perform_shift(encoded_message, -shift.rem_euclid(ALPHABET_LEN))
}

pub struct Caesar {
    name: String,
    key: ShiftKey,
}

impl Caesar {
    pub fn new(key: ShiftKey) -> Self {
        Self {
            name: format!("Caesar({})", key),
            key,
        }
    }
}

impl TextCipher for Caesar {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "shift": self.key.residue() })
    }

    fn encode(&self, message: &str) -> String {
        perform_shift(message, self.key.residue() as i64)
    }

    fn decode(&self, message: &str) -> String {
        perform_shift(message, self.key.inverse().residue() as i64)
    }
}
