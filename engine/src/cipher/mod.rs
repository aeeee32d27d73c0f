// Text ciphers
pub mod caesar;

pub use caesar::{caesar_decode, caesar_encode, perform_shift, Caesar};

use serde_json::Value;

// Common trait for all ciphers. Encoding and decoding are infallible: any
// character a cipher does not handle is copied through unchanged.
pub trait TextCipher: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Key material used by this cipher instance
    fn encode(&self, message: &str) -> String;
    fn decode(&self, message: &str) -> String;
}
