// Value types and formatting helpers used by both the engine and the console.
pub mod models;
pub mod utils;

pub use models::{PriceYear, Problem, ShiftKey};
pub use utils::indian_format::IndianFormat;
