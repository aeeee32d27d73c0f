// Engine configuration
pub mod settings;

pub use settings::{CipherSettings, EngineSettings, FormatterSettings};
