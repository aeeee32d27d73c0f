// Engine library root
// This file declares the modules for the engine crate.

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod data;
pub mod error;

pub use error::EngineError;
