use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid shift key: {source}")]
    InvalidShiftKey {
        #[from]
        source: shared::models::ParseShiftKeyError,
    },

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid year count: '{0}'")]
    InvalidCount(String),

    #[error("Invalid price at position {position}: '{token}'")]
    InvalidPrices { position: usize, token: String },

    #[error("EOF when reading a line")]
    EndOfInput,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    // Input the user typed could not be read as the value we asked for, as
    // opposed to a failure of the input stream or the configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidShiftKey { .. }
                | EngineError::InvalidNumber(_)
                | EngineError::InvalidCount(_)
                | EngineError::InvalidPrices { .. }
        )
    }
}
