// Engine settings, deserialized from the console's JSON configuration
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use shared::utils::indian_format::IndianFormat;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct EngineSettings {
    #[serde(default)]
    pub formatter: FormatterSettings,
    #[serde(default)]
    pub cipher: CipherSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatterSettings {
    pub group_separator: String,
    pub decimal_separator: String,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        FormatterSettings {
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl FormatterSettings {
    // Both separators must be present and distinguishable from each other and
    // from the digits they surround.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.decimal_separator.is_empty() || self.group_separator.is_empty() {
            return Err(EngineError::ConfigError(
                "formatter separators must not be empty".to_string(),
            ));
        }
        if self.decimal_separator == self.group_separator {
            return Err(EngineError::ConfigError(format!(
                "group and decimal separator are both '{}'",
                self.group_separator
            )));
        }
        if self
            .group_separator
            .chars()
            .chain(self.decimal_separator.chars())
            .any(|c| c.is_ascii_digit())
        {
            return Err(EngineError::ConfigError(
                "formatter separators must not contain digits".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&FormatterSettings> for IndianFormat {
    fn from(settings: &FormatterSettings) -> Self {
        IndianFormat::new(settings.group_separator.clone(), settings.decimal_separator.clone())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CipherSettings {
    // Print the decoded message after the encoded one
    pub show_decoded: bool,
}

impl Default for CipherSettings {
    fn default() -> Self {
        CipherSettings { show_decoded: true }
    }
}
