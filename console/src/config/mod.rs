// Console configuration
// Mirrors the structure of assets/config/default.json. The engine owns the
// formatter and cipher sections; the console only adds the app section.
use anyhow::{anyhow, Context, Result};
use engine::config::EngineSettings;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    #[serde(default)]
    pub app: AppSettings,
    #[serde(flatten)]
    pub engine: EngineSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_CONFIG).context("embedded default configuration is invalid")
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        Self::from_json(&config_str)
            .with_context(|| format!("invalid configuration file '{}'", path.display()))
    }

    // A user supplied file replaces the embedded default entirely
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::load_default(),
        }
    }

    fn from_json(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let level = self.app.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(anyhow!(
                "unknown log level '{}', expected one of {}",
                self.app.log_level,
                LOG_LEVELS.join(", ")
            ));
        }
        self.engine.formatter.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.version, "0.1.0");
        assert_eq!(config.app.log_level, "warn");
        assert_eq!(config.engine, EngineSettings::default());
    }

    #[test]
    fn test_load_from_path() {
        let file = create_config_file(
            r#"{
                "version": "0.2.0",
                "app": { "log_level": "debug" },
                "formatter": { "group_separator": " ", "decimal_separator": "," },
                "cipher": { "show_decoded": false }
            }"#,
        );
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.version, "0.2.0");
        assert_eq!(config.app.log_level, "debug");
        assert_eq!(config.engine.formatter.group_separator, " ");
        assert!(!config.engine.cipher.show_decoded);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let file = create_config_file(r#"{ "version": "0.1.0" }"#);
        let config = AppConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.app.log_level, "warn");
        assert_eq!(config.engine, EngineSettings::default());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::load_from_path(Path::new("/nonexistent/problems.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read configuration file"));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let file = create_config_file(r#"{ "version": "0.1.0", "app": { "log_level": "loud" } }"#);
        let err = AppConfig::load_from_path(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown log level 'loud'"));
    }

    #[test]
    fn test_invalid_separators_are_rejected() {
        let file = create_config_file(
            r#"{ "version": "0.1.0", "formatter": { "group_separator": ".", "decimal_separator": "." } }"#,
        );
        assert!(AppConfig::load_from_path(file.path()).is_err());
    }
}
