use config::Config;
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

pub const DEFAULT_SPREADSHEET_ID: &str = "1K5qQESBZvyJjd4BAWU16QzKjS3Y0RNPQrSE_6F1UYM8";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub server: super::server_config::ServerConfig,
    pub sheets: super::sheets_config::SpreadsheetConfig,
    pub logging: super::logging_config::LoggingConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config file '{0}'")]
    Read(String),
    #[error("Failed to deserialize config file '{0}'")]
    Deserialize(String),
}

impl AppConfig {
    /// Loads the config file named by `CONFIG_PATH` (default `Config`) on top of the defaults.
    /// The file is optional.
    pub fn load() -> error_stack::Result<AppConfig, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> error_stack::Result<AppConfig, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")
            .and_then(|b| b.set_default("server.port", 3001))
            .and_then(|b| b.set_default("sheets.spreadsheet_id", DEFAULT_SPREADSHEET_ID))
            .and_then(|b| b.set_default("sheets.token_path", "token.json"))
            .and_then(|b| b.set_default("sheets.credentials_path", "credentials.json"))
            .and_then(|b| b.set_default("logging.file", "sheets_proxy.log"))
            .change_context_lazy(|| ConfigError::Read(config_path.to_string()))?
            .add_source(config::File::with_name(config_path).required(false))
            .build()
            .change_context_lazy(|| ConfigError::Read(config_path.to_string()))?;

        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(|| ConfigError::Deserialize(config_path.to_string()))?;

        use serde::de::IntoDeserializer;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        AppConfig::deserialize(path_de).map_err(|e| {
            let path_str = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(ConfigError::Deserialize(config_path.to_string()))
                .attach_printable(format!("{}", e))
                .attach_printable(format!("Field path: {}", path_str.trim_start_matches('.')))
        })
    }
}
