#[derive(serde::Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    pub file: Box<str>,
}
