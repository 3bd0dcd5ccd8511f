#[derive(serde::Deserialize, Debug, Clone)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    /// Persisted authorized-user token, written after the first consent.
    pub token_path: Box<str>,
    /// OAuth client secret downloaded from the Google Cloud console.
    pub credentials_path: Box<str>,
}
