use serde_json::Value;
use thiserror::Error;

use crate::domain::{credential::Credential, sheets::a1_notation::A1Notation};

#[derive(Error, Debug)]
pub enum SpreadsheetApiError {
    #[error("Failed to authenticate against the spreadsheet service")]
    Authentication,
    #[error("Failed to fetch spreadsheet")]
    FetchSpreadsheet,
    #[error("Spreadsheet response is missing {0}")]
    MissingField(&'static str),
    #[error("Failed to fetch range")]
    FetchRange,
    #[error("Failed to append to range")]
    AppendRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Values are stored as given, nothing is parsed as a formula.
    Raw,
    UserEntered,
}

impl ValueInputOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppendSummary {
    pub updated_cells: Option<i32>,
    pub updated_range: Option<String>,
}

#[async_trait::async_trait]
pub trait SpreadsheetApi: Send + Sync {
    /// Declared row count of the first sheet's grid, empty rows included.
    async fn grid_row_count(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
    ) -> error_stack::Result<u32, SpreadsheetApiError>;

    async fn get_values(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetApiError>;

    async fn append_values(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
        range: &A1Notation,
        values: Vec<Vec<Value>>,
        input_option: ValueInputOption,
    ) -> error_stack::Result<AppendSummary, SpreadsheetApiError>;
}
