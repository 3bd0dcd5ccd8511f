use error_stack::ResultExt;
use serde_json::Value;
use std::{fmt::Debug, sync::Arc};
use tracing::{info, instrument};

use super::sheet_error::SheetError;
use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::{
    credential::Credential,
    sheets::a1_notation::{CellPosition, ToA1Notation},
};
use crate::ports::spreadsheet_api::{AppendSummary, SpreadsheetApi, ValueInputOption};

pub struct SheetWriter {
    api: Arc<dyn SpreadsheetApi>,
    spreadsheet_id: Box<str>,
}

impl Debug for SheetWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SheetWriter {{ spreadsheet_id: {} }}", self.spreadsheet_id)
    }
}

impl SheetWriter {
    pub fn new(api: Arc<dyn SpreadsheetApi>, config: &SpreadsheetConfig) -> Self {
        Self {
            api,
            spreadsheet_id: config.spreadsheet_id.clone(),
        }
    }

    /// Appends `payload` after the existing table, values stored as-is.
    ///
    /// The payload is not inspected beyond being a list of rows. Anything else, and any
    /// failure reported by the service, is [`SheetError::WriteFailed`].
    #[instrument(name = "SheetWriter::write_data", skip(credential, payload))]
    pub async fn write_data(
        &self,
        credential: &Credential,
        payload: Value,
    ) -> error_stack::Result<AppendSummary, SheetError> {
        let values: Vec<Vec<Value>> = serde_json::from_value(payload)
            .change_context(SheetError::WriteFailed)
            .attach_printable("Payload is not a two-dimensional array")?;

        let anchor = CellPosition::origin().to_a1_notation();
        let summary = self
            .api
            .append_values(
                credential,
                &self.spreadsheet_id,
                &anchor,
                values,
                ValueInputOption::Raw,
            )
            .await
            .change_context(SheetError::WriteFailed)
            .attach_printable_lazy(|| format!("Failed to append at {}", anchor))?;

        info!(
            "{} cells updated on range: {}",
            summary.updated_cells.unwrap_or(0),
            summary.updated_range.as_deref().unwrap_or("<none>")
        );
        Ok(summary)
    }
}
