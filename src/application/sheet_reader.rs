use error_stack::{report, ResultExt};
use std::{fmt::Debug, sync::Arc};
use tracing::{info, instrument};

use super::sheet_error::SheetError;
use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::{
    credential::Credential,
    record::Record,
    sheets::{
        a1_notation::{CellRange, ToA1Notation},
        row::Row,
    },
};
use crate::ports::spreadsheet_api::SpreadsheetApi;

pub struct SheetReader {
    api: Arc<dyn SpreadsheetApi>,
    spreadsheet_id: Box<str>,
}

impl Debug for SheetReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SheetReader {{ spreadsheet_id: {} }}", self.spreadsheet_id)
    }
}

impl SheetReader {
    pub fn new(api: Arc<dyn SpreadsheetApi>, config: &SpreadsheetConfig) -> Self {
        Self {
            api,
            spreadsheet_id: config.spreadsheet_id.clone(),
        }
    }

    /// Declared grid row count of the first sheet. This is the sheet's capacity, trailing
    /// empty rows are counted too.
    #[instrument(name = "SheetReader::last_row", skip(credential))]
    pub async fn last_row(
        &self,
        credential: &Credential,
    ) -> error_stack::Result<Row, SheetError> {
        let row_count = self
            .api
            .grid_row_count(credential, &self.spreadsheet_id)
            .await
            .change_context(SheetError::LastRow)?;

        info!("Last row with data: {}", row_count);
        Ok(Row::from_row(row_count))
    }

    /// Reads `A1:D{last_row}`, drops the header row and maps every other row to a [`Record`].
    /// An empty result is [`SheetError::NoData`].
    #[instrument(name = "SheetReader::list_records", skip(credential))]
    pub async fn list_records(
        &self,
        credential: &Credential,
    ) -> error_stack::Result<Vec<Record>, SheetError> {
        let last_row = self.last_row(credential).await?;
        let range = CellRange::table_through(last_row).to_a1_notation();

        let rows = self
            .api
            .get_values(credential, &self.spreadsheet_id, &range)
            .await
            .change_context(SheetError::FetchRecords)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        let records = rows
            .into_iter()
            .skip(1)
            .map(Record::from)
            .collect::<Vec<_>>();

        if records.is_empty() {
            info!("No data found.");
            return Err(report!(SheetError::NoData));
        }

        Ok(records)
    }
}
