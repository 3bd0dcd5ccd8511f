use error_stack::{report, ResultExt};
use google_sheets4::{
    api::{Scope, ValueRange},
    Sheets,
};
use serde_json::Value;
use tracing::instrument;

use super::{
    auth,
    http_client::{HttpClient, HttpsConnector},
};
use crate::domain::{credential::Credential, sheets::a1_notation::A1Notation};
use crate::ports::spreadsheet_api::{
    AppendSummary, SpreadsheetApi, SpreadsheetApiError, ValueInputOption,
};

/// Sheets v4 client. A hub is built per call from the caller's credential.
pub struct GoogleSheetsClient {
    client: HttpClient,
}

impl std::fmt::Debug for GoogleSheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GoogleSheetsClient")
    }
}

impl GoogleSheetsClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    async fn hub(
        &self,
        credential: &Credential,
    ) -> error_stack::Result<Sheets<HttpsConnector>, SpreadsheetApiError> {
        let auth = auth::auth(credential, self.client.clone()).await?;
        Ok(Sheets::new(self.client.clone(), auth))
    }
}

#[async_trait::async_trait]
impl SpreadsheetApi for GoogleSheetsClient {
    #[instrument(skip(credential))]
    async fn grid_row_count(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
    ) -> error_stack::Result<u32, SpreadsheetApiError> {
        let response = self
            .hub(credential)
            .await?
            .spreadsheets()
            .get(spreadsheet_id)
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetApiError::FetchSpreadsheet)?;

        let row_count = response
            .1
            .sheets
            .and_then(|sheets| sheets.into_iter().next())
            .and_then(|sheet| sheet.properties)
            .and_then(|properties| properties.grid_properties)
            .and_then(|grid| grid.row_count)
            .ok_or(report!(SpreadsheetApiError::MissingField(
                "sheets[0].properties.gridProperties.rowCount"
            )))?;

        u32::try_from(row_count)
            .change_context(SpreadsheetApiError::MissingField(
                "sheets[0].properties.gridProperties.rowCount",
            ))
            .attach_printable_lazy(|| format!("Negative row count {}", row_count))
    }

    #[instrument(skip(credential))]
    async fn get_values(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<Value>>, SpreadsheetApiError> {
        let response = self
            .hub(credential)
            .await?
            .spreadsheets()
            .values_get(spreadsheet_id, range.as_ref())
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetApiError::FetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        // The service leaves `values` out entirely when the range is empty.
        Ok(response.1.values.unwrap_or_default())
    }

    #[instrument(skip(credential, values))]
    async fn append_values(
        &self,
        credential: &Credential,
        spreadsheet_id: &str,
        range: &A1Notation,
        values: Vec<Vec<Value>>,
        input_option: ValueInputOption,
    ) -> error_stack::Result<AppendSummary, SpreadsheetApiError> {
        let value_range = ValueRange {
            major_dimension: None,
            range: None,
            values: Some(values),
        };

        let response = self
            .hub(credential)
            .await?
            .spreadsheets()
            .values_append(value_range, spreadsheet_id, range.as_ref())
            .value_input_option(input_option.as_str())
            .add_scope(Scope::Spreadsheet)
            .doit()
            .await
            .change_context(SpreadsheetApiError::AppendRange)
            .attach_printable_lazy(|| format!("Failed to append to range {}", range))?;

        let updates = response.1.updates.unwrap_or_default();
        Ok(AppendSummary {
            updated_cells: updates.updated_cells,
            updated_range: updates.updated_range,
        })
    }
}
