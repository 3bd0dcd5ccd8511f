use thiserror::Error;

/// Failure of a read or write against the configured spreadsheet.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetError {
    #[error("Failed to fetch the last row of the sheet")]
    LastRow,
    #[error("Failed to fetch records")]
    FetchRecords,
    #[error("No data found")]
    NoData,
    #[error("Error writing data")]
    WriteFailed,
}
