use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use error_stack::Report;
use serde::Serialize;
use tracing::error;

use crate::application::{authorizer::AuthError, sheet_error::SheetError};

pub const NO_DATA_FOUND: &str = "No data found";
pub const ERROR_WRITING_DATA: &str = "Error writing data";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Failure of a route. Decides how each failure is presented to the client:
/// "no data" and write failures are regular 200 responses carrying an `error`
/// field, everything else is a generic 500.
#[derive(Debug)]
pub enum ApiError {
    Authorization(Report<AuthError>),
    Sheet(Report<SheetError>),
}

impl From<Report<AuthError>> for ApiError {
    fn from(report: Report<AuthError>) -> Self {
        ApiError::Authorization(report)
    }
}

impl From<Report<SheetError>> for ApiError {
    fn from(report: Report<SheetError>) -> Self {
        ApiError::Sheet(report)
    }
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Sheet(report) => match report.current_context() {
                SheetError::NoData => (StatusCode::OK, NO_DATA_FOUND),
                SheetError::WriteFailed => (StatusCode::OK, ERROR_WRITING_DATA),
                SheetError::LastRow | SheetError::FetchRecords => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
                }
            },
            ApiError::Authorization(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        match &self {
            ApiError::Sheet(report) if *report.current_context() == SheetError::NoData => {}
            ApiError::Sheet(report) => error!("Error handling spreadsheet request: {:?}", report),
            ApiError::Authorization(report) => error!("Error authorizing request: {:?}", report),
        }
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_stack::report;

    #[test]
    fn test_no_data_is_ok_sentinel() {
        let error = ApiError::from(report!(SheetError::NoData));
        assert_eq!(error.status_and_message(), (StatusCode::OK, NO_DATA_FOUND));
    }

    #[test]
    fn test_write_failure_is_ok_with_error_body() {
        let error = ApiError::from(report!(SheetError::WriteFailed));
        assert_eq!(
            error.status_and_message(),
            (StatusCode::OK, ERROR_WRITING_DATA)
        );
    }

    #[test]
    fn test_remote_read_and_auth_failures_are_internal_errors() {
        for error in [
            ApiError::from(report!(SheetError::LastRow)),
            ApiError::from(report!(SheetError::FetchRecords)),
            ApiError::from(report!(AuthError::Consent)),
        ] {
            assert_eq!(
                error.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
