use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use super::api_error::ApiResult;
use crate::application::{
    authorizer::Authorizer, sheet_reader::SheetReader, sheet_writer::SheetWriter,
};
use crate::domain::record::Record;

/// State that's passed to all handlers.
#[derive(Debug)]
pub struct ServerState {
    pub authorizer: Authorizer,
    pub reader: SheetReader,
    pub writer: SheetWriter,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WriteResponse {
    pub success: bool,
}

#[instrument(skip(state))]
pub async fn read_records(State(state): State<Arc<ServerState>>) -> ApiResult<Json<Vec<Record>>> {
    let credential = state.authorizer.authorize().await?;
    let records = state.reader.list_records(&credential).await?;
    Ok(Json(records))
}

/// The body is forwarded as-is. A body that is empty or not JSON becomes `null`, which the
/// writer rejects like any other payload it cannot append.
#[instrument(skip(state, body))]
pub async fn write_rows(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ApiResult<Json<WriteResponse>> {
    let payload = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);
    info!("Received rows: {}", payload);

    let credential = state.authorizer.authorize().await?;
    state.writer.write_data(&credential, payload).await?;
    Ok(Json(WriteResponse { success: true }))
}
