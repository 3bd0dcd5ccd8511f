use error_stack::ResultExt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use sheets_proxy::adapters::{
    config::app_config::AppConfig,
    http::{handlers::ServerState, router},
    logging,
    sheets::{
        consent_flow::InstalledFlowConsent, credential_store::FileCredentialStore,
        http_client::http_client, spreadsheet_client::GoogleSheetsClient,
    },
};
use sheets_proxy::application::{
    authorizer::Authorizer, sheet_reader::SheetReader, sheet_writer::SheetWriter,
};

#[derive(Error, Debug)]
enum StartupError {
    #[error("Failed to load configuration")]
    Config,
    #[error("Failed to set up logging")]
    Logging,
    #[error("Failed to build the HTTPS client")]
    HttpClient,
    #[error("Server failed")]
    Server,
}

fn build_state(config: &AppConfig) -> error_stack::Result<ServerState, StartupError> {
    let client = http_client().change_context(StartupError::HttpClient)?;
    let api = Arc::new(GoogleSheetsClient::new(client.clone()));

    Ok(ServerState {
        authorizer: Authorizer::new(
            Arc::new(FileCredentialStore::new(&config.sheets)),
            Arc::new(InstalledFlowConsent::new(client)),
            &*config.sheets.credentials_path,
        ),
        reader: SheetReader::new(api.clone(), &config.sheets),
        writer: SheetWriter::new(api, &config.sheets),
    })
}

#[tokio::main]
async fn main() -> error_stack::Result<(), StartupError> {
    let config = AppConfig::load().change_context(StartupError::Config)?;
    logging::setup_tracing(&config.logging).change_context(StartupError::Logging)?;
    logging::setup_panic_hook();

    info!("Starting sheets-proxy for spreadsheet {}", config.sheets.spreadsheet_id);

    let state = Arc::new(build_state(&config)?);
    router::serve(&config.server, state)
        .await
        .inspect_err(|report| error!("Server failed: {:?}", report))
        .change_context(StartupError::Server)
}
