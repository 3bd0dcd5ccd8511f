pub mod auth;
pub mod consent_flow;
pub mod credential_store;
pub mod http_client;
pub mod spreadsheet_client;
