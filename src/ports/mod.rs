pub mod consent_flow;
pub mod credential_store;
pub mod spreadsheet_api;
