use std::path::Path;
use thiserror::Error;

use crate::domain::credential::ConsentGrant;

/// Read and write access to spreadsheets, nothing else.
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

#[derive(Error, Debug)]
pub enum ConsentFlowError {
    #[error("Failed to read client secret file")]
    ReadClientSecret,
    #[error("Consent flow failed: {0}")]
    FlowFailed(&'static str),
}

/// Interactive user consent, e.g. a browser round trip against a local redirect server.
#[async_trait::async_trait]
pub trait ConsentFlow: Send + Sync {
    async fn request_consent(
        &self,
        scopes: &[&str],
        client_secret_path: &Path,
    ) -> error_stack::Result<ConsentGrant, ConsentFlowError>;
}
