use thiserror::Error;

use crate::domain::credential::Credential;

#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Failed to read client secret file")]
    ReadClientSecret,
    #[error("Failed to write token file")]
    WriteToken,
}

#[async_trait::async_trait]
pub trait CredentialStore: Send + Sync {
    /// Loads the persisted credential. A missing or unparsable token is reported as `None`,
    /// callers cannot tell the two apart.
    async fn load(&self) -> Option<Credential>;

    /// Merges `refresh_token` with the client id and secret of the client secret file and
    /// overwrites the persisted token with the result.
    async fn save(
        &self,
        refresh_token: &str,
    ) -> error_stack::Result<Credential, CredentialStoreError>;
}
