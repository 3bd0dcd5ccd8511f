use error_stack::ResultExt;
use google_sheets4::oauth2;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::domain::credential::Credential;
use crate::ports::credential_store::{CredentialStore, CredentialStoreError};

/// Keeps the authorized-user token in a JSON file next to the client secret file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    token_path: PathBuf,
    credentials_path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(config: &SpreadsheetConfig) -> Self {
        Self {
            token_path: PathBuf::from(&*config.token_path),
            credentials_path: PathBuf::from(&*config.credentials_path),
        }
    }
}

#[async_trait::async_trait]
impl CredentialStore for FileCredentialStore {
    #[instrument(name = "FileCredentialStore::load")]
    async fn load(&self) -> Option<Credential> {
        let content = match tokio::fs::read(&self.token_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("No saved credential at {:?}: {}", self.token_path, err);
                return None;
            }
        };

        match serde_json::from_slice::<Credential>(&content) {
            Ok(credential) => Some(credential),
            Err(err) => {
                debug!("Ignoring unparsable credential {:?}: {}", self.token_path, err);
                None
            }
        }
    }

    #[instrument(name = "FileCredentialStore::save", skip(refresh_token))]
    async fn save(
        &self,
        refresh_token: &str,
    ) -> error_stack::Result<Credential, CredentialStoreError> {
        let content = tokio::fs::read(&self.credentials_path)
            .await
            .change_context(CredentialStoreError::ReadClientSecret)
            .attach_printable_lazy(|| format!("Path: {:?}", self.credentials_path))?;

        // Accepts both the `installed` and the `web` layout of the console download.
        let key = oauth2::parse_application_secret(&content)
            .change_context(CredentialStoreError::ReadClientSecret)
            .attach_printable_lazy(|| format!("Path: {:?}", self.credentials_path))?;

        let credential =
            Credential::authorized_user(key.client_id, key.client_secret, refresh_token);

        let payload =
            serde_json::to_vec(&credential).change_context(CredentialStoreError::WriteToken)?;
        tokio::fs::write(&self.token_path, payload)
            .await
            .change_context(CredentialStoreError::WriteToken)
            .attach_printable_lazy(|| format!("Path: {:?}", self.token_path))?;

        Ok(credential)
    }
}
