use error_stack::{report, ResultExt};
use std::{fmt::Debug, path::PathBuf, sync::Arc};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::domain::credential::Credential;
use crate::ports::{
    consent_flow::{ConsentFlow, SPREADSHEETS_SCOPE},
    credential_store::CredentialStore,
};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Interactive consent failed")]
    Consent,
    #[error("Consent completed without a refresh token")]
    MissingRefreshToken,
    #[error("Failed to persist credential")]
    PersistCredential,
}

pub struct Authorizer {
    store: Arc<dyn CredentialStore>,
    consent_flow: Arc<dyn ConsentFlow>,
    client_secret_path: PathBuf,
    consent_lock: Mutex<()>,
}

impl Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Authorizer {{ client_secret_path: {:?} }}",
            self.client_secret_path
        )
    }
}

impl Authorizer {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        consent_flow: Arc<dyn ConsentFlow>,
        client_secret_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            consent_flow,
            client_secret_path: client_secret_path.into(),
            consent_lock: Mutex::new(()),
        }
    }

    /// Returns the saved credential, or runs the consent flow once and saves its result.
    #[instrument(name = "Authorizer::authorize")]
    pub async fn authorize(&self) -> error_stack::Result<Credential, AuthError> {
        if let Some(credential) = self.store.load().await {
            return Ok(credential);
        }

        // -- CONSENT LOCK --
        let _guard = self.consent_lock.lock().await;

        // Another request may have completed consent while we were waiting.
        if let Some(credential) = self.store.load().await {
            return Ok(credential);
        }

        info!("No saved credential, starting interactive consent");
        let grant = self
            .consent_flow
            .request_consent(&[SPREADSHEETS_SCOPE], &self.client_secret_path)
            .await
            .change_context(AuthError::Consent)?;

        let refresh_token = grant
            .refresh_token
            .ok_or(report!(AuthError::MissingRefreshToken))?;

        let credential = self
            .store
            .save(&refresh_token)
            .await
            .change_context(AuthError::PersistCredential)?;

        info!("Saved credential for client {}", credential.client_id);
        Ok(credential)
        // -- END CONSENT LOCK --
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeConsentFlow, InMemoryCredentialStore};

    fn authorizer(
        store: &Arc<InMemoryCredentialStore>,
        flow: &Arc<FakeConsentFlow>,
    ) -> Authorizer {
        Authorizer::new(store.clone(), flow.clone(), "credentials.json")
    }

    #[tokio::test]
    async fn test_saved_credential_skips_consent() {
        let saved = Credential::authorized_user("id", "secret", "saved-refresh");
        let store = Arc::new(InMemoryCredentialStore::with_credential(saved.clone()));
        let flow = Arc::new(FakeConsentFlow::granting("fresh-refresh"));

        let credential = authorizer(&store, &flow).authorize().await.unwrap();

        assert_eq!(credential, saved);
        assert_eq!(flow.calls(), 0);
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_runs_consent_once_and_saves() {
        let store = Arc::new(InMemoryCredentialStore::empty());
        let flow = Arc::new(FakeConsentFlow::granting("fresh-refresh"));
        let authorizer = authorizer(&store, &flow);

        let first = authorizer.authorize().await.unwrap();
        let second = authorizer.authorize().await.unwrap();

        assert_eq!(first.refresh_token, "fresh-refresh");
        assert_eq!(first, second);
        assert_eq!(flow.calls(), 1);
        assert_eq!(store.saves(), 1);
        assert_eq!(flow.requested_scopes(), vec![SPREADSHEETS_SCOPE.to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_first_authorizations_share_one_consent() {
        let store = Arc::new(InMemoryCredentialStore::empty());
        let flow = Arc::new(FakeConsentFlow::granting("fresh-refresh"));
        let authorizer = Arc::new(authorizer(&store, &flow));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let authorizer = Arc::clone(&authorizer);
                tokio::spawn(async move { authorizer.authorize().await.map(|_| ()) })
            })
            .collect();
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(flow.calls(), 1);
        assert_eq!(store.saves(), 1);
    }

    #[tokio::test]
    async fn test_consent_without_refresh_token_fails() {
        let store = Arc::new(InMemoryCredentialStore::empty());
        let flow = Arc::new(FakeConsentFlow::without_refresh_token());

        let report = authorizer(&store, &flow).authorize().await.unwrap_err();

        assert!(matches!(
            report.current_context(),
            AuthError::MissingRefreshToken
        ));
        assert_eq!(store.saves(), 0);
    }

    #[tokio::test]
    async fn test_consent_failure_propagates() {
        let store = Arc::new(InMemoryCredentialStore::empty());
        let flow = Arc::new(FakeConsentFlow::failing());

        let report = authorizer(&store, &flow).authorize().await.unwrap_err();

        assert!(matches!(report.current_context(), AuthError::Consent));
    }

    #[tokio::test]
    async fn test_missing_client_secret_fails_persist() {
        let store = Arc::new(InMemoryCredentialStore::without_client_secret());
        let flow = Arc::new(FakeConsentFlow::granting("fresh-refresh"));

        let report = authorizer(&store, &flow).authorize().await.unwrap_err();

        assert!(matches!(
            report.current_context(),
            AuthError::PersistCredential
        ));
    }
}
