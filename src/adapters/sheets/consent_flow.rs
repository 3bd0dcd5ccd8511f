use error_stack::ResultExt;
use google_sheets4::oauth2::{
    self,
    storage::{TokenInfo, TokenStorage},
    InstalledFlowReturnMethod,
};
use std::{path::Path, sync::Arc};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::http_client::HttpClient;
use crate::domain::credential::ConsentGrant;
use crate::ports::consent_flow::{ConsentFlow, ConsentFlowError};

/// Installed-application flow: prints a consent URL and waits for the redirect on a local
/// port.
pub struct InstalledFlowConsent {
    client: HttpClient,
}

impl std::fmt::Debug for InstalledFlowConsent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstalledFlowConsent")
    }
}

impl InstalledFlowConsent {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

/// Keeps the token issued by the flow in memory so the refresh token can be read back.
#[derive(Clone, Default)]
struct CapturedToken(Arc<RwLock<Option<TokenInfo>>>);

#[async_trait::async_trait]
impl TokenStorage for CapturedToken {
    async fn set(&self, _scopes: &[&str], token: TokenInfo) -> anyhow::Result<()> {
        self.0.write().await.replace(token);
        Ok(())
    }

    async fn get(&self, _scopes: &[&str]) -> Option<TokenInfo> {
        self.0.read().await.clone()
    }
}

#[async_trait::async_trait]
impl ConsentFlow for InstalledFlowConsent {
    #[instrument(name = "InstalledFlowConsent::request_consent")]
    async fn request_consent(
        &self,
        scopes: &[&str],
        client_secret_path: &Path,
    ) -> error_stack::Result<ConsentGrant, ConsentFlowError> {
        let secret = oauth2::read_application_secret(client_secret_path)
            .await
            .change_context(ConsentFlowError::ReadClientSecret)
            .attach_printable_lazy(|| format!("Path: {:?}", client_secret_path))?;

        let captured = CapturedToken::default();
        let auth = oauth2::InstalledFlowAuthenticator::with_client(
            secret,
            InstalledFlowReturnMethod::HTTPRedirect,
            self.client.clone(),
        )
        .with_storage(Box::new(captured.clone()))
        // Without `prompt=consent` a user who already authorized the app gets no refresh token.
        .force_account_selection(true)
        .build()
        .await
        .change_context(ConsentFlowError::FlowFailed("could not start the installed flow"))?;

        info!("Waiting for user consent in the browser");
        auth.token(scopes)
            .await
            .change_context(ConsentFlowError::FlowFailed("authorization was not granted"))?;

        let refresh_token = captured
            .0
            .read()
            .await
            .as_ref()
            .and_then(|token| token.refresh_token.clone());

        Ok(ConsentGrant { refresh_token })
    }
}
