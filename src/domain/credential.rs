use serde::{Deserialize, Serialize};

pub const AUTHORIZED_USER: &str = "authorized_user";

/// Authorized-user token record, stored on disk as
/// `{type, client_id, client_secret, refresh_token}`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credential {
    #[serde(rename = "type")]
    pub key_type: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Credential {
    pub fn authorized_user(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Credential {
            key_type: AUTHORIZED_USER.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Credential {{ type: {}, client_id: {} }}",
            self.key_type, self.client_id
        )
    }
}

/// What the interactive consent flow handed back.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConsentGrant {
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for ConsentGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConsentGrant {{ has_refresh_token: {} }}",
            self.refresh_token.is_some()
        )
    }
}
