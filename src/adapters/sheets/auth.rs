use error_stack::ResultExt;
use google_sheets4::oauth2::{
    self, authenticator::Authenticator, authorized_user::AuthorizedUserSecret,
};

use super::http_client::{HttpClient, HttpsConnector};
use crate::domain::credential::Credential;
use crate::ports::spreadsheet_api::SpreadsheetApiError;

/// Builds an authenticator that trades the credential's refresh token for access tokens.
pub async fn auth(
    credential: &Credential,
    client: HttpClient,
) -> error_stack::Result<Authenticator<HttpsConnector>, SpreadsheetApiError> {
    // The token file and the authorized-user secret share one JSON layout.
    let secret: AuthorizedUserSecret = serde_json::to_value(credential)
        .and_then(serde_json::from_value)
        .change_context(SpreadsheetApiError::Authentication)
        .attach_printable("Credential is not a valid authorized-user secret")?;

    oauth2::AuthorizedUserAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(SpreadsheetApiError::Authentication)
        .attach_printable("Could not create an authenticator")
}
