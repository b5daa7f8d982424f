//! Login endpoints

use super::{AdminClient, error::ClientError};
use crate::types::LoginResponse;
use prescripto_core::{Credentials, LoginOutcome, Role};
use reqwest::Method;

impl AdminClient {
    /// Post credentials to the login endpoint of `role`
    pub async fn login(
        &self,
        role: Role,
        credentials: &Credentials,
    ) -> Result<LoginResponse, ClientError> {
        let request = self
            .request(Method::POST, self.config().login_path(role))
            .json(credentials);
        self.execute(request).await
    }

    /// Run one login attempt and classify the result
    ///
    /// Never fails: transport and status errors become
    /// [`LoginOutcome::Failed`] carrying the server's message when it sent one.
    #[tracing::instrument(skip(self, credentials))]
    pub async fn authenticate(&self, role: Role, credentials: &Credentials) -> LoginOutcome {
        match self.login(role, credentials).await {
            Ok(LoginResponse {
                success: true,
                token: Some(token),
                ..
            }) if !token.is_empty() => LoginOutcome::SignedIn { role, token },
            Ok(LoginResponse { success: true, .. }) => {
                tracing::warn!("Login reported success without a token");
                LoginOutcome::failed(None)
            }
            Ok(LoginResponse { message, .. }) => {
                tracing::info!(?message, "Login rejected");
                LoginOutcome::rejected(message)
            }
            Err(err) => {
                tracing::warn!(%err, "Login request failed");
                LoginOutcome::failed(err.server_message().map(str::to_string))
            }
        }
    }
}
