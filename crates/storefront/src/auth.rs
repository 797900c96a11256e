//! Authentication operations.

use reqwest::Method;
use tracing::{info, warn};

use tienda_core::session::SessionStore;
use tienda_core::types::UserProfile;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AuthSession, LoginInput, PasswordChange, RegisterInput};

impl<S: SessionStore> ApiClient<S> {
    /// Log in and persist the returned credential.
    ///
    /// After a successful login any cart built anonymously is merged
    /// into the account cart; a merge failure does not fail the login.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the credentials are rejected,
    /// `ApiError::Session` if the credential cannot be stored.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let input = LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthSession = self
            .send_json(Method::POST, "/api/auth/login", &input)
            .await?;

        self.session().set_credential(&auth.token)?;
        self.session().set_cached_user(&auth.user)?;
        info!(email = %auth.user.email, "logged in");

        if let Err(err) = self.merge_cart(&[]).await {
            warn!(error = %err, "cart merge after login failed");
        }

        Ok(auth.user)
    }

    /// Register a new account and persist the returned credential.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if registration is rejected,
    /// `ApiError::Session` if the credential cannot be stored.
    pub async fn register(&self, input: &RegisterInput) -> Result<UserProfile> {
        let auth: AuthSession = self
            .send_json(Method::POST, "/api/auth/register", input)
            .await?;

        self.session().set_credential(&auth.token)?;
        self.session().set_cached_user(&auth.user)?;
        info!(email = %auth.user.email, "registered");

        Ok(auth.user)
    }

    /// Clear all local session state.
    ///
    /// Purely local: the API holds no server-side session to revoke.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` if the session store fails.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        info!("logged out");
        Ok(())
    }

    /// Change the password of the logged-in account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the old password is rejected.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let input = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        let _: serde_json::Value = self
            .send_json(Method::PUT, "/api/auth/password", &input)
            .await?;
        Ok(())
    }
}
