//! Profile and address management.

use reqwest::Method;
use tracing::warn;

use tienda_core::session::SessionStore;
use tienda_core::types::{AddressId, UserProfile};

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Address, NewAddress, ProfileUpdate};

impl<S: SessionStore> ApiClient<S> {
    /// Fetch the profile of the logged-in user and refresh the cache.
    ///
    /// If the API rejects the credential the local session is cleared,
    /// so a stale token does not keep resurfacing.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 401 if the credential is
    /// rejected.
    pub async fn me(&self) -> Result<UserProfile> {
        match self.get::<UserProfile>("/api/me").await {
            Ok(user) => {
                self.session().set_cached_user(&user)?;
                Ok(user)
            }
            Err(err) if err.is_unauthorized() => {
                warn!("credential rejected by /api/me, clearing session");
                self.session().clear()?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Update email and/or display name of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the update is rejected.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let user: UserProfile = self.send_json(Method::PUT, "/api/me", update).await?;
        self.session().set_cached_user(&user)?;
        Ok(user)
    }

    /// List the saved addresses of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn addresses(&self) -> Result<Vec<Address>> {
        self.get("/api/addresses").await
    }

    /// Save a new address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the address is rejected.
    pub async fn create_address(&self, address: &NewAddress) -> Result<Address> {
        self.send_json(Method::POST, "/api/addresses", address).await
    }

    /// Update an existing address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the address does not exist or the
    /// update is rejected.
    pub async fn update_address(&self, id: AddressId, address: &NewAddress) -> Result<Address> {
        self.send_json(Method::PUT, &format!("/api/address/{id}"), address)
            .await
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the address does not exist.
    pub async fn delete_address(&self, id: AddressId) -> Result<()> {
        let _: serde_json::Value = self
            .send_empty(Method::DELETE, &format!("/api/address/{id}"))
            .await?;
        Ok(())
    }
}
