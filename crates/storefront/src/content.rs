//! Static informational content.

use tienda_core::session::SessionStore;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AboutSection, Faq, Policy};

impl<S: SessionStore> ApiClient<S> {
    /// Fetch the sections of the about page.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn about(&self) -> Result<Vec<AboutSection>> {
        self.get("/api/about").await
    }

    /// Fetch the FAQ entries.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn faqs(&self) -> Result<Vec<Faq>> {
        self.get("/api/faqs").await
    }

    /// Fetch the store policy documents.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn policies(&self) -> Result<Vec<Policy>> {
        self.get("/api/policies").await
    }
}
