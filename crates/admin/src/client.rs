//! Back-office client wrapping the storefront HTTP core.

use tienda_core::session::SessionStore;
use tienda_storefront::ApiClient;

/// Client for the staff-only endpoints under `/api/admin`.
///
/// Wraps an [`ApiClient`] so the session, connection pool, and
/// envelope handling are shared with the customer-facing surface.
/// Cheap to clone.
pub struct AdminClient<S> {
    api: ApiClient<S>,
}

impl<S> Clone for AdminClient<S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<S: SessionStore> AdminClient<S> {
    /// Wrap a storefront client.
    #[must_use]
    pub fn new(api: ApiClient<S>) -> Self {
        Self { api }
    }

    /// The underlying storefront client.
    #[must_use]
    pub fn api(&self) -> &ApiClient<S> {
        &self.api
    }
}
