//! Checkout and order history.

use reqwest::Method;

use tienda_core::page::PageData;
use tienda_core::pager::{PageFetcher, Paginator};
use tienda_core::session::SessionStore;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::types::{NewOrder, Order};

impl<S: SessionStore> ApiClient<S> {
    /// Fetch one page of the order history of the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with status 401 when not logged in.
    pub async fn my_orders(&self, page: u32, size: u32) -> Result<PageData<Order>> {
        self.get_with(
            "/api/orders",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    /// Fetch a single order by its public SKU.
    ///
    /// Works without a credential so anonymous buyers can track their
    /// order from the SKU in the confirmation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the order does not exist or belongs
    /// to another user.
    pub async fn order(&self, sku: &str) -> Result<Order> {
        self.get(&format!("/api/orders/{sku}")).await
    }

    /// Place an order from the current cart.
    ///
    /// Routed to the anonymous checkout endpoint when no valid
    /// credential is stored.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the order is rejected.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order> {
        let path = if self.is_authenticated() {
            "/api/orders"
        } else {
            "/api/orders/anonymous"
        };
        self.send_json(Method::POST, path, order).await
    }

    /// A paginator over the order history.
    #[must_use]
    pub fn order_pager(&self) -> Paginator<Order, OrderPages<S>> {
        Paginator::with_page_size(
            OrderPages {
                client: self.clone(),
            },
            self.default_page_size(),
        )
    }
}

/// Page fetcher over the order history.
pub struct OrderPages<S> {
    client: ApiClient<S>,
}

impl<S: SessionStore> PageFetcher<Order> for OrderPages<S> {
    type Error = ApiError;

    async fn fetch_page(&self, page: u32, size: u32) -> Result<PageData<Order>> {
        self.client.my_orders(page, size).await
    }
}
