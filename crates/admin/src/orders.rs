//! Order fulfilment.

use reqwest::Method;
use tracing::info;

use tienda_core::page::PageData;
use tienda_core::pager::{PageFetcher, Paginator};
use tienda_core::session::SessionStore;
use tienda_core::types::OrderStatus;
use tienda_storefront::{ApiError, Order, Result};

use crate::client::AdminClient;
use crate::types::OrderStatusChange;
use crate::users::page_query;

impl<S: SessionStore> AdminClient<S> {
    /// Fetch one page of all orders in the store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the caller lacks permission.
    pub async fn orders(&self, page: u32, size: u32) -> Result<PageData<Order>> {
        self.api()
            .get_with("/api/admin/orders", &page_query(page, size))
            .await
    }

    /// Move an order to a new status.
    ///
    /// The remote API owns the legal-transition rules and rejects
    /// anything else.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the transition is illegal or the
    /// order does not exist.
    pub async fn change_order_status(&self, sku: &str, status: OrderStatus) -> Result<Order> {
        let order: Order = self
            .api()
            .send_json(
                Method::PATCH,
                &format!("/api/admin/orders/{sku}/status"),
                &OrderStatusChange { status },
            )
            .await?;
        info!(order = sku, status = %status, "order status changed");
        Ok(order)
    }

    /// A paginator over all orders.
    #[must_use]
    pub fn admin_order_pager(&self) -> Paginator<Order, AdminOrderPages<S>> {
        Paginator::with_page_size(
            AdminOrderPages {
                client: self.clone(),
            },
            self.api().default_page_size(),
        )
    }
}

/// Page fetcher over all orders in the store.
pub struct AdminOrderPages<S> {
    client: AdminClient<S>,
}

impl<S: SessionStore> PageFetcher<Order> for AdminOrderPages<S> {
    type Error = ApiError;

    async fn fetch_page(&self, page: u32, size: u32) -> Result<PageData<Order>> {
        self.client.orders(page, size).await
    }
}
