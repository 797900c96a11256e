//! Shopping cart operations.
//!
//! The API keys carts on the `X-Session-ID` header for anonymous
//! visitors and on the credential for logged-in users, so every
//! operation here works in both states.

use reqwest::Method;

use tienda_core::session::SessionStore;
use tienda_core::types::CartItemId;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{AddItem, Cart};

impl<S: SessionStore> ApiClient<S> {
    /// Fetch the current cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn cart(&self) -> Result<Cart> {
        self.get("/api/cart").await
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the product is unknown or out of
    /// stock.
    pub async fn add_item(&self, product_sku: &str, quantity: u32) -> Result<Cart> {
        let item = AddItem {
            product_sku: product_sku.to_string(),
            quantity,
        };
        self.send_json(Method::POST, "/api/cart/items", &item).await
    }

    /// Set the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the line does not exist or the
    /// quantity exceeds stock.
    pub async fn update_quantity(&self, item: CartItemId, quantity: u32) -> Result<Cart> {
        self.send_empty(
            Method::PATCH,
            &format!("/api/cart/items/{item}?quantity={quantity}"),
        )
        .await
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the line does not exist.
    pub async fn remove_item(&self, item: CartItemId) -> Result<Cart> {
        self.send_empty(Method::DELETE, &format!("/api/cart/items/{item}"))
            .await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn clear_cart(&self) -> Result<Cart> {
        self.send_empty(Method::DELETE, "/api/cart").await
    }

    /// Merge items into the account cart.
    ///
    /// Called with an empty slice right after login to fold the
    /// anonymous cart (identified by `X-Session-ID`) into the account
    /// cart; extra items can be pushed in the same call.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the request is rejected.
    pub async fn merge_cart(&self, items: &[AddItem]) -> Result<Cart> {
        self.send_json(Method::POST, "/api/cart/merge", items).await
    }
}
