//! Tienda Storefront - Customer-facing API client.
//!
//! Typed access to the remote storefront HTTP API: authentication,
//! catalog browsing, cart, checkout, order history, profile and
//! address management, static content, and the scripted chat proxy.
//!
//! All business logic (pricing, tax, inventory, order lifecycle)
//! lives behind the remote API; this crate owns the request plumbing,
//! the session headers, and the wire types.
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_core::session::MemoryStore;
//! use tienda_storefront::{ApiClient, ClientConfig, ProductFilter};
//!
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config, MemoryStore::new())?;
//!
//! let page = client.products(&ProductFilter::default(), 0, 12).await?;
//! for product in page.content {
//!     println!("{} - {}", product.sku, product.name);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod account;
mod auth;
mod cart;
mod catalog;
mod chat;
mod client;
mod config;
mod content;
mod envelope;
mod error;
mod orders;
mod session_store;
mod types;

pub use catalog::{CategoryPages, ProductPages};
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use envelope::{Envelope, ErrorDetail};
pub use error::{ApiError, Result};
pub use orders::OrderPages;
pub use session_store::JsonFileStore;
pub use types::*;
