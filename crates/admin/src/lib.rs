//! Tienda Admin - Staff-facing API client.
//!
//! Back-office operations layered on the storefront client: user role
//! management, order fulfilment, catalog administration with image
//! upload, audit logs, and the role-gated dashboard snapshot.
//!
//! Every operation requires a staff credential; the remote API
//! enforces the actual permissions, this crate only pre-gates the
//! dashboard composition on the locally cached role.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod catalog;
mod client;
mod dashboard;
mod orders;
mod types;
mod users;

pub use client::AdminClient;
pub use dashboard::DashboardData;
pub use orders::AdminOrderPages;
pub use types::*;
pub use users::UserPages;
