//! Tienda Core - Shared types and core engines.
//!
//! This crate provides the pieces shared by every Tienda component:
//! - `storefront` - Customer-facing API client
//! - `admin` - Administration API client
//! - `cli` - Command-line frontend
//!
//! # Architecture
//!
//! The core crate talks to no network and no filesystem. The only
//! capability it consumes is the injected [`session::SessionStore`]
//! key-value abstraction, which keeps everything here testable with
//! in-memory fakes.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, roles, statuses, user profiles
//! - [`session`] - Credential lifecycle and anonymous session identity
//! - [`page`] - Paginated response envelope
//! - [`pager`] - Page-by-page resource loader

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod page;
pub mod pager;
pub mod session;
pub mod types;

pub use page::PageData;
pub use pager::{PageFetcher, Paginator};
pub use session::{SessionManager, SessionStore};
pub use types::*;
