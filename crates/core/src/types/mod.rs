//! Core types for Tienda.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod role;
pub mod status;
pub mod user;

pub use email::{Email, EmailError};
pub use id::*;
pub use role::{Capability, Role};
pub use status::{Intent, OrderStatus};
pub use user::UserProfile;
