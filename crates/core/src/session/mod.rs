//! Session lifecycle: credential, cached profile, anonymous identity.
//!
//! [`SessionManager`] is the single source of truth for the three
//! persisted session entries. Reads are forgiving (corrupt or invalid
//! entries degrade to absent); the only write that can be rejected is
//! storing an invalid credential.

pub mod credential;
mod store;

pub use credential::CredentialError;
pub use store::{MemoryStore, SessionStore, StoreError};

use crate::types::UserProfile;

/// Storage keys for session data.
pub mod keys {
    /// Key for the bearer credential.
    pub const AUTH_TOKEN: &str = "auth_token";

    /// Key for the cached user profile snapshot.
    pub const USER_DATA: &str = "user_data";

    /// Key for the anonymous session identifier.
    pub const SESSION_ID: &str = "session_id";
}

/// Errors from session write operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The credential failed structural validation; nothing was written.
    #[error("invalid credential: {0}")]
    InvalidCredential(#[from] CredentialError),

    /// The backing store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the lifecycle of the session's persisted state.
///
/// Generic over the injected [`SessionStore`] so it runs against an
/// in-memory fake in tests and a durable store in production.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The stored credential, only if it still passes validation.
    ///
    /// Read-only: an invalid or expired entry is reported as absent
    /// but not deleted. Callers that need a clean slate call
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn token(&self) -> Option<String> {
        let raw = match self.store.get(keys::AUTH_TOKEN) {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read credential from store");
                return None;
            }
        };

        // Junk some storage layers persist for "no value".
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "undefined" {
            return None;
        }

        match credential::validate(trimmed) {
            Ok(()) => Some(trimmed.to_string()),
            Err(err) => {
                tracing::debug!(error = %err, "stored credential is not usable");
                None
            }
        }
    }

    /// The cached profile snapshot, if storage holds one that parses.
    ///
    /// Never fails: corrupt entries degrade to `None`.
    #[must_use]
    pub fn cached_user(&self) -> Option<UserProfile> {
        let raw = match self.store.get(keys::USER_DATA) {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read cached profile from store");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::debug!(error = %err, "cached profile is corrupt, treating as absent");
                None
            }
        }
    }

    /// The anonymous session identifier, generating and persisting a
    /// fresh one if none exists. Idempotent until [`clear`](Self::clear).
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if a freshly generated identifier
    /// cannot be persisted.
    pub fn anonymous_id(&self) -> Result<String, StoreError> {
        if let Some(existing) = self.store.get(keys::SESSION_ID)?
            && !existing.is_empty()
        {
            return Ok(existing);
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.store.set(keys::SESSION_ID, &id)?;
        Ok(id)
    }

    /// Validate and persist a credential.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidCredential`] without writing if
    /// the token fails validation, or [`SessionError::Store`] if the
    /// write fails.
    pub fn set_credential(&self, token: &str) -> Result<(), SessionError> {
        let trimmed = token.trim();
        credential::validate(trimmed)?;
        self.store.set(keys::AUTH_TOKEN, trimmed)?;
        Ok(())
    }

    /// Persist the profile snapshot verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the write fails.
    pub fn set_cached_user(&self, profile: &UserProfile) -> Result<(), SessionError> {
        let json = serde_json::to_string(profile)
            .map_err(|err| StoreError::Corrupt(err.to_string()))?;
        self.store.set(keys::USER_DATA, &json)?;
        Ok(())
    }

    /// Delete credential, cached profile, and anonymous identifier as
    /// one logical unit.
    ///
    /// Every key is attempted even when an earlier removal fails, so
    /// no partial-clear state is exposed on a healthy store.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] encountered.
    pub fn clear(&self) -> Result<(), StoreError> {
        let results = [
            self.store.remove(keys::AUTH_TOKEN),
            self.store.remove(keys::USER_DATA),
            self.store.remove(keys::SESSION_ID),
        ];
        results.into_iter().collect()
    }
}
