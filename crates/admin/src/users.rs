//! User administration and the audit trail.

use reqwest::Method;
use tracing::info;

use tienda_core::page::PageData;
use tienda_core::pager::{PageFetcher, Paginator};
use tienda_core::session::SessionStore;
use tienda_core::types::{Role, UserId, UserProfile};
use tienda_storefront::{ApiError, Result};

use crate::client::AdminClient;
use crate::types::{AuditLog, RoleChange};

impl<S: SessionStore> AdminClient<S> {
    /// Fetch one page of registered users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the caller lacks permission.
    pub async fn users(&self, page: u32, size: u32) -> Result<PageData<UserProfile>> {
        self.api()
            .get_with("/api/admin/users", &page_query(page, size))
            .await
    }

    /// Assign a new role to a user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the caller lacks permission or the
    /// user does not exist.
    pub async fn change_role(&self, user: UserId, role: Role) -> Result<UserProfile> {
        let updated: UserProfile = self
            .api()
            .send_json(
                Method::PUT,
                &format!("/api/admin/users/{user}/role"),
                &RoleChange { role },
            )
            .await?;
        info!(user = %user, role = %role, "role changed");
        Ok(updated)
    }

    /// Fetch one page of the audit trail, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` if the caller lacks permission.
    pub async fn audit_logs(&self, page: u32, size: u32) -> Result<PageData<AuditLog>> {
        self.api()
            .get_with("/api/admin/audit-logs", &page_query(page, size))
            .await
    }

    /// A paginator over registered users.
    #[must_use]
    pub fn user_pager(&self) -> Paginator<UserProfile, UserPages<S>> {
        Paginator::with_page_size(
            UserPages {
                client: self.clone(),
            },
            self.api().default_page_size(),
        )
    }
}

pub(crate) fn page_query(page: u32, size: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("size", size.to_string())]
}

/// Page fetcher over registered users.
pub struct UserPages<S> {
    client: AdminClient<S>,
}

impl<S: SessionStore> PageFetcher<UserProfile> for UserPages<S> {
    type Error = ApiError;

    async fn fetch_page(&self, page: u32, size: u32) -> Result<PageData<UserProfile>> {
        self.client.users(page, size).await
    }
}
