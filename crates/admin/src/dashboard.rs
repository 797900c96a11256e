//! Role-gated dashboard snapshot.

use tienda_core::page::PageData;
use tienda_core::session::SessionStore;
use tienda_core::types::{Capability, Role, UserProfile};
use tienda_storefront::{Category, Order, Product, ProductFilter, Result};

use crate::client::AdminClient;

/// First page of everything a staff member's dashboard shows.
///
/// The shape is decided locally from the role's capabilities, so a
/// shipping manager never even requests catalog data it cannot see.
#[derive(Debug)]
pub enum DashboardData {
    /// Full overview: catalog plus order flow.
    Admin {
        products: PageData<Product>,
        categories: PageData<Category>,
        orders: PageData<Order>,
    },
    /// Catalog only.
    Inventory {
        products: PageData<Product>,
        categories: PageData<Category>,
    },
    /// Order flow only.
    Shipping { orders: PageData<Order> },
    /// No staff capabilities.
    None,
}

impl<S: SessionStore> AdminClient<S> {
    /// Load the dashboard snapshot for the given role.
    ///
    /// The sections a role can see are fetched concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` of any section fetch.
    pub async fn dashboard(&self, role: Role) -> Result<DashboardData> {
        let size = self.api().default_page_size();
        let catalog = role.can(Capability::ManageProducts);
        let fulfilment = role.can(Capability::ManageOrders);

        // Catalog sections come from the public listing endpoints,
        // same as the storefront; only the order feed is admin-only.
        let filter = ProductFilter::default();

        match (catalog, fulfilment) {
            (true, true) => {
                let (products, categories, orders) = tokio::try_join!(
                    self.api().products(&filter, 0, size),
                    self.api().categories(None, 0, size),
                    self.orders(0, size),
                )?;
                Ok(DashboardData::Admin {
                    products,
                    categories,
                    orders,
                })
            }
            (true, false) => {
                let (products, categories) = tokio::try_join!(
                    self.api().products(&filter, 0, size),
                    self.api().categories(None, 0, size),
                )?;
                Ok(DashboardData::Inventory {
                    products,
                    categories,
                })
            }
            (false, true) => Ok(DashboardData::Shipping {
                orders: self.orders(0, size).await?,
            }),
            (false, false) => Ok(DashboardData::None),
        }
    }

    /// Load the dashboard for the locally cached profile.
    ///
    /// Falls back to the customer role when no profile is cached, so
    /// the result is `DashboardData::None`.
    ///
    /// # Errors
    ///
    /// Returns the first `ApiError` of any section fetch.
    pub async fn my_dashboard(&self) -> Result<DashboardData> {
        let role = self
            .api()
            .session()
            .cached_user()
            .map_or(Role::Customer, |profile: UserProfile| profile.role);
        self.dashboard(role).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_to_section_mapping() {
        // the match arms above key off these two capabilities
        assert!(Role::Admin.can(Capability::ManageProducts));
        assert!(Role::Admin.can(Capability::ManageOrders));
        assert!(Role::InventoryManager.can(Capability::ManageProducts));
        assert!(!Role::InventoryManager.can(Capability::ManageOrders));
        assert!(!Role::ShippingManager.can(Capability::ManageProducts));
        assert!(Role::ShippingManager.can(Capability::ManageOrders));
        assert!(!Role::Customer.can(Capability::ManageProducts));
        assert!(!Role::Customer.can(Capability::ManageOrders));
    }
}
