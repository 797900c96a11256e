//! User roles and the capabilities they grant.
//!
//! Authorization checks go through [`Role::can`] instead of string
//! comparisons scattered across callers, so the role-to-permission
//! mapping lives in exactly one place.

use serde::{Deserialize, Serialize};

/// Account role assigned by the remote API.
///
/// Wire names match the API's enum values verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Full access to all management features.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Manages the catalog: products, categories, features.
    #[serde(rename = "INVENTORYMANAGER")]
    InventoryManager,
    /// Manages order fulfillment.
    #[serde(rename = "SHIPPINGMANAGER")]
    ShippingManager,
    /// Regular shopper.
    #[default]
    #[serde(rename = "CUSTOMER")]
    Customer,
}

/// A management action a role may be permitted to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create, update, delete, and restore products.
    ManageProducts,
    /// Create, update, and delete categories and features.
    ManageCategories,
    /// View all orders and change their status.
    ManageOrders,
    /// List users and change their roles.
    ManageUsers,
    /// Read the admin audit log.
    ViewAuditLog,
}

impl Role {
    /// The capabilities granted to this role.
    #[must_use]
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Admin => &[
                Capability::ManageProducts,
                Capability::ManageCategories,
                Capability::ManageOrders,
                Capability::ManageUsers,
                Capability::ViewAuditLog,
            ],
            Self::InventoryManager => {
                &[Capability::ManageProducts, Capability::ManageCategories]
            }
            Self::ShippingManager => &[Capability::ManageOrders],
            Self::Customer => &[],
        }
    }

    /// Whether this role is permitted to perform `capability`.
    #[must_use]
    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Whether this role has any management capability at all.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        !self.capabilities().is_empty()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::InventoryManager => write!(f, "INVENTORYMANAGER"),
            Self::ShippingManager => write!(f, "SHIPPINGMANAGER"),
            Self::Customer => write!(f, "CUSTOMER"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "INVENTORYMANAGER" => Ok(Self::InventoryManager),
            "SHIPPINGMANAGER" => Ok(Self::ShippingManager),
            "CUSTOMER" => Ok(Self::Customer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_every_capability() {
        for cap in [
            Capability::ManageProducts,
            Capability::ManageCategories,
            Capability::ManageOrders,
            Capability::ManageUsers,
            Capability::ViewAuditLog,
        ] {
            assert!(Role::Admin.can(cap));
        }
    }

    #[test]
    fn test_inventory_manager_scope() {
        assert!(Role::InventoryManager.can(Capability::ManageProducts));
        assert!(Role::InventoryManager.can(Capability::ManageCategories));
        assert!(!Role::InventoryManager.can(Capability::ManageOrders));
        assert!(!Role::InventoryManager.can(Capability::ManageUsers));
    }

    #[test]
    fn test_shipping_manager_scope() {
        assert!(Role::ShippingManager.can(Capability::ManageOrders));
        assert!(!Role::ShippingManager.can(Capability::ManageProducts));
    }

    #[test]
    fn test_customer_has_no_capabilities() {
        assert!(Role::Customer.capabilities().is_empty());
        assert!(!Role::Customer.is_staff());
        assert!(Role::ShippingManager.is_staff());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&Role::InventoryManager).unwrap();
        assert_eq!(json, "\"INVENTORYMANAGER\"");
        let role: Role = serde_json::from_str("\"SHIPPINGMANAGER\"").unwrap();
        assert_eq!(role, Role::ShippingManager);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for role in [
            Role::Admin,
            Role::InventoryManager,
            Role::ShippingManager,
            Role::Customer,
        ] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("MANAGER".parse::<Role>().is_err());
    }
}
