//! Staff commands.
//!
//! # Usage
//!
//! ```bash
//! tienda admin users
//! tienda admin audit --page 0
//! tienda admin set-role 42 INVENTORYMANAGER
//! tienda admin order-status ORD-2024-0007 SHIPPED
//! ```

use tienda_admin::AdminClient;
use tienda_core::types::{OrderStatus, Role, UserId};
use tienda_storefront::JsonFileStore;

use super::catalog::print_page_footer;
use super::{CliError, client};

fn admin_client() -> Result<AdminClient<JsonFileStore>, CliError> {
    Ok(AdminClient::new(client()?))
}

/// List one page of registered users.
pub async fn users(page: u32, size: u32) -> Result<(), CliError> {
    let admin = admin_client()?;

    let result = admin.users(page, size).await?;
    for user in &result.content {
        println!(
            "#{:<6} {:<32} {:<18} {}",
            user.id, user.email, user.role, user.full_name
        );
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

/// List one page of all orders in the store.
pub async fn orders(page: u32, size: u32) -> Result<(), CliError> {
    let admin = admin_client()?;

    let result = admin.orders(page, size).await?;
    for order in &result.content {
        println!(
            "{:<20} {:<12} {:<32} {:>10}",
            order.order_sku, order.status, order.customer_email, order.total
        );
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

/// Show one page of the audit trail.
pub async fn audit(page: u32, size: u32) -> Result<(), CliError> {
    let admin = admin_client()?;

    let result = admin.audit_logs(page, size).await?;
    for entry in &result.content {
        println!(
            "{} {:<32} {:<16} {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.actor_email,
            entry.action,
            entry.entity
        );
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

/// Assign a role to a user.
pub async fn set_role(user: i64, role: &str) -> Result<(), CliError> {
    let role: Role = role.parse().map_err(|_| CliError::InvalidInput {
        what: "role",
        value: role.to_owned(),
    })?;
    let admin = admin_client()?;

    let updated = admin.change_role(UserId::new(user), role).await?;
    println!("{} is now {}", updated.email, updated.role);
    Ok(())
}

/// Move an order to a new status.
pub async fn order_status(sku: &str, status: &str) -> Result<(), CliError> {
    let status: OrderStatus = status.parse().map_err(|_| CliError::InvalidInput {
        what: "status",
        value: status.to_owned(),
    })?;
    let admin = admin_client()?;

    let order = admin.change_order_status(sku, status).await?;
    println!("{} is now {}", order.order_sku, order.status);
    Ok(())
}
