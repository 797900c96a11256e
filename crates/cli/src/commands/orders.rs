//! Order commands.
//!
//! # Usage
//!
//! ```bash
//! tienda order list
//! tienda order show ORD-2024-0007
//! tienda order create --city Lima --state Lima --zip 15001 --country PE
//! ```

use tienda_storefront::{NewAddress, NewOrder, Order};

use super::catalog::print_page_footer;
use super::{CliError, client};

/// List one page of the order history.
pub async fn list(page: u32, size: u32) -> Result<(), CliError> {
    let client = client()?;

    let result = client.my_orders(page, size).await?;
    for order in &result.content {
        println!(
            "{:<20} {:<12} {:>10}  {}",
            order.order_sku,
            order.status,
            order.total,
            order.created_at.format("%Y-%m-%d")
        );
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

/// Show one order by SKU.
pub async fn show(sku: &str) -> Result<(), CliError> {
    let client = client()?;

    print_order(&client.order(sku).await?);
    Ok(())
}

/// Place an order from the current cart.
///
/// The cart contents become the order lines; the items are sent along
/// so the server can verify nothing changed since the cart was last
/// shown.
pub async fn create(
    email: Option<String>,
    city: &str,
    state: &str,
    zip: &str,
    country: &str,
) -> Result<(), CliError> {
    let client = client()?;

    let cart = client.cart().await?;
    if cart.items.is_empty() {
        println!("Cart is empty, nothing to order");
        return Ok(());
    }

    let is_anonymous = !client.is_authenticated();
    let customer_email = match email {
        Some(email) => email,
        None if is_anonymous => {
            return Err(CliError::Usage("--email is required when not logged in"));
        }
        None => cart.owner_email.clone(),
    };

    let order = client
        .create_order(&NewOrder {
            customer_email,
            is_anonymous,
            address_detail: NewAddress {
                id: None,
                city: city.to_owned(),
                state: state.to_owned(),
                zip_code: zip.to_owned(),
                country: country.to_owned(),
            },
            items: cart
                .items
                .iter()
                .map(|item| tienda_storefront::NewOrderItem {
                    product_sku: item.product_sku.clone(),
                    quantity: item.quantity,
                })
                .collect(),
        })
        .await?;

    println!("Order placed: {}", order.order_sku);
    print_order(&order);
    Ok(())
}

fn print_order(order: &Order) {
    println!("{} ({})", order.order_sku, order.status);
    println!("placed {}", order.created_at.format("%Y-%m-%d %H:%M"));
    for item in &order.items {
        println!(
            "  {:<16} {:<32} x{:<3} {:>10}",
            item.product_sku, item.product_name, item.quantity, item.subtotal
        );
    }
    println!("total {:>10}", order.total);
}
