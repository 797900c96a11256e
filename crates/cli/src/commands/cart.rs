//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! tienda cart show
//! tienda cart add MUG-01 --quantity 2
//! tienda cart remove 17
//! tienda cart clear
//! ```

use tienda_core::types::CartItemId;
use tienda_storefront::Cart;

use super::{CliError, client};

/// Show the current cart.
pub async fn show() -> Result<(), CliError> {
    let client = client()?;

    print_cart(&client.cart().await?);
    Ok(())
}

/// Add a product to the cart.
pub async fn add(sku: &str, quantity: u32) -> Result<(), CliError> {
    let client = client()?;

    print_cart(&client.add_item(sku, quantity).await?);
    Ok(())
}

/// Remove a line from the cart.
pub async fn remove(item: i64) -> Result<(), CliError> {
    let client = client()?;

    print_cart(&client.remove_item(CartItemId::new(item)).await?);
    Ok(())
}

/// Empty the cart.
pub async fn clear() -> Result<(), CliError> {
    let client = client()?;

    client.clear_cart().await?;
    println!("Cart emptied");
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.items.is_empty() {
        println!("Cart is empty");
        return;
    }
    for item in &cart.items {
        println!(
            "#{:<6} {:<16} {:<32} x{:<3} {:>10}",
            item.id, item.product_sku, item.product_name, item.quantity, item.unit_price
        );
    }
    println!("subtotal {:>10}", cart.subtotal);
    println!("tax      {:>10}", cart.igv);
    println!("total    {:>10}", cart.total);
}
