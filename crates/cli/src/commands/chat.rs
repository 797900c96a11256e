//! Store assistant command.
//!
//! # Usage
//!
//! ```bash
//! tienda chat "do you have ceramic mugs?"
//! ```

use super::{CliError, client};

/// Send one message and print the reply.
pub async fn send(message: &str) -> Result<(), CliError> {
    let client = client()?;

    let session = client.chat_init().await?;
    let reply = client.chat_send(message, Some(&session.session_id)).await?;

    println!("{}", reply.content.reply);
    for product in &reply.content.products {
        println!("  {:<16} {:<40} {:>10}", product.sku, product.name, product.price);
    }
    Ok(())
}
