//! Session commands.
//!
//! # Usage
//!
//! ```bash
//! tienda auth register -e ana@example.com -p secret -n "Ana"
//! tienda auth login -e ana@example.com -p secret
//! tienda auth whoami
//! tienda auth logout
//! ```

use tienda_storefront::RegisterInput;

use super::{CliError, client};

/// Register a new account and log in.
pub async fn register(email: &str, password: &str, name: &str) -> Result<(), CliError> {
    let client = client()?;

    let user = client
        .register(&RegisterInput {
            email: email.to_owned(),
            password: password.to_owned(),
            full_name: name.to_owned(),
        })
        .await?;

    println!("Registered and logged in as {} ({})", user.email, user.role);
    Ok(())
}

/// Log in with email and password.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let client = client()?;

    let user = client.login(email, password).await?;

    println!("Logged in as {} ({})", user.email, user.role);
    Ok(())
}

/// Clear the local session.
pub fn logout() -> Result<(), CliError> {
    let client = client()?;
    client.logout()?;

    println!("Logged out");
    Ok(())
}

/// Show the logged-in user, refreshed from the API.
pub async fn whoami() -> Result<(), CliError> {
    let client = client()?;

    if !client.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    let user = client.me().await?;
    println!("{} ({}, id {})", user.email, user.role, user.id);
    Ok(())
}
