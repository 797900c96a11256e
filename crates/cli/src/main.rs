//! Tienda CLI - Storefront from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! tienda catalog products --search mug --page 0
//!
//! # Log in and shop
//! tienda auth login -e ana@example.com -p secret
//! tienda cart add MUG-01 --quantity 2
//! tienda order list
//!
//! # Staff operations
//! tienda admin set-role 42 INVENTORYMANAGER
//! tienda admin order-status ORD-2024-0007 SHIPPED
//! ```
//!
//! # Commands
//!
//! - `auth` - Register, login, logout, show the current user
//! - `catalog` - Browse products and categories
//! - `cart` - Inspect and edit the cart
//! - `order` - List, inspect, and place orders
//! - `chat` - Talk to the store assistant
//! - `admin` - Staff operations (users, orders, audit log)
//!
//! # Environment Variables
//!
//! - `TIENDA_API_BASE_URL` - Base URL of the remote API (required)
//! - `TIENDA_SESSION_FILE` - Session file path (default: `~/.tienda/session.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about = "Tienda storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the local session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List, inspect, and place orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Talk to the store assistant
    Chat {
        /// Message to send
        message: String,
    },
    /// Staff operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Register a new account
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Log in
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the local session
    Logout,
    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products
    Products {
        /// Category slug filter
        #[arg(long)]
        category: Option<String>,

        /// Free-text search
        #[arg(long)]
        search: Option<String>,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
    /// List categories
    Categories {
        /// Name filter
        #[arg(long)]
        name: Option<String>,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        /// Product SKU
        sku: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line by its item ID
    Remove {
        /// Cart item ID
        item: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum OrderAction {
    /// List your orders
    List {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
    /// Show one order by SKU
    Show {
        /// Order SKU
        sku: String,
    },
    /// Place an order from the current cart
    Create {
        /// Contact email (required when not logged in)
        #[arg(short, long)]
        email: Option<String>,

        /// City
        #[arg(long)]
        city: String,

        /// State or region
        #[arg(long)]
        state: String,

        /// Postal code
        #[arg(long)]
        zip: String,

        /// Country
        #[arg(long)]
        country: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List registered users
    Users {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
    /// List all orders in the store
    Orders {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
    /// Show the audit trail
    Audit {
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(long, default_value_t = 12)]
        size: u32,
    },
    /// Assign a role to a user
    SetRole {
        /// User ID
        user: i64,

        /// Role (`ADMIN`, `INVENTORYMANAGER`, `SHIPPINGMANAGER`, `CUSTOMER`)
        role: String,
    },
    /// Move an order to a new status
    OrderStatus {
        /// Order SKU
        sku: String,

        /// Status (`PENDING`, `APPROVED`, `REJECTED`, `SHIPPED`, `DELIVERED`, `CANCELLED`)
        status: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env and initialize tracing once for every command
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Register {
                email,
                password,
                name,
            } => commands::auth::register(&email, &password, &name).await?,
            AuthAction::Login { email, password } => {
                commands::auth::login(&email, &password).await?;
            }
            AuthAction::Logout => commands::auth::logout()?,
            AuthAction::Whoami => commands::auth::whoami().await?,
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Products {
                category,
                search,
                page,
                size,
            } => commands::catalog::products(category, search, page, size).await?,
            CatalogAction::Categories { name, page, size } => {
                commands::catalog::categories(name, page, size).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show().await?,
            CartAction::Add { sku, quantity } => commands::cart::add(&sku, quantity).await?,
            CartAction::Remove { item } => commands::cart::remove(item).await?,
            CartAction::Clear => commands::cart::clear().await?,
        },
        Commands::Order { action } => match action {
            OrderAction::List { page, size } => commands::orders::list(page, size).await?,
            OrderAction::Show { sku } => commands::orders::show(&sku).await?,
            OrderAction::Create {
                email,
                city,
                state,
                zip,
                country,
            } => commands::orders::create(email, &city, &state, &zip, &country).await?,
        },
        Commands::Chat { message } => commands::chat::send(&message).await?,
        Commands::Admin { action } => match action {
            AdminAction::Users { page, size } => commands::admin::users(page, size).await?,
            AdminAction::Orders { page, size } => commands::admin::orders(page, size).await?,
            AdminAction::Audit { page, size } => commands::admin::audit(page, size).await?,
            AdminAction::SetRole { user, role } => commands::admin::set_role(user, &role).await?,
            AdminAction::OrderStatus { sku, status } => {
                commands::admin::order_status(&sku, &status).await?;
            }
        },
    }
    Ok(())
}
