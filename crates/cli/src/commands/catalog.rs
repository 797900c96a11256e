//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! tienda catalog products --search mug --page 0 --size 12
//! tienda catalog categories --name kitchen
//! ```

use tienda_storefront::ProductFilter;

use super::{CliError, client};

/// List one page of products.
pub async fn products(
    category: Option<String>,
    search: Option<String>,
    page: u32,
    size: u32,
) -> Result<(), CliError> {
    let client = client()?;

    let filter = ProductFilter {
        category,
        search,
        ..ProductFilter::default()
    };
    let result = client.products(&filter, page, size).await?;

    for product in &result.content {
        println!(
            "{:<16} {:<40} {:>10}  stock {}",
            product.sku, product.name, product.price, product.stock
        );
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

/// List one page of categories.
pub async fn categories(name: Option<String>, page: u32, size: u32) -> Result<(), CliError> {
    let client = client()?;

    let result = client.categories(name.as_deref(), page, size).await?;

    for category in &result.content {
        println!("{:<24} {}", category.slug, category.name);
    }
    print_page_footer(page, result.total_pages, result.content.len());
    Ok(())
}

pub(crate) fn print_page_footer(page: u32, total_pages: Option<u32>, count: usize) {
    match total_pages {
        Some(total) => println!("-- page {} of {} ({count} items)", page + 1, total),
        None => println!("-- page {} ({count} items)", page + 1),
    }
}
