//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! pm-cli categories
//! pm-cli products "electronics"
//! pm-cli product 7
//! ```

use pocketmart_client::AppState;
use pocketmart_client::catalog::Product;
use pocketmart_core::types::{ProductId, format_amount};

use super::CommandError;

/// List all category names.
pub async fn categories(state: &AppState) -> Result<(), CommandError> {
    let categories = state.catalog().list_categories().await?;
    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

/// List the products in `category`.
pub async fn products(state: &AppState, category: &str) -> Result<(), CommandError> {
    let products = state.catalog().list_products_by_category(category).await?;
    if products.is_empty() {
        println!("No products in category '{category}'.");
        return Ok(());
    }
    for product in &products {
        println!(
            "{:>5}  {}  ${}",
            product.id,
            product.title,
            format_amount(product.price)
        );
    }
    Ok(())
}

/// Show one product in full.
pub async fn product(state: &AppState, id: ProductId) -> Result<(), CommandError> {
    let product = state.catalog().get_product(id).await?;
    print_product(&product);
    Ok(())
}

fn print_product(product: &Product) {
    println!("{}", product.title);
    println!("  id:       {}", product.id);
    println!("  price:    ${}", format_amount(product.price));
    println!("  category: {}", product.category);
    if let Some(rating) = &product.rating {
        println!("  rating:   {:.1} ({} reviews)", rating.rate, rating.count);
    }
    if !product.description.is_empty() {
        println!("  {}", product.description);
    }
}
