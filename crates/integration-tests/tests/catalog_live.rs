//! Live tests against the public product catalog.
//!
//! These tests require network access to the Fake Store API (or an
//! override via `POCKETMART_CATALOG_URL`).
//!
//! Run with: `cargo test -p pocketmart-integration-tests -- --ignored`

use pocketmart_client::{CatalogClient, ClientError};
use pocketmart_core::types::ProductId;
use pocketmart_integration_tests::test_config;

fn client() -> CatalogClient {
    CatalogClient::new(&test_config())
}

#[tokio::test]
#[ignore = "Requires network access to the catalog"]
async fn test_categories_are_nonempty() {
    let categories = client()
        .list_categories()
        .await
        .expect("catalog should answer");
    assert!(!categories.is_empty());
}

#[tokio::test]
#[ignore = "Requires network access to the catalog"]
async fn test_category_listing_matches_category() {
    let client = client();
    let categories = client
        .list_categories()
        .await
        .expect("catalog should answer");
    let first = categories.first().expect("at least one category");

    let products = client
        .list_products_by_category(first)
        .await
        .expect("catalog should answer");
    assert!(!products.is_empty());
    assert!(products.iter().all(|p| &p.category == first));
}

#[tokio::test]
#[ignore = "Requires network access to the catalog"]
async fn test_get_product_round_trip() {
    let product = client()
        .get_product(ProductId::new(1))
        .await
        .expect("product 1 should exist");
    assert_eq!(product.id, ProductId::new(1));
    assert!(!product.title.is_empty());
    assert!(product.price > rust_decimal::Decimal::ZERO);
}

#[tokio::test]
#[ignore = "Requires network access to the catalog"]
async fn test_get_unknown_product_is_not_found() {
    let result = client().get_product(ProductId::new(999_999)).await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}
