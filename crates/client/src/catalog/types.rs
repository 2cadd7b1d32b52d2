//! Domain types for the product catalog.

use pocketmart_core::cart::CartProduct;
use pocketmart_core::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// The catalog serves prices as plain JSON numbers, hence the float serde
/// on `price`; everything downstream works in `Decimal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product id.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Category this product is listed under.
    #[serde(default)]
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Aggregate customer rating, when the catalog provides one.
    #[serde(default)]
    pub rating: Option<Rating>,
}

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating (1.0 - 5.0).
    pub rate: f64,
    /// Number of ratings.
    pub count: i64,
}

impl Product {
    /// The attributes the cart captures when this product is added.
    #[must_use]
    pub fn to_cart_product(&self) -> CartProduct {
        CartProduct {
            id: self.id,
            title: self.title.clone(),
            price: self.price,
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_catalog_payload() {
        let json = r#"{
            "id": 7,
            "title": "Shirt",
            "price": 19.99,
            "description": "A shirt",
            "category": "men's clothing",
            "image": "https://example.com/shirt.png",
            "rating": { "rate": 4.5, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.price, Decimal::new(1999, 2));
        assert_eq!(product.rating.as_ref().unwrap().count, 120);
    }

    #[test]
    fn test_product_without_rating() {
        let json = r#"{"id":1,"title":"T","price":5,"image":"u"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.rating.is_none());
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_to_cart_product_copies_display_attributes() {
        let product = Product {
            id: ProductId::new(3),
            title: "Mug".to_owned(),
            price: Decimal::new(850, 2),
            description: "A mug".to_owned(),
            category: "home".to_owned(),
            image: "https://example.com/mug.png".to_owned(),
            rating: None,
        };

        let cart_product = product.to_cart_product();
        assert_eq!(cart_product.id, ProductId::new(3));
        assert_eq!(cart_product.title, "Mug");
        assert_eq!(cart_product.price, Decimal::new(850, 2));
    }
}
