//! Product catalog client.
//!
//! Read-only accessor for the public catalog (the Fake Store API):
//! category list, per-category product lists, single products. Plain REST
//! with JSON bodies, no authentication, no caching - every call goes to
//! the network and each consumer handles its own loading/error state.

pub mod types;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

pub use types::{Product, Rating};

use pocketmart_core::types::ProductId;

/// Client for the public product catalog.
///
/// Cheaply cloneable; all clones share one HTTP connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.catalog_url.clone(),
            }),
        }
    }

    /// List all category names.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure or an unexpected body.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>> {
        self.get_json(&["products", "categories"]).await
    }

    /// List the products in `category`.
    ///
    /// An unknown category is not an error: the catalog answers with an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network failure or an unexpected body.
    #[instrument(skip(self))]
    pub async fn list_products_by_category(&self, category: &str) -> Result<Vec<Product>> {
        self.get_json(&["products", "category", category]).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for an unknown id (the catalog
    /// answers 200 with an empty body), or other [`ClientError`] variants
    /// on failure.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product> {
        let id_segment = id.to_string();
        match self
            .get_json::<Option<Product>>(&["products", &id_segment])
            .await?
        {
            Some(product) => Ok(product),
            None => Err(ClientError::NotFound(format!("product {id}"))),
        }
    }

    /// GET a path under the base URL and decode the JSON body.
    ///
    /// The body is read as text first so decode failures can be logged
    /// with what actually came back. An empty body decodes as JSON `null`
    /// so callers can expect `Option<T>` for endpoints that answer 200
    /// with nothing.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "catalog request");

        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog returned non-success status"
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("catalog request to {} failed", url.path()),
            });
        }

        let effective = if body.trim().is_empty() { "null" } else { &body };
        serde_json::from_str(effective).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to decode catalog response"
            );
            ClientError::Parse(e)
        })
    }

    /// Build an endpoint URL from path segments (percent-encoding each).
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotFound("catalog base URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client_with_base(base: &str) -> CatalogClient {
        let config = ClientConfig {
            catalog_url: Url::parse(base).unwrap(),
            backend_url: Url::parse("http://localhost:3000").unwrap(),
            session_path: std::path::PathBuf::from("/tmp/session.json"),
        };
        CatalogClient::new(&config)
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = client_with_base("https://fakestoreapi.com");
        let url = client.endpoint(&["products", "categories"]).unwrap();
        assert_eq!(url.as_str(), "https://fakestoreapi.com/products/categories");
    }

    #[test]
    fn test_endpoint_percent_encodes_category() {
        let client = client_with_base("https://fakestoreapi.com");
        let url = client
            .endpoint(&["products", "category", "men's clothing"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://fakestoreapi.com/products/category/men's%20clothing"
        );
    }

    #[test]
    fn test_endpoint_respects_base_path() {
        let client = client_with_base("https://example.com/api/");
        let url = client.endpoint(&["products", "1"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/products/1");
    }
}
