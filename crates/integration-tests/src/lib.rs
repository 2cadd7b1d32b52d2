//! Integration tests for Pocketmart.
//!
//! # Running Tests
//!
//! ```bash
//! # Offline tests (cart flow, session wiring)
//! cargo test -p pocketmart-integration-tests
//!
//! # Live-API tests (catalog + a running orders backend)
//! cargo test -p pocketmart-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - full add-to-cart flow against the shared app state, offline
//! - `catalog_live` - Fake Store API tests (network, `#[ignore]`)
//! - `backend_live` - orders/auth backend tests (needs a running backend,
//!   `#[ignore]`)

use std::path::PathBuf;

use pocketmart_client::ClientConfig;
use url::Url;

/// Base URL for the catalog (configurable via environment).
///
/// # Panics
///
/// Panics if the override is not a valid URL; tests want that loud.
#[must_use]
pub fn catalog_base_url() -> Url {
    let raw = std::env::var("POCKETMART_CATALOG_URL")
        .unwrap_or_else(|_| "https://fakestoreapi.com".to_string());
    Url::parse(&raw).expect("POCKETMART_CATALOG_URL must be a valid URL")
}

/// Base URL for the orders/auth backend (configurable via environment).
///
/// # Panics
///
/// Panics if the override is not a valid URL; tests want that loud.
#[must_use]
pub fn backend_base_url() -> Url {
    let raw = std::env::var("POCKETMART_BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    Url::parse(&raw).expect("POCKETMART_BACKEND_URL must be a valid URL")
}

/// Build a test configuration pointing at the env-configured services.
///
/// The session path points into the system temp dir so live tests never
/// touch a developer's real session file.
#[must_use]
pub fn test_config() -> ClientConfig {
    let session_path: PathBuf = std::env::temp_dir()
        .join(format!("pocketmart-it-{}.json", uuid::Uuid::new_v4()));
    ClientConfig {
        catalog_url: catalog_base_url(),
        backend_url: backend_base_url(),
        session_path,
    }
}
