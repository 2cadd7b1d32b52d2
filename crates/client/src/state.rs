//! Application state shared across consumers.

use std::sync::Arc;

use pocketmart_core::cart::CartStore;

use crate::backend::BackendClient;
use crate::catalog::CatalogClient;
use crate::config::ClientConfig;
use crate::session::{FileSessionStore, SessionStore};

/// Application state shared across all consumers.
///
/// Cheaply cloneable via `Arc`. Bundles the two HTTP accessors, the
/// session store, and the in-memory cart so every screen (CLI command)
/// receives the same injected container instead of reaching for ambient
/// globals. The cart has exactly one writer context; the clients are
/// stateless.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ClientConfig,
    catalog: CatalogClient,
    backend: BackendClient,
    session: Box<dyn SessionStore>,
    cart: CartStore,
}

impl AppState {
    /// Create application state with a file-backed session store at the
    /// configured path.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let session = Box::new(FileSessionStore::new(config.session_path.clone()));
        Self::with_session_store(config, session)
    }

    /// Create application state with an explicit session store (tests).
    #[must_use]
    pub fn with_session_store(config: ClientConfig, session: Box<dyn SessionStore>) -> Self {
        let catalog = CatalogClient::new(&config);
        let backend = BackendClient::new(&config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                backend,
                session,
                cart: CartStore::new(),
            }),
        }
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The product catalog accessor.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// The orders/auth backend accessor.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// The persistent session store.
    #[must_use]
    pub fn session(&self) -> &dyn SessionStore {
        self.inner.session.as_ref()
    }

    /// The in-memory cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
