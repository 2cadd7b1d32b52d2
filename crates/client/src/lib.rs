//! Pocketmart client library.
//!
//! Thin HTTP accessors over the two external services the storefront
//! talks to, plus local session storage:
//!
//! - [`catalog`] - public read-only product catalog (Fake Store API)
//! - [`backend`] - private orders/auth backend (bearer-token JSON API)
//! - [`session`] - persisted sign-in state (opaque key-value storage)
//!
//! # Architecture
//!
//! Each accessor owns its own `reqwest::Client` behind an `Arc` and is
//! cheaply cloneable. Requests are independent: there is no shared mutable
//! state between in-flight calls, no retry policy, and no caching. Screens
//! (here: CLI commands) handle their own loading/error state around each
//! call.
//!
//! The shared [`state::AppState`] bundles the clients, the session store,
//! and the in-memory cart store from `pocketmart-core`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod state;

pub use backend::BackendClient;
pub use catalog::CatalogClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, Result};
pub use state::AppState;
