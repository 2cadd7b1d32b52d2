//! Pocketmart Core - Shared types and cart state library.
//!
//! This crate provides common types used across all Pocketmart components:
//! - `client` - HTTP accessors for the catalog and orders/auth backend
//! - `cli` - Command-line storefront frontend
//!
//! # Architecture
//!
//! The core crate contains only types and the in-memory cart store - no I/O,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses
//! - [`cart`] - The in-memory shopping cart store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{CartLine, CartProduct, CartStore, Subscription};
pub use types::*;
