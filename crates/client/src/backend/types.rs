//! Domain types for the orders/auth backend.
//!
//! These are the clean shapes the rest of the app consumes, separate from
//! the raw wire format in [`super::wire`].

use pocketmart_core::types::{Email, OrderId, OrderStatus, ProductId, UserId};
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: Email,
}

/// A fresh sign-in: profile plus bearer token.
///
/// The token is secret-wrapped so it never shows up in logs; persist it
/// via the session store, not by hand.
pub struct UserSession {
    /// The signed-in user.
    pub user: UserProfile,
    /// Bearer token for authenticated backend calls.
    pub token: SecretString,
}

/// One product reference inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog product id.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: u32,
}

/// An order belonging to the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Backend order id.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Lifecycle status folded from the backend's paid/delivered flags.
    pub status: OrderStatus,
    /// Order total.
    pub total_price: Decimal,
    /// Products in the order.
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Total unit count across the order's lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
