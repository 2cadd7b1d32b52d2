//! Wire-to-domain conversion functions for the backend.

use pocketmart_core::types::{Email, EmailError, OrderId, OrderStatus, ProductId, UserId};
use secrecy::SecretString;

use super::types::{Order, OrderLine, UserProfile, UserSession};
use super::wire::{AuthResponse, OrderItemWire, OrderWire};
use crate::error::{ClientError, Result};

/// Convert a sign-in/sign-up response into a [`UserSession`].
///
/// The backend is trusted to return a structurally valid email; if it
/// does not, that is surfaced as a parse-level error rather than silently
/// storing garbage in the session file.
pub fn convert_auth_response(auth: AuthResponse) -> Result<UserSession> {
    let email = Email::parse(&auth.email).map_err(invalid_email)?;
    Ok(UserSession {
        user: UserProfile {
            id: UserId::new(auth.id),
            name: auth.name,
            email,
        },
        token: SecretString::from(auth.token),
    })
}

/// Convert a wire order into a domain [`Order`].
///
/// `order_items` arrives as a JSON string embedded in the JSON payload;
/// a malformed inner document is a parse error for the whole order.
pub fn convert_order(wire: OrderWire) -> Result<Order> {
    let items: Vec<OrderItemWire> = serde_json::from_str(&wire.order_items)?;
    Ok(Order {
        id: OrderId::new(wire.id),
        user_id: UserId::new(wire.uid),
        status: OrderStatus::from_flags(wire.is_paid != 0, wire.is_delivered != 0),
        total_price: wire.total_price,
        lines: items.into_iter().map(convert_order_line).collect(),
    })
}

fn convert_order_line(item: OrderItemWire) -> OrderLine {
    OrderLine {
        product_id: ProductId::new(item.prod_id),
        quantity: item.quantity,
    }
}

fn invalid_email(err: EmailError) -> ClientError {
    ClientError::Api {
        status: 200,
        message: format!("backend returned an invalid email: {err}"),
    }
}
