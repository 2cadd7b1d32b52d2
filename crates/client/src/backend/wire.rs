//! Raw wire format of the orders/auth backend.
//!
//! The backend wraps most responses in a `{"status": "OK", ...}` envelope,
//! ships booleans as 0/1 integers, and embeds an order's products as a
//! JSON string inside the JSON payload. All of that stays contained here;
//! [`super::conversions`] turns these into the domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Envelope status value the backend uses for success.
pub const STATUS_OK: &str = "OK";

/// `POST /users/signin` request body.
#[derive(Debug, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /users/signup` request body.
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// `POST /users/update` request body.
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

/// Successful sign-in/sign-up response body.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Error body the backend may attach to non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /orders/all` response body.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub status: String,
    #[serde(default)]
    pub orders: Vec<OrderWire>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope-only response (`/orders/updateorder`, `/users/update`).
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// One order as the backend ships it.
#[derive(Debug, Deserialize)]
pub struct OrderWire {
    pub id: i64,
    pub uid: i64,
    /// Total unit count; redundant with `order_items`, not trusted.
    #[serde(default)]
    pub item_numbers: i64,
    pub is_paid: i64,
    pub is_delivered: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// JSON string holding an array of [`OrderItemWire`].
    pub order_items: String,
}

/// One product reference inside `order_items`.
#[derive(Debug, Deserialize)]
pub struct OrderItemWire {
    #[serde(rename = "prodID")]
    pub prod_id: i64,
    pub quantity: u32,
}

/// `POST /orders/updateorder` request body.
#[derive(Debug, Serialize)]
pub struct UpdateOrderRequest {
    #[serde(rename = "orderID")]
    pub order_id: i64,
    #[serde(rename = "isPaid")]
    pub is_paid: i64,
    #[serde(rename = "isDelivered")]
    pub is_delivered: i64,
}
