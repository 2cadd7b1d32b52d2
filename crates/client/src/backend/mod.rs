//! Orders/auth backend client.
//!
//! Authenticated accessor for the private backend: sign-in/sign-up,
//! profile updates, the signed-in user's orders, and order-status
//! mutations. JSON over REST with bearer-token auth; successful bodies
//! carry a `{"status": "OK"}` envelope (see [`wire`]).
//!
//! Independent of the cart: placing an order from cart contents is not a
//! backend operation this client exposes.

pub mod conversions;
pub mod types;
pub mod wire;

use std::sync::Arc;

use pocketmart_core::types::{Email, OrderId, OrderStatus};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

use conversions::{convert_auth_response, convert_order};
use wire::{
    AuthResponse, ErrorBody, OrdersResponse, STATUS_OK, SignInRequest, SignUpRequest,
    StatusResponse, UpdateOrderRequest, UpdateProfileRequest,
};

pub use types::{Order, OrderLine, UserProfile, UserSession};

/// Client for the private orders/auth backend.
///
/// Cheaply cloneable; all clones share one HTTP connection pool. The
/// client holds no token itself - authenticated calls take the bearer
/// token per call, so one client serves whichever session is current.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Create a new backend client.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(BackendClientInner {
                client: reqwest::Client::new(),
                base_url: config.backend_url.clone(),
            }),
        }
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] for rejected credentials; other
    /// variants for network/parse failures.
    #[instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &Email, password: &str) -> Result<UserSession> {
        let body = SignInRequest {
            email: email.as_str(),
            password,
        };
        let auth: AuthResponse = self.post_json(&["users", "signin"], None, &body).await?;
        convert_auth_response(auth)
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] if the backend rejects the registration
    /// (e.g., email already taken); other variants on failure.
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, name: &str, email: &Email, password: &str) -> Result<UserSession> {
        let body = SignUpRequest {
            name,
            email: email.as_str(),
            password,
        };
        let auth: AuthResponse = self.post_json(&["users", "signup"], None, &body).await?;
        convert_auth_response(auth)
    }

    /// Update the signed-in user's name and password.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] for a stale token; [`ClientError::Api`]
    /// if the backend declines the update.
    #[instrument(skip(self, token, password))]
    pub async fn update_profile(
        &self,
        token: &SecretString,
        name: &str,
        password: &str,
    ) -> Result<()> {
        let body = UpdateProfileRequest { name, password };
        let response: StatusResponse = self
            .post_json(&["users", "update"], Some(token), &body)
            .await?;
        check_envelope(&response.status, response.message)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List the signed-in user's orders.
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] for a stale token; other variants on
    /// failure.
    #[instrument(skip(self, token))]
    pub async fn list_orders(&self, token: &SecretString) -> Result<Vec<Order>> {
        let response: OrdersResponse = self.get_authed(&["orders", "all"], token).await?;
        check_envelope(&response.status, response.message)?;
        response.orders.into_iter().map(convert_order).collect()
    }

    /// Set an order's lifecycle status (pay, mark received).
    ///
    /// # Errors
    ///
    /// [`ClientError::Unauthorized`] for a stale token; [`ClientError::Api`]
    /// if the backend declines the update.
    #[instrument(skip(self, token))]
    pub async fn update_order_status(
        &self,
        token: &SecretString,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<()> {
        let (is_paid, is_delivered) = status.as_flags();
        let body = UpdateOrderRequest {
            order_id: order_id.as_i64(),
            is_paid: i64::from(is_paid),
            is_delivered: i64::from(is_delivered),
        };
        let response: StatusResponse = self
            .post_json(&["orders", "updateorder"], Some(token), &body)
            .await?;
        check_envelope(&response.status, response.message)
    }

    // =========================================================================
    // HTTP plumbing
    // =========================================================================

    async fn get_authed<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        token: &SecretString,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "backend request");

        let response = self
            .inner
            .client
            .get(url)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        token: Option<&SecretString>,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        debug!(%url, "backend request");

        let mut request = self.inner.client.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose_secret());
        }
        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Map the HTTP layer, then decode the body.
    ///
    /// 401/403 become [`ClientError::Unauthorized`]; other non-success
    /// statuses become [`ClientError::Api`] carrying whatever error text
    /// the backend attached.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ClientError::Unauthorized);
        }

        if !status.is_success() {
            let error: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            let message = error
                .error
                .or(error.message)
                .unwrap_or_else(|| "Something went wrong. Please try again.".to_owned());
            tracing::error!(%status, %message, "backend returned non-success status");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(200).collect::<String>(),
                "failed to decode backend response"
            );
            ClientError::Parse(e)
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::NotFound("backend base URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Check a `{"status": ...}` envelope, mapping non-OK to an API error.
fn check_envelope(status: &str, message: Option<String>) -> Result<()> {
    if status == STATUS_OK {
        Ok(())
    } else {
        Err(ClientError::Api {
            status: 200,
            message: message.unwrap_or_else(|| format!("backend answered status {status}")),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_check_envelope_ok() {
        assert!(check_envelope("OK", None).is_ok());
    }

    #[test]
    fn test_check_envelope_error_uses_message() {
        let err = check_envelope("ERROR", Some("Update failed".to_owned())).unwrap_err();
        assert!(err.to_string().contains("Update failed"));
    }

    #[test]
    fn test_check_envelope_error_without_message() {
        let err = check_envelope("WEIRD", None).unwrap_err();
        assert!(err.to_string().contains("WEIRD"));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let config = ClientConfig {
            catalog_url: Url::parse("https://fakestoreapi.com").unwrap(),
            backend_url: Url::parse("http://localhost:3000").unwrap(),
            session_path: std::path::PathBuf::from("/tmp/session.json"),
        };
        let client = BackendClient::new(&config);
        let url = client.endpoint(&["orders", "updateorder"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/orders/updateorder");
    }

    #[test]
    fn test_update_order_request_wire_names() {
        let body = UpdateOrderRequest {
            order_id: 5,
            is_paid: 1,
            is_delivered: 0,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"orderID": 5, "isPaid": 1, "isDelivered": 0})
        );
    }
}
