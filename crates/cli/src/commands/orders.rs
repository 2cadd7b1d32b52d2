//! Order tracking commands.
//!
//! # Usage
//!
//! ```bash
//! pm-cli orders list
//! pm-cli orders pay 12
//! pm-cli orders receive 12
//! ```

use pocketmart_client::AppState;
use pocketmart_client::backend::Order;
use pocketmart_core::types::{OrderId, OrderStatus, format_amount};

use super::CommandError;
use super::auth::require_session;

/// List the signed-in user's orders.
pub async fn list(state: &AppState) -> Result<(), CommandError> {
    let session = require_session(state)?;
    let orders = state.backend().list_orders(&session.token()).await?;

    if orders.is_empty() {
        println!("No orders found.");
        return Ok(());
    }
    for order in &orders {
        print_order(order);
    }
    Ok(())
}

/// Pay an order.
pub async fn pay(state: &AppState, id: OrderId) -> Result<(), CommandError> {
    set_status(state, id, OrderStatus::Paid).await
}

/// Mark a paid order as received.
pub async fn receive(state: &AppState, id: OrderId) -> Result<(), CommandError> {
    set_status(state, id, OrderStatus::Delivered).await
}

async fn set_status(state: &AppState, id: OrderId, status: OrderStatus) -> Result<(), CommandError> {
    let session = require_session(state)?;
    state
        .backend()
        .update_order_status(&session.token(), id, status)
        .await?;
    println!("Order #{id} is now {status}.");
    Ok(())
}

fn print_order(order: &Order) {
    println!(
        "Order #{}  [{}]  ${}",
        order.id,
        order.status,
        format_amount(order.total_price)
    );
    for line in &order.lines {
        println!("  - product #{} x{}", line.product_id, line.quantity);
    }
}
