//! In-memory shopping cart store.
//!
//! # Architecture
//!
//! The cart is a single-writer state container: an ordered list of line
//! items keyed by product id, mutated only through the operations on
//! [`CartStore`]. Every operation is synchronous, total, and infallible -
//! missing ids are silent no-ops, never errors. Display attributes (title,
//! price, image) are copied from the catalog at add time and never
//! refreshed afterwards.
//!
//! Readers get cloned snapshots; consumers that need to react to changes
//! (a badge, a cart screen) register a listener via
//! [`CartStore::subscribe`] instead of polling. The store is cheaply
//! cloneable and all clones share the same state.
//!
//! Cart contents live for the process lifetime only. Session data
//! persists across restarts; the cart deliberately does not.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;
use crate::types::price::format_amount;

/// The product attributes captured into a cart line at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    /// Catalog product id.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Decimal,
    /// Image URL.
    pub image: String,
}

/// One product plus its requested quantity in the cart.
///
/// Invariant: `quantity >= 1` for every line present in the cart; a line
/// whose quantity would reach 0 is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog product id; unique within the cart.
    pub product_id: ProductId,
    /// Display title, cached at add time.
    pub title: String,
    /// Unit price, cached at add time.
    pub price: Decimal,
    /// Image URL, cached at add time.
    pub image: String,
    /// Requested quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: CartProduct, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            quantity,
        }
    }

    /// Line subtotal: unit price times quantity, unrounded.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

type Listener = Arc<dyn Fn(&[CartLine]) + Send + Sync>;

/// The in-memory cart state container.
///
/// Cheaply cloneable; clones share state. Mutations take the state lock,
/// run to completion, and release it before listeners are notified, so a
/// listener may call back into the store.
///
/// # Example
///
/// ```
/// use pocketmart_core::cart::{CartProduct, CartStore};
/// use pocketmart_core::types::ProductId;
/// use rust_decimal::Decimal;
///
/// let cart = CartStore::new();
/// cart.add(CartProduct {
///     id: ProductId::new(7),
///     title: "Shirt".to_owned(),
///     price: Decimal::new(1999, 2),
///     image: "https://example.com/shirt.png".to_owned(),
/// });
/// cart.increase(ProductId::new(7));
///
/// assert_eq!(cart.total_count(), 2);
/// assert_eq!(cart.total_price_display(), "39.98");
/// ```
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

#[derive(Default)]
struct CartStoreInner {
    lines: Mutex<Vec<CartLine>>,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_subscription_id: AtomicU64,
}

/// RAII guard for a cart subscription.
///
/// The listener stays registered until this guard is dropped.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    store: Weak<CartStoreInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut listeners = inner
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented; the cached title/price/image are left as they were at
    /// first add. Otherwise a new line is appended at the end.
    pub fn add(&self, product: CartProduct) {
        self.add_with_quantity(product, 1);
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// Same merge semantics as [`add`](Self::add). A zero quantity is a
    /// no-op, preserving the invariant that present lines have
    /// `quantity >= 1`.
    pub fn add_with_quantity(&self, product: CartProduct, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let snapshot = {
            let mut lines = self.lock_lines();
            if let Some(line) = lines.iter_mut().find(|l| l.product_id == product.id) {
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                lines.push(CartLine::new(product, quantity));
            }
            lines.clone()
        };
        self.notify(&snapshot);
    }

    /// Increment the quantity of the line for `id` by one.
    ///
    /// No-op if the product is not in the cart.
    pub fn increase(&self, id: ProductId) {
        let snapshot = {
            let mut lines = self.lock_lines();
            let Some(line) = lines.iter_mut().find(|l| l.product_id == id) else {
                return;
            };
            line.quantity = line.quantity.saturating_add(1);
            lines.clone()
        };
        self.notify(&snapshot);
    }

    /// Decrement the quantity of the line for `id` by one.
    ///
    /// A line at quantity 1 is removed entirely; quantity never reaches 0
    /// while a line is present. No-op if the product is not in the cart.
    pub fn decrease(&self, id: ProductId) {
        let snapshot = {
            let mut lines = self.lock_lines();
            let Some(pos) = lines.iter().position(|l| l.product_id == id) else {
                return;
            };
            if let Some(line) = lines.get_mut(pos) {
                if line.quantity > 1 {
                    line.quantity -= 1;
                } else {
                    lines.remove(pos);
                }
            }
            lines.clone()
        };
        self.notify(&snapshot);
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock_lines().clone()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_lines().is_empty()
    }

    /// Total unit count across all lines, recomputed per read.
    ///
    /// This feeds the tab badge in consumers.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.lock_lines().iter().map(|l| l.quantity).sum()
    }

    /// Total price across all lines, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lock_lines().iter().map(CartLine::subtotal).sum()
    }

    /// Total price formatted to two decimal places for display.
    #[must_use]
    pub fn total_price_display(&self) -> String {
        format_amount(self.total_price())
    }

    /// Register a listener invoked with a snapshot after every mutation.
    ///
    /// The listener runs on the mutating caller's thread, after the state
    /// lock has been released. Dropping the returned [`Subscription`]
    /// unregisters it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[CartLine]) + Send + Sync + 'static,
    {
        let id = self
            .inner
            .next_subscription_id
            .fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        self.inner
            .lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, snapshot: &[CartLine]) {
        // Listener handles are cloned out so neither lock is held during
        // the calls; a listener may mutate the store or drop its
        // Subscription without deadlocking.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn product(id: i64, price: &str) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: price.parse().unwrap(),
            image: format!("https://example.com/{id}.png"),
        }
    }

    #[test]
    fn test_add_distinct_ids_creates_one_line_each() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(1, "10.00"), 2);
        cart.add_with_quantity(product(2, "5.00"), 1);
        cart.add(product(3, "1.50"));

        let lines = cart.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].product_id, ProductId::new(1));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[2].product_id, ProductId::new(3));
        assert_eq!(lines[2].quantity, 1);
    }

    #[test]
    fn test_add_same_id_merges_quantities() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(5, "2.00"), 1);
        cart.add_with_quantity(product(5, "2.00"), 2);

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
    }

    #[test]
    fn test_readd_keeps_cached_attributes() {
        let cart = CartStore::new();
        cart.add(product(5, "2.00"));
        // Same id, different display attributes - the cached ones win
        cart.add(CartProduct {
            id: ProductId::new(5),
            title: "Renamed".to_owned(),
            price: "9.99".parse().unwrap(),
            image: "https://example.com/new.png".to_owned(),
        });

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].title, "Product 5");
        assert_eq!(lines[0].price, "2.00".parse().unwrap());
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(1, "1.00"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let cart = CartStore::new();
        cart.add(product(3, "1.00"));
        cart.add(product(1, "1.00"));
        cart.add(product(2, "1.00"));
        cart.add(product(1, "1.00")); // merge must not reorder

        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decrease_at_quantity_one_removes_line() {
        let cart = CartStore::new();
        cart.add(product(4, "3.00"));
        cart.decrease(ProductId::new(4));

        assert!(cart.is_empty());
        assert!(!cart.lines().iter().any(|l| l.product_id == ProductId::new(4)));
    }

    #[test]
    fn test_decrease_above_one_decrements() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(4, "3.00"), 3);
        cart.decrease(ProductId::new(4));

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_increase_and_decrease_missing_id_are_noops() {
        let cart = CartStore::new();
        cart.add(product(1, "1.00"));
        let before = cart.lines();

        cart.increase(ProductId::new(99));
        cart.decrease(ProductId::new(99));

        assert_eq!(cart.lines(), before);
    }

    #[test]
    fn test_total_count() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(1, "10.00"), 2);
        cart.add_with_quantity(product(2, "4.00"), 1);
        assert_eq!(cart.total_count(), 3);
    }

    #[test]
    fn test_total_price_exact() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(1, "10.00"), 2);
        assert_eq!(cart.total_price(), "20.00".parse().unwrap());
        assert_eq!(cart.total_price_display(), "20.00");
    }

    #[test]
    fn test_shirt_scenario() {
        // Start empty, add a 19.99 shirt with default quantity, bump it once
        let cart = CartStore::new();
        cart.add(CartProduct {
            id: ProductId::new(7),
            title: "Shirt".to_owned(),
            price: "19.99".parse().unwrap(),
            image: "u".to_owned(),
        });
        cart.increase(ProductId::new(7));

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, ProductId::new(7));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(cart.total_price_display(), "39.98");
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = CartStore::new();
        assert_eq!(cart.total_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert_eq!(cart.total_price_display(), "0.00");
    }

    #[test]
    fn test_subscribe_sees_every_mutation() {
        let cart = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen_count = Arc::new(AtomicUsize::new(0));

        let calls2 = Arc::clone(&calls);
        let seen2 = Arc::clone(&seen_count);
        let _sub = cart.subscribe(move |lines| {
            calls2.fetch_add(1, Ordering::SeqCst);
            let count: u32 = lines.iter().map(|l| l.quantity).sum();
            seen2.store(count as usize, Ordering::SeqCst);
        });

        cart.add(product(1, "1.00"));
        cart.increase(ProductId::new(1));
        cart.decrease(ProductId::new(1));

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(seen_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let cart = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);
        let _sub = cart.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        cart.increase(ProductId::new(1));
        cart.decrease(ProductId::new(1));
        cart.add_with_quantity(product(1, "1.00"), 0);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let cart = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = Arc::clone(&calls);
        let sub = cart.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        cart.add(product(1, "1.00"));
        drop(sub);
        cart.add(product(2, "1.00"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_mutate_the_store() {
        let cart = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls2 = Arc::clone(&calls);
        let reentrant = cart.clone();
        let _sub = cart.subscribe(move |_| {
            // Bump the line once more on the first notification only
            if calls2.fetch_add(1, Ordering::SeqCst) == 0 {
                reentrant.increase(ProductId::new(1));
            }
        });

        cart.add(product(1, "1.00"));

        // The add notified once, the re-entrant increase notified again
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cart.total_count(), 2);
    }

    #[test]
    fn test_listener_may_drop_its_subscription() {
        let cart = CartStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let calls2 = Arc::clone(&calls);
        let slot2 = Arc::clone(&slot);
        let sub = cart.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
            // Unregister ourselves mid-notification
            slot2.lock().unwrap().take();
        });
        *slot.lock().unwrap() = Some(sub);

        cart.add(product(1, "1.00"));
        cart.add(product(2, "1.00"));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quantity_saturates_at_max() {
        let cart = CartStore::new();
        cart.add_with_quantity(product(1, "1.00"), u32::MAX);
        cart.increase(ProductId::new(1));
        cart.add(product(1, "1.00"));

        let lines = cart.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, u32::MAX);
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartStore::new();
        let writer = cart.clone();
        writer.add(product(1, "1.00"));
        assert_eq!(cart.total_count(), 1);
    }
}
