//! Status enums for orders.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// The backend stores two 0/1 flags (`is_paid`, `is_delivered`) per order;
/// this enum is the folded view shown to shoppers. A delivered order is
/// always paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed but not yet paid.
    #[default]
    New,
    /// Paid, awaiting delivery.
    Paid,
    /// Paid and received by the customer.
    Delivered,
}

impl OrderStatus {
    /// Fold the backend's paid/delivered flags into a status.
    ///
    /// Delivery wins over payment, matching how the backend treats a
    /// delivered order as implicitly paid.
    #[must_use]
    pub const fn from_flags(is_paid: bool, is_delivered: bool) -> Self {
        match (is_paid, is_delivered) {
            (_, true) => Self::Delivered,
            (true, false) => Self::Paid,
            (false, false) => Self::New,
        }
    }

    /// The paid/delivered flag pair the backend expects for this status.
    #[must_use]
    pub const fn as_flags(self) -> (bool, bool) {
        match self {
            Self::New => (false, false),
            Self::Paid => (true, false),
            Self::Delivered => (true, true),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Paid => write!(f, "paid"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "paid" => Ok(Self::Paid),
            "delivered" => Ok(Self::Delivered),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(OrderStatus::from_flags(false, false), OrderStatus::New);
        assert_eq!(OrderStatus::from_flags(true, false), OrderStatus::Paid);
        assert_eq!(
            OrderStatus::from_flags(true, true),
            OrderStatus::Delivered
        );
        // Delivered implies paid even if the paid flag is stale
        assert_eq!(
            OrderStatus::from_flags(false, true),
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_flags_round_trip() {
        for status in [OrderStatus::New, OrderStatus::Paid, OrderStatus::Delivered] {
            let (paid, delivered) = status.as_flags();
            assert_eq!(OrderStatus::from_flags(paid, delivered), status);
        }
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(OrderStatus::Paid.to_string(), "paid");
        assert_eq!("delivered".parse::<OrderStatus>().unwrap(), OrderStatus::Delivered);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }
}
