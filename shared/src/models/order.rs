//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
///
/// Legal transitions:
///
/// ```text
/// pending ──> processing ──> completed
///    │             │
///    └────────> cancelled <──┘
/// ```
///
/// `completed` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether `next` is directly reachable from this status
    pub fn can_transition(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Cancelled)
                | (Processing, Completed)
                | (Processing, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// A single cart line as submitted by the client
///
/// The client supplies only the item reference and quantity; the unit
/// price is always re-derived server-side from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: i64,
    pub quantity: i32,
}

/// A priced order line
///
/// `price` is the catalog unit price captured at assembly time. It is
/// immutable once the order exists, even if the catalog price later
/// changes, so historical order value is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub menu_item_id: i64,
    /// Item name snapshot for display
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Order entity
///
/// Immutable at creation apart from `status`/`updated_at`, which only the
/// order lifecycle mutates. Never deleted in normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    /// Lines in submission order, at least one
    pub items: Vec<OrderLine>,
    /// Sum of line price x quantity, computed once at assembly
    pub total_price: f64,
    pub status: OrderStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
