//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Party size bounds, inclusive
pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 20;

/// Reservation status
///
/// Legal transitions: pending -> confirmed | cancelled, confirmed ->
/// cancelled. Cancellation stays reachable from any non-terminal state;
/// `cancelled` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Whether `next` is directly reachable from this status
    pub fn can_transition(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Cancelled)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Requested calendar date (serialized as `YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Requested time of day, free-form (e.g. "19:30")
    pub time: String,
    /// Party size, within [`MIN_GUESTS`]..=[`MAX_GUESTS`]
    pub guests: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create reservation payload
///
/// `date` arrives as the raw client string; the reservation validator
/// parses it into a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub guests: i32,
    #[serde(default)]
    pub special_requests: Option<String>,
}
