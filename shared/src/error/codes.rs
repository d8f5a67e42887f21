//! Unified error codes for the Yummy platform
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 7xxx: Reservation errors
//! - 8xxx: Review errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Identity headers are malformed
    IdentityInvalid = 1002,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Order line quantity is invalid
    OrderInvalidQuantity = 4003,
    /// Requested status is not reachable from the current status
    OrderIllegalTransition = 4004,
    /// Stored status no longer matches the expected prior status
    OrderStatusConflict = 4005,
    /// Stored total does not match the sum of its lines
    OrderTotalMismatch = 4006,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,
    /// Menu item is not available for ordering
    MenuItemUnavailable = 6002,
    /// Menu item price is invalid
    MenuItemInvalidPrice = 6003,
    /// Category is not one of the fixed set
    CategoryInvalid = 6004,

    // ==================== 7xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 7001,
    /// Requested status is not reachable from the current status
    ReservationIllegalTransition = 7002,
    /// Stored status no longer matches the expected prior status
    ReservationStatusConflict = 7003,
    /// Party size outside the accepted bounds
    PartySizeOutOfRange = 7004,
    /// Reservation date is not a valid calendar date
    ReservationDateInvalid = 7005,

    // ==================== 8xxx: Review ====================
    /// Rating outside the accepted bounds
    RatingOutOfRange = 8001,
    /// Review comment is required
    CommentRequired = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::NotAuthenticated => "Authentication required",
            Self::IdentityInvalid => "Invalid identity",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",

            Self::OrderNotFound => "Order not found",
            Self::OrderEmpty => "Order must have at least one item",
            Self::OrderInvalidQuantity => "Order item quantity must be at least 1",
            Self::OrderIllegalTransition => "Order status transition not allowed",
            Self::OrderStatusConflict => "Order status changed concurrently",
            Self::OrderTotalMismatch => "Order total does not match its items",

            Self::MenuItemNotFound => "Menu item not found",
            Self::MenuItemUnavailable => "Menu item is not available",
            Self::MenuItemInvalidPrice => "Menu item price must be non-negative",
            Self::CategoryInvalid => "Invalid menu category",

            Self::ReservationNotFound => "Reservation not found",
            Self::ReservationIllegalTransition => "Reservation status transition not allowed",
            Self::ReservationStatusConflict => "Reservation status changed concurrently",
            Self::PartySizeOutOfRange => "Guests must be between 1 and 20",
            Self::ReservationDateInvalid => "Reservation date is not a valid date",

            Self::RatingOutOfRange => "Rating must be between 1 and 5",
            Self::CommentRequired => "Comment is required",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,
            7 => Self::ValueOutOfRange,

            1001 => Self::NotAuthenticated,
            1002 => Self::IdentityInvalid,

            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,

            4001 => Self::OrderNotFound,
            4002 => Self::OrderEmpty,
            4003 => Self::OrderInvalidQuantity,
            4004 => Self::OrderIllegalTransition,
            4005 => Self::OrderStatusConflict,
            4006 => Self::OrderTotalMismatch,

            6001 => Self::MenuItemNotFound,
            6002 => Self::MenuItemUnavailable,
            6003 => Self::MenuItemInvalidPrice,
            6004 => Self::CategoryInvalid,

            7001 => Self::ReservationNotFound,
            7002 => Self::ReservationIllegalTransition,
            7003 => Self::ReservationStatusConflict,
            7004 => Self::PartySizeOutOfRange,
            7005 => Self::ReservationDateInvalid,

            8001 => Self::RatingOutOfRange,
            8002 => Self::CommentRequired,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
