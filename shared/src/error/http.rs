//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::MenuItemNotFound
            | Self::ReservationNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (illegal lifecycle transitions and stale preconditions)
            Self::AlreadyExists
            | Self::OrderIllegalTransition
            | Self::OrderStatusConflict
            | Self::ReservationIllegalTransition
            | Self::ReservationStatusConflict => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::IdentityInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied | Self::AdminRequired => StatusCode::FORBIDDEN,

            // 500 Internal Server Error (system faults and integrity violations)
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::OrderTotalMismatch => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
