//! Identity extraction
//!
//! Token issuance and verification live in the upstream gateway (an
//! external collaborator); by the time a request reaches this server the
//! gateway has already authenticated it and forwarded the identity claims
//! as headers. This module is the seam where those claims enter.
//!
//! | Header | Content |
//! |--------|---------|
//! | `x-user-id` | numeric user id |
//! | `x-user-role` | `admin` \| `user` |
//! | `x-user-name` | display name (optional) |

use axum::extract::FromRequestParts;
use http::request::Parts;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::types::UserRole;

use crate::core::ServerState;

const USER_ID_HEADER: &str = "x-user-id";
const USER_NAME_HEADER: &str = "x-user-name";
const USER_ROLE_HEADER: &str = "x-user-role";

/// Authenticated identity attached to the current request
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub name: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Guard for admin-only handlers
    pub fn require_admin(&self) -> AppResult<()> {
        if !self.is_admin() {
            return Err(AppError::admin_required());
        }
        Ok(())
    }
}

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted earlier in the request
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let (Some(raw_id), Some(raw_role)) = (header(USER_ID_HEADER), header(USER_ROLE_HEADER))
        else {
            tracing::warn!(uri = %parts.uri, "Request without identity headers");
            return Err(AppError::not_authenticated());
        };

        let user_id: i64 = raw_id.parse().map_err(|_| {
            AppError::with_message(ErrorCode::IdentityInvalid, "malformed user id header")
        })?;

        let role: UserRole = raw_role.parse().map_err(|_| {
            AppError::with_message(
                ErrorCode::IdentityInvalid,
                format!("unknown role: {raw_role}"),
            )
        })?;

        let name = header(USER_NAME_HEADER)
            .map(str::to_string)
            .unwrap_or_else(|| format!("user-{user_id}"));

        let user = CurrentUser {
            user_id,
            name,
            role,
        };

        // Store in extensions for potential reuse
        parts.extensions.insert(user.clone());

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_admin() {
        let admin = CurrentUser {
            user_id: 1,
            name: "Admin".to_string(),
            role: UserRole::Admin,
        };
        assert!(admin.require_admin().is_ok());

        let user = CurrentUser {
            user_id: 2,
            name: "Ada".to_string(),
            role: UserRole::User,
        };
        let err = user.require_admin().unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);
    }
}
