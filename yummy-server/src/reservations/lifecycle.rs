//! Reservation lifecycle - legal status transitions
//!
//! pending -> confirmed | cancelled, confirmed -> cancelled. Cancellation
//! stays reachable from every non-terminal state; nothing leaves
//! `cancelled`.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationStatus};
use shared::util::now_millis;

/// Apply a status transition, returning the updated copy
pub fn transition(
    reservation: &Reservation,
    new_status: ReservationStatus,
) -> AppResult<Reservation> {
    if !reservation.status.can_transition(new_status) {
        return Err(AppError::new(ErrorCode::ReservationIllegalTransition)
            .with_detail("reservation_id", reservation.id)
            .with_detail("from", reservation.status.to_string())
            .with_detail("to", new_status.to_string()));
    }

    let mut updated = reservation.clone();
    updated.status = new_status;
    updated.updated_at = now_millis();
    Ok(updated)
}
