//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationCreate, ReservationStatus};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::reservations::{lifecycle, validator};

/// Update status request with optional precondition
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReservationStatus,
    #[serde(default)]
    pub expected_status: Option<ReservationStatus>,
}

/// POST /api/reservations - create a reservation (public)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let reservation = validator::validate(payload)?;
    state.store.insert_reservation(&reservation)?;

    tracing::info!(
        reservation_id = reservation.id,
        date = %reservation.date,
        guests = reservation.guests,
        "Reservation created"
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations - list all reservations (admin), by date then time
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Reservation>>> {
    user.require_admin()?;

    let mut reservations = state.store.list_reservations()?;
    reservations.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    Ok(Json(reservations))
}

/// GET /api/reservations/{id} - get a reservation (admin)
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    user.require_admin()?;

    let reservation = state.store.get_reservation(id)?.ok_or_else(|| {
        AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
    })?;
    Ok(Json(reservation))
}

/// PUT /api/reservations/{id} - update reservation status (admin)
///
/// Same observed-status precondition contract as order status updates.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Reservation>> {
    user.require_admin()?;

    let current = state.store.get_reservation(id)?.ok_or_else(|| {
        AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
    })?;

    let expected = payload.expected_status.unwrap_or(current.status);
    let updated = lifecycle::transition(&current, payload.status)?;
    let stored = state
        .store
        .update_reservation_status(id, updated.status, Some(expected))?;

    tracing::info!(reservation_id = id, status = %stored.status, "Reservation status updated");
    Ok(Json(stored))
}
