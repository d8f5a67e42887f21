//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use serde::Deserialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartLine, Order, OrderStatus};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::orders::{assembler, lifecycle};

/// Place order request: cart lines only, prices are server-derived
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub items: Vec<CartLine>,
}

/// Update status request
///
/// `expected_status` is the optional precondition: when supplied, the
/// update only applies if the stored status still matches.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub expected_status: Option<OrderStatus>,
}

/// POST /api/orders - place an order against the live catalog
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = assembler::assemble(&state.catalog, user.user_id, &payload.items)?;
    state.store.insert_order(&order)?;

    tracing::info!(
        order_id = order.id,
        user_id = user.user_id,
        total = order.total_price,
        "Order placed"
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders - all orders for admin, own orders otherwise
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<Order>>> {
    let mut orders = if user.is_admin() {
        state.store.list_orders()?
    } else {
        state.store.list_orders_for_user(user.user_id)?
    };

    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(orders))
}

/// GET /api/orders/{id} - own order, or any order for admin
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let order = state
        .store
        .get_order(id)?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id))?;

    if !user.is_admin() && order.user_id != user.user_id {
        return Err(AppError::permission_denied("You can only view your own orders"));
    }

    Ok(Json(order))
}

/// PUT /api/orders/{id} - update order status (admin)
///
/// Legality is checked against the status read here; the store then
/// applies the write only if that status is still current, so a racing
/// update surfaces as a conflict instead of being overwritten.
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    user.require_admin()?;

    let current = state
        .store
        .get_order(id)?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id))?;

    let expected = payload.expected_status.unwrap_or(current.status);
    let updated = lifecycle::transition(&current, payload.status)?;
    let stored = state
        .store
        .update_order_status(id, updated.status, Some(expected))?;

    tracing::info!(order_id = id, status = %stored.status, "Order status updated");
    Ok(Json(stored))
}
