//! Order lifecycle - legal status transitions
//!
//! The transition table lives on [`OrderStatus`]; this module applies it.
//! A request to move to a state not reachable from the current one fails
//! with a conflict and never silently applies.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus};
use shared::util::now_millis;

/// Apply a status transition, returning the updated copy
///
/// The input order is untouched; persistence happens at the store with a
/// compare-and-set on the status the caller observed.
pub fn transition(order: &Order, new_status: OrderStatus) -> AppResult<Order> {
    if !order.status.can_transition(new_status) {
        return Err(AppError::new(ErrorCode::OrderIllegalTransition)
            .with_detail("order_id", order.id)
            .with_detail("from", order.status.to_string())
            .with_detail("to", new_status.to_string()));
    }

    let mut updated = order.clone();
    updated.status = new_status;
    updated.updated_at = now_millis();
    Ok(updated)
}
