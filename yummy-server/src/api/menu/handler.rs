//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::StatusCode;
use serde::Deserialize;
use shared::error::AppResult;
use shared::models::{MenuCategory, MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;

/// Query params for listing the menu
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<MenuCategory>,
}

/// GET /api/menu - list available items, optionally filtered by category
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.catalog.list_available(query.category)?;
    Ok(Json(items))
}

/// GET /api/menu/{id} - get a single item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = state.catalog.get(id)?;
    Ok(Json(item))
}

/// POST /api/menu - create an item (admin)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    user.require_admin()?;

    let item = state.catalog.create(payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/menu/{id} - update an item (admin)
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    user.require_admin()?;

    let item = state.catalog.update(id, payload)?;
    Ok(Json(item))
}

/// DELETE /api/menu/{id} - delete an item (admin)
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    user.require_admin()?;

    state.catalog.delete(id)?;
    Ok(Json(true))
}
