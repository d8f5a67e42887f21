//! Review API Handlers

use axum::{Json, extract::State};
use http::StatusCode;
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{Review, ReviewCreate};
use shared::util::{now_millis, snowflake_id};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::reviews::{self, aggregator};

/// Review listing with the aggregate recomputed on every read
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub total_reviews: usize,
}

/// GET /api/reviews - all reviews, newest first, with summary (public)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ReviewsResponse>> {
    let mut reviews = state.store.list_reviews()?;
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let summary = aggregator::summarize(&reviews);
    Ok(Json(ReviewsResponse {
        reviews,
        average_rating: summary.average_rating,
        total_reviews: summary.total_reviews,
    }))
}

/// POST /api/reviews - submit a review (authed)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<(StatusCode, Json<Review>)> {
    reviews::validate(&payload)?;

    let review = Review {
        id: snowflake_id(),
        user_id: user.user_id,
        user_name: user.name.clone(),
        rating: payload.rating,
        comment: payload.comment.trim().to_string(),
        created_at: now_millis(),
    };
    state.store.insert_review(&review)?;

    tracing::info!(review_id = review.id, rating = review.rating, "Review submitted");
    Ok((StatusCode::CREATED, Json(review)))
}
