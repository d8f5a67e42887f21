//! Review domain logic
//!
//! Reviews are append-only; the summary is recomputed from the full
//! collection on every read.

pub mod aggregator;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MAX_RATING, MIN_RATING, ReviewCreate};

use crate::utils::validation::MAX_NOTE_LEN;

/// Validate a review submission
pub fn validate(input: &ReviewCreate) -> AppResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&input.rating) {
        return Err(AppError::new(ErrorCode::RatingOutOfRange).with_detail("rating", input.rating));
    }
    if input.comment.trim().is_empty() {
        return Err(AppError::new(ErrorCode::CommentRequired));
    }
    if input.comment.len() > MAX_NOTE_LEN {
        return Err(AppError::validation(format!(
            "comment is too long ({} chars, max {MAX_NOTE_LEN})",
            input.comment.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        for (rating, ok) in [(0, false), (1, true), (5, true), (6, false), (-1, false)] {
            let input = ReviewCreate {
                rating,
                comment: "lovely".to_string(),
            };
            assert_eq!(validate(&input).is_ok(), ok, "rating: {rating}");
        }
    }

    #[test]
    fn test_comment_required() {
        let input = ReviewCreate {
            rating: 4,
            comment: "   ".to_string(),
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::CommentRequired);
    }

    #[test]
    fn test_comment_length_cap() {
        let input = ReviewCreate {
            rating: 4,
            comment: "x".repeat(MAX_NOTE_LEN + 1),
        };
        let err = validate(&input).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
