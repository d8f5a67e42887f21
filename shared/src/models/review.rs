//! Review Model

use serde::{Deserialize, Serialize};

/// Rating bounds, inclusive
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Review entity
///
/// Append-only: there is no update or delete path once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    /// Author display name snapshot
    pub user_name: String,
    /// Integer rating within [`MIN_RATING`]..=[`MAX_RATING`]
    pub rating: i32,
    pub comment: String,
    pub created_at: i64,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub rating: i32,
    pub comment: String,
}

/// Derived review summary — recomputed from the full collection on every
/// read, never stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewSummary {
    /// Arithmetic mean of ratings, rounded to one decimal; 0 when empty
    pub average_rating: f64,
    pub total_reviews: usize,
}

impl ReviewSummary {
    pub fn empty() -> Self {
        Self {
            average_rating: 0.0,
            total_reviews: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let s = ReviewSummary::empty();
        assert_eq!(s.average_rating, 0.0);
        assert_eq!(s.total_reviews, 0);
    }

    #[test]
    fn test_review_serialize() {
        let review = Review {
            id: 7,
            user_id: 3,
            user_name: "Grace".to_string(),
            rating: 5,
            comment: "Best paella in town".to_string(),
            created_at: 1000,
        };
        let json = serde_json::to_string(&review).unwrap();
        assert!(json.contains("\"rating\":5"));
        assert!(json.contains("\"user_name\":\"Grace\""));
    }
}
