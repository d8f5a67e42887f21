//! Review aggregation
//!
//! Pure fold over the review collection, recomputed on every read. No
//! incremental or cached aggregate is kept — at this scale a full pass is
//! cheaper than keeping a counter honest.

use rust_decimal::prelude::*;
use shared::models::{Review, ReviewSummary};

/// Summarize a review collection: count and mean rating
///
/// The mean is computed in `Decimal` and rounded to one decimal place
/// half-up for display; an empty collection yields mean 0.
pub fn summarize(reviews: &[Review]) -> ReviewSummary {
    if reviews.is_empty() {
        return ReviewSummary::empty();
    }

    let sum: Decimal = reviews.iter().map(|r| Decimal::from(r.rating)).sum();
    let mean = sum / Decimal::from(reviews.len() as i64);

    ReviewSummary {
        average_rating: mean
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(0.0),
        total_reviews: reviews.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i32) -> Review {
        Review {
            id: rating as i64,
            user_id: 1,
            user_name: "Grace".to_string(),
            rating,
            comment: "test".to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = summarize(&[]);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.total_reviews, 0);
    }

    #[test]
    fn test_mean_of_five_and_three() {
        let summary = summarize(&[review(5), review(3)]);
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.total_reviews, 2);
    }

    #[test]
    fn test_mean_rounds_to_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.3
        let summary = summarize(&[review(5), review(4), review(4)]);
        assert_eq!(summary.average_rating, 4.3);

        // (5 + 4) / 2 = 4.5 stays 4.5
        let summary = summarize(&[review(5), review(4)]);
        assert_eq!(summary.average_rating, 4.5);

        // (4 + 4 + 5) with one more 5: 18/4 = 4.5
        let summary = summarize(&[review(4), review(4), review(5), review(5)]);
        assert_eq!(summary.average_rating, 4.5);
    }

    #[test]
    fn test_single_review() {
        let summary = summarize(&[review(2)]);
        assert_eq!(summary.average_rating, 2.0);
        assert_eq!(summary.total_reviews, 1);
    }
}
