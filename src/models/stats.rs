//! Aggregate statistics over a review collection.
use super::mastery::{Mastery, classify_mastery};
use super::queue::{DEFAULT_UPCOMING_DAYS, select_due, select_upcoming};
use super::ReviewItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: usize,
    pub learning: usize,
    pub reviewing: usize,
    pub mastered: usize,
    pub due_today: usize,
    /// Due now plus everything falling due within the next seven days.
    pub due_this_week: usize,
    /// Lifetime share of correct answers across all items, 0.0-1.0.
    pub accuracy: f64,
}

impl ReviewStats {
    pub fn compute(items: &[ReviewItem], now: DateTime<Utc>) -> Self {
        let mut stats = ReviewStats {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            match classify_mastery(item) {
                Mastery::Learning => stats.learning += 1,
                Mastery::Reviewing => stats.reviewing += 1,
                Mastery::Mastered => stats.mastered += 1,
            }
        }

        stats.due_today = select_due(items, now).len();
        stats.due_this_week =
            stats.due_today + select_upcoming(items, now, DEFAULT_UPCOMING_DAYS).len();

        let (correct, reviews) = items.iter().fold((0u64, 0u64), |(c, r), item| {
            (c + u64::from(item.total_correct), r + u64::from(item.total_reviews))
        });
        if reviews > 0 {
            stats.accuracy = correct as f64 / reviews as f64;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_empty_stats() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(ReviewStats::compute(&[], now), ReviewStats::default());
    }

    #[test]
    fn test_counts() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let fresh = ReviewItem::new("v1", "sun", "mặt trời", "l1", now);
        let reviewing = ReviewItem {
            review_count: 4,
            correct_streak: 1,
            total_correct: 2,
            total_reviews: 4,
            interval: 1,
            next_review_date: now - Duration::days(1),
            ..ReviewItem::new("v2", "moon", "mặt trăng", "l1", now)
        };
        let mastered = ReviewItem {
            review_count: 6,
            correct_streak: 6,
            total_correct: 6,
            total_reviews: 6,
            interval: 21,
            next_review_date: now + Duration::days(21),
            ..ReviewItem::new("v3", "star", "ngôi sao", "l1", now)
        };

        let stats = ReviewStats::compute(&[fresh, reviewing, mastered], now);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.learning, 1);
        assert_eq!(stats.reviewing, 1);
        assert_eq!(stats.mastered, 1);
        assert_eq!(stats.due_today, 1);
        assert_eq!(stats.due_this_week, 2);
        assert!((stats.accuracy - 0.8).abs() < 1e-9);
    }
}
