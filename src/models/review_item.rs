//! Per-word review state tracked by the scheduler.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::days_after;
use super::sm2::{FIRST_INTERVAL_DAYS, MAX_EASE_FACTOR};

/// One vocabulary unit the learner has started studying.
///
/// `vocab_id` is the key within a collection. Creating two items with the
/// same id in one collection is a caller error; the constructor does not check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub vocab_id: String,
    pub word: String,
    pub meaning: String,
    pub lesson_id: String,
    pub review_count: u32,
    pub ease_factor: f64,
    pub interval: u32,
    pub next_review_date: DateTime<Utc>,
    pub last_review_date: DateTime<Utc>,
    pub correct_streak: u32,
    pub total_correct: u32,
    pub total_reviews: u32,
}

impl ReviewItem {
    /// Creates a fresh item, first due one day after `now`.
    pub fn new(
        vocab_id: impl Into<String>,
        word: impl Into<String>,
        meaning: impl Into<String>,
        lesson_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            vocab_id: vocab_id.into(),
            word: word.into(),
            meaning: meaning.into(),
            lesson_id: lesson_id.into(),
            review_count: 0,
            ease_factor: MAX_EASE_FACTOR,
            interval: FIRST_INTERVAL_DAYS,
            next_review_date: days_after(now, FIRST_INTERVAL_DAYS),
            last_review_date: now,
            correct_streak: 0,
            total_correct: 0,
            total_reviews: 0,
        }
    }

    /// Share of reviews answered correctly, 0.0 when never reviewed.
    pub fn accuracy(&self) -> f64 {
        if self.total_reviews == 0 {
            0.0
        } else {
            f64::from(self.total_correct) / f64::from(self.total_reviews)
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_date <= now
    }
}

/// Items that came from the given lesson, in collection order.
pub fn items_for_lesson<'a>(items: &'a [ReviewItem], lesson_id: &str) -> Vec<&'a ReviewItem> {
    items.iter().filter(|item| item.lesson_id == lesson_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_new_item_defaults() {
        let item = ReviewItem::new("v-hello", "hello", "xin chào", "lesson-1", now());

        assert_eq!(item.vocab_id, "v-hello");
        assert_eq!(item.review_count, 0);
        assert_eq!(item.ease_factor, 2.5);
        assert_eq!(item.interval, 1);
        assert_eq!(item.correct_streak, 0);
        assert_eq!(item.total_correct, 0);
        assert_eq!(item.total_reviews, 0);
        assert_eq!(item.last_review_date, now());
        assert_eq!(item.next_review_date, now() + Duration::days(1));
    }

    #[test]
    fn test_accuracy_without_reviews_is_zero() {
        let item = ReviewItem::new("v1", "cat", "con mèo", "l1", now());
        assert_eq!(item.accuracy(), 0.0);
    }

    #[test]
    fn test_is_due_boundary() {
        let item = ReviewItem::new("v1", "cat", "con mèo", "l1", now());
        assert!(!item.is_due(now()));
        assert!(item.is_due(now() + Duration::days(1)));
    }

    #[test]
    fn test_items_for_lesson() {
        let items = vec![
            ReviewItem::new("v1", "cat", "con mèo", "animals", now()),
            ReviewItem::new("v2", "red", "màu đỏ", "colors", now()),
            ReviewItem::new("v3", "dog", "con chó", "animals", now()),
        ];

        let animals = items_for_lesson(&items, "animals");
        assert_eq!(animals.len(), 2);
        assert_eq!(animals[0].vocab_id, "v1");
        assert_eq!(animals[1].vocab_id, "v3");
        assert!(items_for_lesson(&items, "food").is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let item = ReviewItem::new("v1", "cat", "con mèo", "l1", now());
        let value = serde_json::to_value(&item).unwrap();

        for key in [
            "vocabId",
            "word",
            "meaning",
            "lessonId",
            "reviewCount",
            "easeFactor",
            "interval",
            "nextReviewDate",
            "lastReviewDate",
            "correctStreak",
            "totalCorrect",
            "totalReviews",
        ] {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
    }
}
