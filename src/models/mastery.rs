//! Mastery classification of a single review item.
use super::ReviewItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reviews needed before retention is judged at all.
pub const MIN_REVIEWS_FOR_JUDGEMENT: u32 = 3;
pub const MASTERY_STREAK: u32 = 5;
pub const MASTERY_ACCURACY: f64 = 0.8;
/// Two weeks between reviews signals durable retention.
pub const MASTERY_INTERVAL_DAYS: u32 = 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mastery {
    Learning,
    Reviewing,
    Mastered,
}

impl fmt::Display for Mastery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mastery::Learning => "learning",
            Mastery::Reviewing => "reviewing",
            Mastery::Mastered => "mastered",
        };
        f.write_str(label)
    }
}

/// Classifies an item. Fewer than three reviews is always `Learning`,
/// whatever the streak or accuracy.
pub fn classify_mastery(item: &ReviewItem) -> Mastery {
    if item.review_count < MIN_REVIEWS_FOR_JUDGEMENT {
        return Mastery::Learning;
    }

    let mastered = item.correct_streak >= MASTERY_STREAK
        && item.accuracy() >= MASTERY_ACCURACY
        && item.interval >= MASTERY_INTERVAL_DAYS;

    if mastered {
        Mastery::Mastered
    } else {
        Mastery::Reviewing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(review_count: u32, streak: u32, correct: u32, total: u32, interval: u32) -> ReviewItem {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        ReviewItem {
            review_count,
            correct_streak: streak,
            total_correct: correct,
            total_reviews: total,
            interval,
            ..ReviewItem::new("v1", "book", "quyển sách", "l1", now)
        }
    }

    #[test]
    fn test_new_item_is_learning() {
        assert_eq!(classify_mastery(&item(0, 0, 0, 0, 1)), Mastery::Learning);
    }

    #[test]
    fn test_floor_ignores_other_fields() {
        // Inconsistent on purpose: nothing but review_count matters below 3.
        assert_eq!(classify_mastery(&item(2, 9, 9, 9, 60)), Mastery::Learning);
        assert_eq!(classify_mastery(&item(2, 0, 0, 2, 1)), Mastery::Learning);
    }

    #[test]
    fn test_mastered() {
        assert_eq!(classify_mastery(&item(6, 5, 5, 6, 14)), Mastery::Mastered);
        assert_eq!(classify_mastery(&item(10, 8, 9, 10, 40)), Mastery::Mastered);
    }

    #[test]
    fn test_each_mastery_condition_is_required() {
        // streak too short
        assert_eq!(classify_mastery(&item(6, 4, 6, 6, 20)), Mastery::Reviewing);
        // accuracy 7/10 below 0.8
        assert_eq!(classify_mastery(&item(10, 5, 7, 10, 20)), Mastery::Reviewing);
        // interval under two weeks
        assert_eq!(classify_mastery(&item(6, 6, 6, 6, 13)), Mastery::Reviewing);
    }

    #[test]
    fn test_zero_reviews_does_not_divide() {
        assert_eq!(classify_mastery(&item(3, 5, 0, 0, 20)), Mastery::Reviewing);
    }

    #[test]
    fn test_display() {
        assert_eq!(Mastery::Mastered.to_string(), "mastered");
        assert_eq!(
            serde_json::to_string(&Mastery::Reviewing).unwrap(),
            "\"reviewing\""
        );
    }
}
