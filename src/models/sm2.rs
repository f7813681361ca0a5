//! SM-2 (SuperMemo 2) derived scheduling for vocabulary review items.
//!
//! - The ease factor moves by the standard SM-2 delta and is clamped to [1.3, 2.5]
//! - A failed review (quality < 3) restarts the schedule at a 1 day interval
//! - The first two successes use fixed intervals (1 day, then 3 days)
//! - Later successes multiply the interval by the freshly updated ease factor

use super::{Quality, ReviewItem};
use crate::clock::days_after;
use chrono::{DateTime, Utc};

pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const MAX_EASE_FACTOR: f64 = 2.5;
pub const FIRST_INTERVAL_DAYS: u32 = 1;
pub const SECOND_INTERVAL_DAYS: u32 = 3;
/// Upper bound on the review interval, roughly a century.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// Applies the SM-2 ease delta for `quality` and clamps the result.
pub fn next_ease_factor(ease_factor: f64, quality: Quality) -> f64 {
    let penalty = f64::from(Quality::MAX - quality.value());
    let delta = 0.1 - penalty * (0.08 + penalty * 0.02);
    (ease_factor + delta).clamp(MIN_EASE_FACTOR, MAX_EASE_FACTOR)
}

/// Interval in days for the review that is about to be recorded.
/// `new_ease` must already be updated for this review.
pub fn next_interval(item: &ReviewItem, quality: Quality, new_ease: f64) -> u32 {
    if !quality.is_correct() {
        return FIRST_INTERVAL_DAYS;
    }
    match item.review_count {
        0 => FIRST_INTERVAL_DAYS,
        1 => SECOND_INTERVAL_DAYS,
        _ => (f64::from(item.interval) * new_ease)
            .round()
            .clamp(f64::from(FIRST_INTERVAL_DAYS), f64::from(MAX_INTERVAL_DAYS)) as u32,
    }
}

/// Records one review attempt and returns the updated item.
/// The input is left untouched; callers replace it in their collection.
pub fn record_outcome(item: &ReviewItem, quality: Quality, now: DateTime<Utc>) -> ReviewItem {
    let is_correct = quality.is_correct();
    let ease_factor = next_ease_factor(item.ease_factor, quality);
    let interval = next_interval(item, quality, ease_factor);

    ReviewItem {
        review_count: item.review_count + 1,
        ease_factor,
        interval,
        last_review_date: now,
        next_review_date: days_after(now, interval),
        correct_streak: if is_correct { item.correct_streak + 1 } else { 0 },
        total_correct: item.total_correct + u32::from(is_correct),
        total_reviews: item.total_reviews + 1,
        ..item.clone()
    }
}
