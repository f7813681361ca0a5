//! Due and upcoming review queries.
//!
//! Both queries order by `next_review_date` ascending, so the items that have
//! waited longest come first. Ties keep their collection order.

use super::ReviewItem;
use crate::clock::days_after;
use chrono::{DateTime, Utc};

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Items with `next_review_date <= now`, most overdue first.
pub fn select_due(items: &[ReviewItem], now: DateTime<Utc>) -> Vec<&ReviewItem> {
    let mut due: Vec<&ReviewItem> = items.iter().filter(|item| item.is_due(now)).collect();
    due.sort_by_key(|item| item.next_review_date);
    due
}

/// Items falling due in `(now, now + days]`.
pub fn select_upcoming(items: &[ReviewItem], now: DateTime<Utc>, days: u32) -> Vec<&ReviewItem> {
    let horizon = days_after(now, days);
    let mut upcoming: Vec<&ReviewItem> = items
        .iter()
        .filter(|item| item.next_review_date > now && item.next_review_date <= horizon)
        .collect();
    upcoming.sort_by_key(|item| item.next_review_date);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn due_at(id: &str, next: DateTime<Utc>) -> ReviewItem {
        ReviewItem {
            next_review_date: next,
            last_review_date: next - Duration::days(1),
            ..ReviewItem::new(id, id, id, "l1", now())
        }
    }

    #[test]
    fn test_empty_collection() {
        assert!(select_due(&[], now()).is_empty());
        assert!(select_upcoming(&[], now(), DEFAULT_UPCOMING_DAYS).is_empty());
    }

    #[test]
    fn test_due_sorted_most_overdue_first() {
        let items = vec![
            due_at("yesterday", now() - Duration::days(1)),
            due_at("tomorrow", now() + Duration::days(1)),
            due_at("last-week", now() - Duration::days(7)),
            due_at("exactly-now", now()),
            due_at("hour-ago", now() - Duration::hours(1)),
        ];

        let ids: Vec<&str> = select_due(&items, now())
            .iter()
            .map(|item| item.vocab_id.as_str())
            .collect();
        assert_eq!(ids, vec!["last-week", "yesterday", "hour-ago", "exactly-now"]);
    }

    #[test]
    fn test_due_ordering_is_monotonic() {
        let items: Vec<ReviewItem> = [5, -3, 0, -10, 2, -1, -7]
            .iter()
            .enumerate()
            .map(|(i, offset)| due_at(&format!("v{i}"), now() + Duration::hours(*offset)))
            .collect();

        let due = select_due(&items, now());
        assert_eq!(due.len(), 5);
        for pair in due.windows(2) {
            assert!(pair[0].next_review_date <= pair[1].next_review_date);
        }
    }

    #[test]
    fn test_upcoming_window() {
        let items = vec![
            due_at("overdue", now() - Duration::days(2)),
            due_at("now", now()),
            due_at("in-three", now() + Duration::days(3)),
            due_at("in-one", now() + Duration::days(1)),
            due_at("in-seven", now() + Duration::days(7)),
            due_at("in-eight", now() + Duration::days(8)),
        ];

        let ids: Vec<&str> = select_upcoming(&items, now(), DEFAULT_UPCOMING_DAYS)
            .iter()
            .map(|item| item.vocab_id.as_str())
            .collect();
        assert_eq!(ids, vec!["in-one", "in-three", "in-seven"]);

        let ids: Vec<&str> = select_upcoming(&items, now(), 2)
            .iter()
            .map(|item| item.vocab_id.as_str())
            .collect();
        assert_eq!(ids, vec!["in-one"]);
    }

    #[test]
    fn test_upcoming_with_huge_window() {
        let items = vec![
            due_at("overdue", now() - Duration::days(1)),
            due_at("soon", now() + Duration::days(2)),
            due_at("far", now() + Duration::days(40_000)),
        ];

        let ids: Vec<&str> = select_upcoming(&items, now(), u32::MAX)
            .iter()
            .map(|item| item.vocab_id.as_str())
            .collect();
        assert_eq!(ids, vec!["soon", "far"]);
    }
}
