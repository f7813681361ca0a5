//! Review session history records.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of sessions kept in the history log.
pub const MAX_SESSION_HISTORY: usize = 30;

/// Summary of one sitting of reviews.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSession {
    pub session_id: Uuid,
    pub date: DateTime<Utc>,
    pub items_reviewed: u32,
    /// Percentage of correct answers, 0-100.
    pub accuracy: u32,
}

impl ReviewSession {
    pub fn new(date: DateTime<Utc>, items_reviewed: u32, correct: u32) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            date,
            items_reviewed,
            accuracy: accuracy_percent(correct, items_reviewed),
        }
    }
}

fn accuracy_percent(correct: u32, reviewed: u32) -> u32 {
    if reviewed == 0 {
        return 0;
    }
    (f64::from(correct.min(reviewed)) * 100.0 / f64::from(reviewed)).round() as u32
}

/// Appends `session` and drops the oldest entries beyond the history cap.
pub fn push_session(history: &mut Vec<ReviewSession>, session: ReviewSession) {
    history.push(session);
    if history.len() > MAX_SESSION_HISTORY {
        let excess = history.len() - MAX_SESSION_HISTORY;
        history.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap() + Duration::days(n)
    }

    #[test]
    fn test_accuracy_percentage() {
        assert_eq!(ReviewSession::new(day(0), 10, 8).accuracy, 80);
        assert_eq!(ReviewSession::new(day(0), 3, 2).accuracy, 67);
        assert_eq!(ReviewSession::new(day(0), 0, 0).accuracy, 0);
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = ReviewSession::new(day(0), 1, 1);
        let b = ReviewSession::new(day(0), 1, 1);
        assert_ne!(a.session_id, b.session_id);
    }

    #[test]
    fn test_push_trims_oldest_first() {
        let mut history: Vec<ReviewSession> = (0..30)
            .map(|n| ReviewSession::new(day(n), 5, 4))
            .collect();
        let oldest_kept = history[1].session_id;

        let newest = ReviewSession::new(day(30), 7, 7);
        let newest_id = newest.session_id;
        push_session(&mut history, newest);

        assert_eq!(history.len(), MAX_SESSION_HISTORY);
        assert_eq!(history[0].session_id, oldest_kept);
        assert_eq!(history[29].session_id, newest_id);
        for pair in history.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_push_below_cap_keeps_everything() {
        let mut history = Vec::new();
        push_session(&mut history, ReviewSession::new(day(0), 2, 1));
        push_session(&mut history, ReviewSession::new(day(1), 2, 2));
        assert_eq!(history.len(), 2);
    }
}
