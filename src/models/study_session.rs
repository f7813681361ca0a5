//! Study session over the items due at a single point in time.
//! Items answered incorrectly come back in later rounds until every item passes.

use super::queue::select_due;
use super::sm2::record_outcome;
use super::{Quality, ReviewItem, ReviewSession};
use chrono::{DateTime, Utc};

/// Walks the due items in due order. Every graded attempt goes through
/// `record_outcome` with the session's single clock reading.
#[derive(Debug)]
pub struct StudySession {
    items: Vec<ReviewItem>,
    passed: Vec<bool>,
    current_round: Vec<usize>,
    current_index: usize,
    now: DateTime<Utc>,
    attempts: u32,
    correct: u32,
}

impl StudySession {
    /// Starts a session from the items in `collection` that are due at `now`.
    pub fn from_due(collection: &[ReviewItem], now: DateTime<Utc>) -> Self {
        let items: Vec<ReviewItem> = select_due(collection, now).into_iter().cloned().collect();
        let passed = vec![false; items.len()];
        let current_round = (0..items.len()).collect();

        Self {
            items,
            passed,
            current_round,
            current_index: 0,
            now,
            attempts: 0,
            correct: 0,
        }
    }

    pub fn current_item(&self) -> Option<&ReviewItem> {
        self.current_round
            .get(self.current_index)
            .and_then(|&idx| self.items.get(idx))
    }

    /// Grades the current item and moves on. Returns the updated item, or
    /// `None` when the session is already complete.
    pub fn grade_current(&mut self, quality: Quality) -> Option<&ReviewItem> {
        let idx = *self.current_round.get(self.current_index)?;
        // Retries apply SM-2 again on top of the earlier attempt, so a
        // fail-then-pass sitting leaves the item two reviews further on.
        let updated = record_outcome(&self.items[idx], quality, self.now);

        self.attempts += 1;
        if quality.is_correct() {
            self.correct += 1;
        }
        self.passed[idx] = quality.is_correct();
        self.items[idx] = updated;

        self.advance();
        self.items.get(idx)
    }

    fn advance(&mut self) {
        if self.current_index + 1 < self.current_round.len() {
            self.current_index += 1;
        } else {
            self.start_next_round();
        }
    }

    /// Next round holds the items failed in this one. An empty round means
    /// the session is complete.
    fn start_next_round(&mut self) {
        let failed: Vec<usize> = self
            .current_round
            .iter()
            .copied()
            .filter(|&idx| !self.passed[idx])
            .collect();

        self.current_round = failed;
        self.current_index = 0;
    }

    pub fn is_completed(&self) -> bool {
        self.current_round.is_empty()
    }

    /// Ends the session, returning every item it touched (graded or not)
    /// and the summary record for the history log.
    pub fn finish(self) -> (Vec<ReviewItem>, ReviewSession) {
        let session = ReviewSession::new(self.now, self.attempts, self.correct);
        (self.items, session)
    }
}
