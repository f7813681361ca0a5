//! Application layer around the scheduler.
//! Loads the collection, applies scheduler operations with one clock reading
//! per command, and saves the result back.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::export::json::{export_json_to_path, import_json};
use crate::models::{
    Mastery, Quality, ReviewItem, ReviewSession, ReviewStats, StudySession, classify_mastery,
    items_for_lesson, record_outcome, select_due, select_upcoming,
};
use crate::persistence::ReviewRepository;
use crate::store::BlobStore;
use std::path::Path;

pub struct ReviewApp<S, C> {
    repo: ReviewRepository<S>,
    clock: C,
}

impl<S: BlobStore, C: Clock> ReviewApp<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            repo: ReviewRepository::new(store),
            clock,
        }
    }

    pub fn items(&self) -> Vec<ReviewItem> {
        self.repo.load()
    }

    /// Starts tracking a word the learner has just studied.
    pub fn add_word(
        &self,
        vocab_id: &str,
        word: &str,
        meaning: &str,
        lesson_id: &str,
    ) -> Result<ReviewItem> {
        let mut items = self.repo.load();
        if items.iter().any(|item| item.vocab_id == vocab_id) {
            return Err(Error::DuplicateItem(vocab_id.to_string()));
        }

        let item = ReviewItem::new(vocab_id, word, meaning, lesson_id, self.clock.now());
        items.push(item.clone());
        self.repo.save(&items)?;
        tracing::info!(vocab_id, lesson_id, "added review item");
        Ok(item)
    }

    /// Records one answer for `vocab_id` and persists the updated item.
    pub fn review(&self, vocab_id: &str, quality: Quality) -> Result<ReviewItem> {
        let mut items = self.repo.load();
        let slot = items
            .iter_mut()
            .find(|item| item.vocab_id == vocab_id)
            .ok_or_else(|| Error::UnknownItem(vocab_id.to_string()))?;

        let updated = record_outcome(slot, quality, self.clock.now());
        *slot = updated.clone();
        self.repo.save(&items)?;
        tracing::debug!(
            vocab_id,
            quality = quality.value(),
            interval = updated.interval,
            "recorded review outcome"
        );
        Ok(updated)
    }

    pub fn due(&self) -> Vec<ReviewItem> {
        let items = self.repo.load();
        select_due(&items, self.clock.now())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn upcoming(&self, days: u32) -> Vec<ReviewItem> {
        let items = self.repo.load();
        select_upcoming(&items, self.clock.now(), days)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn lesson(&self, lesson_id: &str) -> Vec<ReviewItem> {
        let items = self.repo.load();
        items_for_lesson(&items, lesson_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn mastery(&self, vocab_id: &str) -> Result<Mastery> {
        self.repo
            .load()
            .iter()
            .find(|item| item.vocab_id == vocab_id)
            .map(classify_mastery)
            .ok_or_else(|| Error::UnknownItem(vocab_id.to_string()))
    }

    pub fn stats(&self) -> ReviewStats {
        ReviewStats::compute(&self.repo.load(), self.clock.now())
    }

    pub fn sessions(&self) -> Vec<ReviewSession> {
        self.repo.load_sessions()
    }

    /// Runs a study session over the currently due items. `grade` is asked
    /// for each item in turn and returns `None` to stop early. Graded items
    /// are saved and the session is appended to the history when anything
    /// was reviewed.
    pub fn run_session(
        &self,
        mut grade: impl FnMut(&ReviewItem) -> Option<Quality>,
    ) -> Result<ReviewSession> {
        let mut items = self.repo.load();
        let mut session = StudySession::from_due(&items, self.clock.now());

        while let Some(item) = session.current_item() {
            let Some(quality) = grade(item) else {
                break;
            };
            session.grade_current(quality);
        }

        let (studied, summary) = session.finish();
        if summary.items_reviewed == 0 {
            return Ok(summary);
        }

        for updated in studied {
            if let Some(slot) = items.iter_mut().find(|item| item.vocab_id == updated.vocab_id) {
                *slot = updated;
            }
        }
        self.repo.save(&items)?;
        self.repo.append_session(summary.clone())?;
        Ok(summary)
    }

    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        let items = self.repo.load();
        export_json_to_path(&items, path)?;
        Ok(items.len())
    }

    /// Imports items from a file. Imported items replace tracked items with
    /// the same id; the rest are appended. Returns the number imported.
    pub fn import(&self, path: impl AsRef<Path>) -> Result<usize> {
        let imported = import_json(path)?;
        let count = imported.len();

        let mut items = self.repo.load();
        for item in imported {
            match items.iter_mut().find(|existing| existing.vocab_id == item.vocab_id) {
                Some(existing) => *existing = item,
                None => items.push(item),
            }
        }
        self.repo.save(&items)?;
        Ok(count)
    }
}
