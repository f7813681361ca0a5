//! Load/save boundary between the scheduler and a [`BlobStore`].
//!
//! Review items and session history live under two separate keys, each as a
//! versioned JSON envelope: `{"version": 1, "items": [...]}` and
//! `{"version": 1, "sessions": [...]}`. A bare JSON array is the unversioned
//! legacy shape and is migrated on load.

use crate::error::{Error, Result};
use crate::models::{ReviewItem, ReviewSession, push_session};
use crate::store::BlobStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const ITEMS_KEY: &str = "neolingua.review_items";
pub const SESSIONS_KEY: &str = "neolingua.review_sessions";
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) const ITEMS_FIELD: &str = "items";
const SESSIONS_FIELD: &str = "sessions";

pub(crate) fn encode_collection<T: Serialize>(records: &[T], field: &str) -> Result<Value> {
    let mut envelope = Map::new();
    envelope.insert("version".to_string(), Value::from(SCHEMA_VERSION));
    envelope.insert(field.to_string(), serde_json::to_value(records)?);
    Ok(Value::Object(envelope))
}

pub(crate) fn decode_collection<T: DeserializeOwned>(raw: &str, field: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(raw)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    match value {
        Value::Object(mut envelope) => {
            let version = envelope.get("version").and_then(Value::as_u64).unwrap_or(0);
            if version != u64::from(SCHEMA_VERSION) {
                return Err(Error::UnsupportedVersion(
                    u32::try_from(version).unwrap_or(u32::MAX),
                ));
            }
            let records = envelope
                .remove(field)
                .unwrap_or_else(|| Value::Array(Vec::new()));
            Ok(serde_json::from_value(records)?)
        }
        _ => Err(<serde_json::Error as serde::de::Error>::custom(
            "expected a JSON array or a versioned object",
        )
        .into()),
    }
}

/// Persistence adapter for review items and session history.
#[derive(Debug)]
pub struct ReviewRepository<S> {
    store: S,
}

impl<S: BlobStore> ReviewRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the review collection. Missing, unreadable or malformed data
    /// yields an empty collection.
    pub fn load(&self) -> Vec<ReviewItem> {
        let items = self.read(ITEMS_KEY, ITEMS_FIELD);
        tracing::debug!(count = items.len(), "loaded review items");
        items
    }

    /// Replaces the stored collection with `items`.
    pub fn save(&self, items: &[ReviewItem]) -> Result<()> {
        self.write(ITEMS_KEY, ITEMS_FIELD, items)?;
        tracing::debug!(count = items.len(), "saved review items");
        Ok(())
    }

    /// Session history, oldest first.
    pub fn load_sessions(&self) -> Vec<ReviewSession> {
        self.read(SESSIONS_KEY, SESSIONS_FIELD)
    }

    /// Appends to the session history, keeping only the most recent entries.
    /// Read-modify-write without locking: concurrent writers can lose updates.
    pub fn append_session(&self, session: ReviewSession) -> Result<()> {
        let mut history = self.load_sessions();
        tracing::info!(
            session_id = %session.session_id,
            reviewed = session.items_reviewed,
            accuracy = session.accuracy,
            "recording review session"
        );
        push_session(&mut history, session);
        self.write(SESSIONS_KEY, SESSIONS_FIELD, &history)
    }

    fn read<T: DeserializeOwned>(&self, key: &str, field: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read stored data, starting empty");
                return Vec::new();
            }
        };

        decode_collection(&raw, field).unwrap_or_else(|err| {
            tracing::warn!(key, error = %err, "discarding malformed stored data");
            Vec::new()
        })
    }

    fn write<T: Serialize>(&self, key: &str, field: &str, records: &[T]) -> Result<()> {
        let value = encode_collection(records, field)?;
        self.store.put(key, &serde_json::to_string(&value)?)
    }
}
