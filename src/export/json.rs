//! JSON export/import of a review collection.
//! Uses the same versioned layout as the persisted store, so an exported file
//! can be restored on another device.

use crate::error::Result;
use crate::models::ReviewItem;
use crate::persistence::{ITEMS_FIELD, decode_collection, encode_collection};
use std::fs;
use std::path::Path;

/// Exports the collection, pretty-printed, to `path`.
pub fn export_json_to_path(items: &[ReviewItem], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(&encode_collection(items, ITEMS_FIELD)?)?;
    fs::write(path, json_string)?;
    tracing::info!(count = items.len(), path = %path.display(), "exported review items");
    Ok(())
}

/// Imports a collection from `path`.
/// Unlike loading from the store, missing files and invalid JSON are errors.
pub fn import_json(path: impl AsRef<Path>) -> Result<Vec<ReviewItem>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let items: Vec<ReviewItem> = decode_collection(&contents, ITEMS_FIELD)?;
    tracing::info!(count = items.len(), path = %path.display(), "imported review items");
    Ok(items)
}
