pub mod app;
pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod persistence;
pub mod store;

pub use app::ReviewApp;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use models::{
    Mastery, Quality, ReviewItem, ReviewSession, ReviewStats, StudySession, classify_mastery,
    record_outcome, select_due, select_upcoming,
};
pub use persistence::ReviewRepository;
pub use store::{BlobStore, MemoryStore};
