pub mod mastery;
pub mod quality;
pub mod queue;
pub mod review_item;
pub mod review_session;
pub mod sm2;
pub mod stats;
pub mod study_session;

pub use mastery::{Mastery, classify_mastery};
pub use quality::Quality;
pub use queue::{DEFAULT_UPCOMING_DAYS, select_due, select_upcoming};
pub use review_item::{ReviewItem, items_for_lesson};
pub use review_session::{MAX_SESSION_HISTORY, ReviewSession, push_session};
pub use sm2::record_outcome;
pub use stats::ReviewStats;
pub use study_session::StudySession;
