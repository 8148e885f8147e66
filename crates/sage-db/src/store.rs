use anyhow::Result;

use crate::Database;
use crate::models::{FeedbackRow, NewFeedback};

/// Record store behind the feedback page. Handlers only ever see this trait,
/// so the storage technology can be swapped without touching them.
///
/// Methods are blocking; async callers run them on `spawn_blocking`.
pub trait FeedbackStore: Send + Sync {
    /// Persist a new record and return its store-assigned id. Ids are unique
    /// and strictly increasing.
    fn insert(&self, feedback: &NewFeedback) -> Result<i64>;

    /// Every stored record ordered by id, highest first.
    fn list_all_descending(&self) -> Result<Vec<FeedbackRow>>;
}

impl FeedbackStore for Database {
    fn insert(&self, feedback: &NewFeedback) -> Result<i64> {
        self.insert_feedback(feedback)
    }

    fn list_all_descending(&self) -> Result<Vec<FeedbackRow>> {
        self.get_feedbacks()
    }
}
