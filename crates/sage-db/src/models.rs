//! Row types as read from and written to SQLite. The API crate maps them
//! onto `sage_types` models.

pub struct FeedbackRow {
    pub id: i64,
    pub content: String,
    pub name: String,
    pub email: String,
    pub ip: String,
    pub created_at: String,
}

/// A feedback record that has not been stored yet; the store assigns `id`
/// and `created_at`.
#[derive(Debug, Clone, Default)]
pub struct NewFeedback {
    pub content: String,
    pub name: String,
    pub email: String,
    pub ip: String,
}
