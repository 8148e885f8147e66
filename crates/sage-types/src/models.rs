use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single piece of visitor feedback as shown on the feedback page.
/// Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub content: String,
    pub name: String,
    pub email: String,
    pub ip: String,
    pub created_at: DateTime<Utc>,
}
