use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Feedback;

// -- JWT Claims --

/// Claims carried by the bearer tokens the site's auth service issues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: usize,
}

// -- Feedbacks --

/// Form body of `POST /feedbacks/new`.
///
/// Every field defaults to empty so that a missing `content` reaches
/// validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitFeedbackForm {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Page context for `GET /feedbacks`. `uid` is `None` for anonymous visitors.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackPage {
    pub feedbacks: Vec<Feedback>,
    pub uid: Option<Uuid>,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
