use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    response::Redirect,
};
use tracing::{error, info, warn};

use sage_db::models::{FeedbackRow, NewFeedback};
use sage_types::api::{FeedbackPage, SubmitFeedbackForm};
use sage_types::models::Feedback;

use crate::auth::{AppState, CurrentUser};
use crate::error::ApiError;
use crate::remote::RemoteAddr;

pub const FEEDBACKS_PATH: &str = "/feedbacks";

pub const MISSING_CONTENT: &str = "please enter feedback content";

/// GET /feedbacks: every feedback, newest first, plus who is looking.
pub async fn list_feedbacks(
    State(state): State<AppState>,
    CurrentUser(uid): CurrentUser,
) -> Result<Json<FeedbackPage>, ApiError> {
    // Run blocking DB query off the async runtime
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.list_all_descending())
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            anyhow::Error::from(e)
        })??;

    let feedbacks = rows.into_iter().map(to_feedback).collect();

    Ok(Json(FeedbackPage { feedbacks, uid }))
}

/// POST /feedbacks/new: store a feedback and send the visitor back to the list.
pub async fn submit_feedback(
    State(state): State<AppState>,
    RemoteAddr(ip): RemoteAddr,
    form: Result<Form<SubmitFeedbackForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        // Nothing was posted as a form, so every field is missing.
        Err(FormRejection::InvalidFormContentType(_)) => SubmitFeedbackForm::default(),
        Err(e) => return Err(ApiError::BadArgument(e.body_text())),
    };
    let feedback = new_feedback(form, ip)?;

    let store = state.store.clone();
    let id = tokio::task::spawn_blocking(move || store.insert(&feedback))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            anyhow::Error::from(e)
        })??;

    info!("Feedback {} stored", id);
    Ok(Redirect::to(FEEDBACKS_PATH))
}

/// Content is checked and kept exactly as sent; only name and email are trimmed.
fn new_feedback(form: SubmitFeedbackForm, ip: String) -> Result<NewFeedback, ApiError> {
    if form.content.is_empty() {
        return Err(ApiError::BadArgument(MISSING_CONTENT.to_string()));
    }

    Ok(NewFeedback {
        content: form.content,
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        ip,
    })
}

fn to_feedback(row: FeedbackRow) -> Feedback {
    let created_at = row
        .created_at
        .parse::<chrono::DateTime<chrono::Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            chrono::NaiveDateTime::parse_from_str(&row.created_at, "%Y-%m-%d %H:%M:%S")
                .map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on feedback {}: {}", row.created_at, row.id, e);
            chrono::DateTime::default()
        });

    Feedback {
        id: row.id,
        content: row.content,
        name: row.name,
        email: row.email,
        ip: row.ip,
        created_at,
    }
}
