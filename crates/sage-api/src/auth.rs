use std::convert::Infallible;
use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;
use uuid::Uuid;

use sage_db::FeedbackStore;
use sage_types::api::Claims;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Arc<dyn FeedbackStore>,
    pub jwt_secret: String,
}

/// Identity of the visitor making the request, `None` when anonymous.
///
/// Tokens are issued elsewhere; this only reads them. A missing, malformed or
/// expired token never rejects the request, it just makes the visitor anonymous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Option<Uuid>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Ok(Self(None));
        };

        Ok(Self(uid_from_token(bearer.token(), &state.jwt_secret)))
    }
}

fn uid_from_token(token: &str, secret: &str) -> Option<Uuid> {
    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(data) => Some(data.claims.sub),
        Err(e) => {
            debug!("Ignoring unusable bearer token: {}", e);
            None
        }
    }
}
