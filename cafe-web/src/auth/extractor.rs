//! Session Extractor
//!
//! Handlers take [`Session`] (or [`AdminSession`]) as an argument instead of
//! reading cookies themselves.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{Session, SessionCookies};
use crate::security_log;
use crate::utils::PageError;

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Injected by the route guard
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(session.clone());
        }

        match SessionCookies::from_headers(&parts.headers).session() {
            Some(session) => {
                parts.extensions.insert(session.clone());
                Ok(session)
            }
            None => {
                security_log!("WARN", "session_invalid", uri = format!("{:?}", parts.uri));
                Err(PageError::SessionExpired)
            }
        }
    }
}

/// Session of an admin user
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl<S: Send + Sync> FromRequestParts<S> for AdminSession {
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        if !session.is_admin() {
            security_log!(
                "WARN",
                "admin_required",
                username = session.user.username.clone(),
                uri = format!("{:?}", parts.uri)
            );
            return Err(PageError::AdminRequired);
        }
        Ok(AdminSession(session))
    }
}

impl std::ops::Deref for AdminSession {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.0
    }
}
