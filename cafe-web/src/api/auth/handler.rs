//! Auth Handlers

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use shared::validation::{LoginForm, RegisterForm, validate_login_form, validate_register_form};

use crate::auth::{CookieOptions, Session, clear_session_cookies, set_session_cookies};
use crate::auth::guard::LOGIN_PATH;
use crate::core::ServerState;
use crate::security_log;
use crate::utils::{PageError, PageResult};

/// Set the session cookies and send the user to their landing page
fn start_session(state: &ServerState, session: Session) -> Response {
    let headers = set_session_cookies(&session, CookieOptions::from_config(&state.config));
    (headers, Redirect::to(session.landing_path())).into_response()
}

/// POST /login
pub async fn login(
    State(state): State<ServerState>,
    Form(form): Form<LoginForm>,
) -> PageResult<Response> {
    let req = validate_login_form(&form)?;
    let session: Session = state
        .api
        .login(&req)
        .await
        .map_err(|e| {
            security_log!("WARN", "login_failed", email = req.email.clone(), error = e.to_string());
            PageError::auth(e)
        })?
        .into();

    security_log!(
        "INFO",
        "login_success",
        username = session.user.username.clone(),
        role = session.user.role.as_str()
    );
    Ok(start_session(&state, session))
}

/// POST /register
pub async fn register(
    State(state): State<ServerState>,
    Form(form): Form<RegisterForm>,
) -> PageResult<Response> {
    let req = validate_register_form(&form)?;
    let session: Session = state
        .api
        .register(&req)
        .await
        .map_err(PageError::auth)?
        .into();

    tracing::info!(username = %session.user.username, "User registered");
    Ok(start_session(&state, session))
}

/// POST /logout
pub async fn logout() -> Response {
    (clear_session_cookies(), Redirect::to(LOGIN_PATH)).into_response()
}
