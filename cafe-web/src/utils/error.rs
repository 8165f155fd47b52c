//! 页面错误
//!
//! 所有失败都归结为一条页面级消息：
//!
//! | 来源 | 响应 |
//! |------|------|
//! | 表单校验失败 | 422 + `ApiResponse` (消息即页面提示) |
//! | 预订服务返回错误 | 服务端 `message`，否则操作对应的默认提示 |
//! | 预订服务 401 / 会话缺失 | 清除 cookie，303 跳转 `/login` |
//! | 非管理员访问后台 | 303 跳转 `/` |

use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use cafe_client::ClientError;
use http::StatusCode;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::validation::ValidationError;

use crate::auth::clear_session_cookies;
use crate::auth::guard::{HOME_PATH, LOGIN_PATH};

// ========== Fallback messages ==========
pub const FETCH_TABLES_FAILED: &str = "Failed to fetch tables";
pub const CREATE_TABLE_FAILED: &str = "Failed to create table";
pub const DELETE_TABLE_FAILED: &str = "Failed to delete table";
pub const FETCH_BOOKINGS_FAILED: &str = "Failed to fetch bookings";
pub const CREATE_BOOKING_FAILED: &str = "Failed to create booking";
pub const UPDATE_STATUS_FAILED: &str = "Failed to update booking status";
pub const CANCEL_BOOKING_FAILED: &str = "Failed to cancel booking";
pub const AUTH_FAILED: &str = "Something went wrong";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}", source.user_message(fallback))]
    Client {
        source: ClientError,
        fallback: &'static str,
    },

    #[error(transparent)]
    App(#[from] AppError),

    #[error("session expired")]
    SessionExpired,

    #[error("admin role required")]
    AdminRequired,
}

impl PageError {
    /// Booking service failure with the operation's fallback message
    pub fn client(source: ClientError, fallback: &'static str) -> Self {
        if source.is_unauthorized() {
            return PageError::SessionExpired;
        }
        PageError::Client { source, fallback }
    }

    /// Login/register failure: a 401 there means bad credentials, not an expired session
    pub fn auth(source: ClientError) -> Self {
        let message = source.user_message(AUTH_FAILED);
        let code = match &source {
            ClientError::Unauthorized(_) => ErrorCode::InvalidCredentials,
            _ => client_error_code(&source),
        };
        PageError::App(AppError::with_message(code, message))
    }

    /// Message a page shows for this error
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Closure adapter for `map_err`
pub fn client_err(fallback: &'static str) -> impl FnOnce(ClientError) -> PageError {
    move |e| PageError::client(e, fallback)
}

fn client_error_code(err: &ClientError) -> ErrorCode {
    match err {
        ClientError::Unauthorized(_) => ErrorCode::NotAuthenticated,
        ClientError::Forbidden(_) => ErrorCode::PermissionDenied,
        ClientError::NotFound(_) => ErrorCode::NotFound,
        ClientError::Validation(_) => ErrorCode::ValidationFailed,
        ClientError::Api { status: 409, .. } => ErrorCode::AlreadyExists,
        ClientError::Api { status, .. } if (400..500).contains(status) => {
            ErrorCode::InvalidRequest
        }
        e if e.is_timeout() => ErrorCode::TimeoutError,
        e if e.is_network() => ErrorCode::NetworkError,
        _ => ErrorCode::UpstreamError,
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Validation(err) => {
                let body = ApiResponse::<()>::error(&AppError::from(err));
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            PageError::Client { source, fallback } => {
                tracing::warn!(error = %source, fallback, "booking service call failed");
                let app = AppError::with_message(
                    client_error_code(&source),
                    source.user_message(fallback),
                );
                app.into_response()
            }
            PageError::App(err) => err.into_response(),
            PageError::SessionExpired => {
                (clear_session_cookies(), Redirect::to(LOGIN_PATH)).into_response()
            }
            PageError::AdminRequired => Redirect::to(HOME_PATH).into_response(),
        }
    }
}
