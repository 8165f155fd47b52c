//! 登录 / 注册 / 登出
//!
//! 成功后写入会话 cookie 并跳转：管理员到 `/admin/dashboard`，其他用户到 `/`。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/register", post(handler::register))
        .route("/logout", post(handler::logout))
}
