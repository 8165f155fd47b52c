//! 预订提交
//!
//! 表单先在本地校验 (字段 → 人数 → 日期 → 时间)，不合格的请求不会到达预订服务。

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::{BookingPreview, CONFIRM_PROMPT};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/booking/{table_id}", post(handler::submit))
        .route("/booking/{table_id}/preview", post(handler::preview))
}
