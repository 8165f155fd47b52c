//! 管理后台 - 所有预订与桌台管理
//!
//! 路由守卫已拦截非管理员；处理器再通过 [`AdminSession`](crate::auth::AdminSession) 校验一次。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::{AdminBookingRow, AdminDashboardView, AdminTablesView};

pub fn router() -> Router<ServerState> {
    Router::new().nest("/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/dashboard", get(handler::all_bookings))
        .route("/bookings/{id}/status", post(handler::update_status))
        .route("/tables", get(handler::list_tables).post(handler::create_table))
        .route("/tables/{id}/delete", post(handler::delete_table))
}
