//! 首页与桌台详情 (公开浏览)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{DetailView, HomeView, TableCard};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/detail/{id}", get(handler::detail))
}
