//! 用户的预订列表

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use handler::{BookingRow, DashboardView};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/dashboard", get(handler::my_bookings))
        .route("/dashboard/bookings/{id}/cancel", post(handler::cancel))
}
