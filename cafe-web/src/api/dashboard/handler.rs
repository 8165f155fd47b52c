//! Dashboard Handlers

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::Serialize;
use shared::ViewState;
use shared::models::{Booking, UserInfo};
use shared::validation::{TimeRange, compute_time_range};

use crate::api::load;
use crate::auth::Session;
use crate::core::ServerState;
use crate::utils::error::{CANCEL_BOOKING_FAILED, FETCH_BOOKINGS_FAILED};
use crate::utils::{PageResult, client_err};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    #[serde(flatten)]
    pub booking: Booking,
    /// Table name, or "Unknown" when the table was deleted
    pub table_name: String,
    /// `YYYY-MM-DD` part of the booking date
    pub day: String,
    pub time_range: Option<TimeRange>,
    pub can_cancel: bool,
}

impl From<Booking> for BookingRow {
    fn from(booking: Booking) -> Self {
        Self {
            table_name: booking.table_name().to_string(),
            day: booking.day().to_string(),
            time_range: compute_time_range(&booking.time).ok(),
            can_cancel: booking.status.user_can_cancel(),
            booking,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: UserInfo,
    pub bookings: ViewState<Vec<BookingRow>>,
}

/// GET /dashboard - 我的预订
pub async fn my_bookings(
    State(state): State<ServerState>,
    session: Session,
) -> PageResult<Json<DashboardView>> {
    let bookings = load(
        state.api.my_bookings(session.token()).await,
        FETCH_BOOKINGS_FAILED,
    )?
    .map(|list| list.into_iter().map(BookingRow::from).collect());

    Ok(Json(DashboardView {
        user: session.user,
        bookings,
    }))
}

/// POST /dashboard/bookings/{id}/cancel - 取消预订 (仅 pending 可取消，由预订服务判定)
pub async fn cancel(
    State(state): State<ServerState>,
    session: Session,
    Path(id): Path<String>,
) -> PageResult<Redirect> {
    state
        .api
        .cancel_booking(session.token(), &id)
        .await
        .map_err(client_err(CANCEL_BOOKING_FAILED))?;

    tracing::info!(booking = %id, user = %session.user.username, "Booking cancelled");
    Ok(Redirect::to("/dashboard"))
}
