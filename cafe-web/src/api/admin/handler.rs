//! Admin Handlers

use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use shared::ViewState;
use shared::error::AppError;
use shared::models::{Booking, BookingFilter, BookingStatus, Table};
use shared::validation::{TableFormDraft, TimeRange, compute_time_range, validate_table_form};

use crate::api::load;
use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::utils::error::{
    CREATE_TABLE_FAILED, DELETE_TABLE_FAILED, FETCH_BOOKINGS_FAILED, FETCH_TABLES_FAILED,
    UPDATE_STATUS_FAILED,
};
use crate::utils::{PageResult, client_err};

// ========== Bookings ==========

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingRow {
    #[serde(flatten)]
    pub booking: Booking,
    pub table_name: String,
    pub day: String,
    pub time_range: Option<TimeRange>,
    /// Statuses the admin may request next
    pub actions: Vec<BookingStatus>,
}

impl From<Booking> for AdminBookingRow {
    fn from(booking: Booking) -> Self {
        Self {
            table_name: booking.table_name().to_string(),
            day: booking.day().to_string(),
            time_range: compute_time_range(&booking.time).ok(),
            actions: booking.status.admin_actions().to_vec(),
            booking,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminDashboardView {
    pub filter: String,
    pub bookings: ViewState<Vec<AdminBookingRow>>,
}

fn parse_filter(raw: Option<&str>) -> PageResult<BookingFilter> {
    raw.unwrap_or_default()
        .parse()
        .map_err(|e: shared::models::UnknownStatus| AppError::invalid_request(e.to_string()).into())
}

/// GET /admin/dashboard?status= - 所有预订 (可按状态过滤)
pub async fn all_bookings(
    State(state): State<ServerState>,
    admin: AdminSession,
    Query(query): Query<FilterQuery>,
) -> PageResult<Json<AdminDashboardView>> {
    let filter = parse_filter(query.status.as_deref())?;

    let bookings = load(
        state.api.all_bookings(admin.token()).await,
        FETCH_BOOKINGS_FAILED,
    )?
    .map(|list| {
        filter
            .apply(list)
            .into_iter()
            .map(AdminBookingRow::from)
            .collect()
    });

    Ok(Json(AdminDashboardView {
        filter: filter.to_string(),
        bookings,
    }))
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// POST /admin/bookings/{id}/status - 请求状态变更
pub async fn update_status(
    State(state): State<ServerState>,
    admin: AdminSession,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> PageResult<Redirect> {
    let status: BookingStatus = form
        .status
        .parse()
        .map_err(|e: shared::models::UnknownStatus| AppError::invalid_request(e.to_string()))?;

    state
        .api
        .update_booking_status(admin.token(), &id, status)
        .await
        .map_err(client_err(UPDATE_STATUS_FAILED))?;

    tracing::info!(booking = %id, %status, admin = %admin.user.username, "Booking status updated");
    Ok(Redirect::to("/admin/dashboard"))
}

// ========== Tables ==========

#[derive(Debug, Serialize)]
pub struct AdminTablesView {
    pub tables: ViewState<Vec<Table>>,
}

/// GET /admin/tables
pub async fn list_tables(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> PageResult<Json<AdminTablesView>> {
    let tables = load(state.api.list_tables().await, FETCH_TABLES_FAILED)?;
    Ok(Json(AdminTablesView { tables }))
}

/// POST /admin/tables - 新增桌台
pub async fn create_table(
    State(state): State<ServerState>,
    admin: AdminSession,
    Form(draft): Form<TableFormDraft>,
) -> PageResult<Redirect> {
    let table = validate_table_form(&draft)?;

    state
        .api
        .create_table(admin.token(), &table)
        .await
        .map_err(client_err(CREATE_TABLE_FAILED))?;

    tracing::info!(table_number = table.table_number, name = %table.name, "Table created");
    Ok(Redirect::to("/admin/tables"))
}

/// POST /admin/tables/{id}/delete - 删除桌台
pub async fn delete_table(
    State(state): State<ServerState>,
    admin: AdminSession,
    Path(id): Path<String>,
) -> PageResult<Redirect> {
    state
        .api
        .delete_table(admin.token(), &id)
        .await
        .map_err(client_err(DELETE_TABLE_FAILED))?;

    tracing::info!(table = %id, "Table deleted");
    Ok(Redirect::to("/admin/tables"))
}
