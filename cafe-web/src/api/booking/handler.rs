//! Booking Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use serde::Serialize;
use shared::models::Table;
use shared::validation::{
    BookingFormDraft, ValidBooking, precheck_booking_form, validate_booking_form,
};

use crate::auth::Session;
use crate::core::ServerState;
use crate::utils::PageResult;
use crate::utils::client_err;
use crate::utils::error::{CREATE_BOOKING_FAILED, FETCH_TABLES_FAILED};

/// Question shown before a booking is sent
pub const CONFIRM_PROMPT: &str = "Are you sure all the data are correct?";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPreview {
    pub table: Table,
    pub booking: ValidBooking,
    pub prompt: &'static str,
}

/// Validate the draft, load the table, validate against it
///
/// Input that fails without the table (missing fields, zero guests, bad date
/// or time) is rejected before any call to the booking service.
async fn validated(
    state: &ServerState,
    table_id: &str,
    draft: &BookingFormDraft,
) -> PageResult<(Table, ValidBooking)> {
    precheck_booking_form(draft)?;

    let table = state
        .api
        .get_table(table_id)
        .await
        .map_err(client_err(FETCH_TABLES_FAILED))?;
    let booking = validate_booking_form(draft, &table)?;
    Ok((table, booking))
}

/// POST /booking/{table_id}/preview - 确认弹窗数据 (不创建预订)
pub async fn preview(
    State(state): State<ServerState>,
    _session: Session,
    Path(table_id): Path<String>,
    Form(draft): Form<BookingFormDraft>,
) -> PageResult<Json<BookingPreview>> {
    let (table, booking) = validated(&state, &table_id, &draft).await?;
    Ok(Json(BookingPreview {
        table,
        booking,
        prompt: CONFIRM_PROMPT,
    }))
}

/// POST /booking/{table_id} - 创建预订，成功后跳转 /dashboard
pub async fn submit(
    State(state): State<ServerState>,
    session: Session,
    Path(table_id): Path<String>,
    Form(draft): Form<BookingFormDraft>,
) -> PageResult<Redirect> {
    let (table, booking) = validated(&state, &table_id, &draft).await?;

    state
        .api
        .create_booking(session.token(), &booking.to_create(&table.id))
        .await
        .map_err(client_err(CREATE_BOOKING_FAILED))?;

    tracing::info!(
        table = %table.name,
        user = %session.user.username,
        date = %booking.date,
        slot = %booking.time_range,
        guests = booking.number_of_guests,
        "Booking created"
    );
    Ok(Redirect::to("/dashboard"))
}
