//! Home / Detail Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use shared::ViewState;
use shared::models::{Table, UserInfo};
use shared::validation::{
    TimeRange, compute_time_range, filter_tables_by_capacity, parse_guest_count,
};

use crate::api::load;
use crate::auth::SessionCookies;
use crate::core::ServerState;
use crate::utils::PageResult;
use crate::utils::error::FETCH_TABLES_FAILED;

/// Slot shown on the detail page when no start time is chosen
pub const DEFAULT_SLOT_START: &str = "18:00";

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Raw party size; blank means no filter
    pub guests: Option<String>,
}

impl HomeQuery {
    /// Positive party size, `None` when absent or not positive
    fn party_size(&self) -> PageResult<Option<i32>> {
        match self.guests.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(parse_guest_count(raw)?).filter(|g| *g > 0)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TableCard {
    #[serde(flatten)]
    pub table: Table,
    /// Available and large enough for the requested party
    pub bookable: bool,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub user: Option<UserInfo>,
    pub guests: Option<i32>,
    pub tables: ViewState<Vec<TableCard>>,
}

/// GET / - 桌台列表，可按人数过滤
pub async fn home(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Query(query): Query<HomeQuery>,
) -> PageResult<Json<HomeView>> {
    let guests = query.party_size()?;
    let tables = load(state.api.list_tables().await, FETCH_TABLES_FAILED)?.map(|tables| {
        filter_tables_by_capacity(tables, guests)
            .into_iter()
            .map(|table| TableCard {
                bookable: table.is_bookable(guests.unwrap_or(1)),
                table,
            })
            .collect()
    });

    Ok(Json(HomeView {
        user: SessionCookies::from_headers(&headers).user_info(),
        guests,
        tables,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub table: ViewState<Table>,
    pub time: String,
    pub time_range: Option<TimeRange>,
    pub time_error: Option<String>,
}

/// GET /detail/{id}?time=HH:MM - 桌台详情 + 时段预览
pub async fn detail(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> PageResult<Json<DetailView>> {
    let table = load(state.api.get_table(&id).await, FETCH_TABLES_FAILED)?;

    let time = query
        .time
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SLOT_START.to_string());
    let (time_range, time_error) = match compute_time_range(&time) {
        Ok(range) => (Some(range), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Ok(Json(DetailView {
        table,
        time,
        time_range,
        time_error,
    }))
}
