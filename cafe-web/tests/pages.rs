mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use shared::models::{BookingStatus, Role};

#[tokio::test]
async fn test_home_filters_tables_by_party_size() {
    let api = MockApi::new();

    let resp = send(app(api.clone()), get("/?guests=3", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;

    assert_eq!(body["guests"], 3);
    assert_eq!(body["tables"]["state"], "ok");
    let tables = body["tables"]["data"].as_array().unwrap();
    let ids: Vec<_> = tables.iter().map(|t| t["_id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["t1", "t3"]);
    assert_eq!(tables[0]["bookable"], true);
    assert_eq!(tables[1]["bookable"], false);
}

#[tokio::test]
async fn test_home_rejects_non_numeric_party_size() {
    let api = MockApi::new();

    let resp = send(app(api.clone()), get("/?guests=abc", None)).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Number of guests must be a whole number, got 'abc'");
    assert!(api.calls().is_empty());

    let body = json_body(send(app(api), get("/?guests=", None)).await).await;
    assert!(body["guests"].is_null());
    assert_eq!(body["tables"]["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_home_shows_user_when_logged_in() {
    let api = MockApi::new();
    let user = session(Role::User);

    let body = json_body(send(app(api.clone()), get("/", Some(&user))).await).await;
    assert_eq!(body["user"]["username"], "ana");
    assert_eq!(body["tables"]["data"].as_array().unwrap().len(), 3);

    let body = json_body(send(app(api), get("/", None)).await).await;
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn test_home_fetch_failure_renders_fallback_message() {
    let api = MockApi::new();
    api.fail_with(Failure::ServerError);

    let resp = send(app(api), get("/", None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(
        body["tables"],
        json!({ "state": "err", "message": "Failed to fetch tables" })
    );
}

#[tokio::test]
async fn test_detail_previews_slot() {
    let api = MockApi::new();
    let user = session(Role::User);

    let body = json_body(send(app(api.clone()), get("/detail/t1?time=23:00", Some(&user))).await).await;
    assert_eq!(body["table"]["data"]["name"], "Beach View");
    assert_eq!(body["timeRange"], "23:00 - 00:30");
    assert!(body["timeError"].is_null());

    let body = json_body(send(app(api.clone()), get("/detail/t1", Some(&user))).await).await;
    assert_eq!(body["time"], "18:00");
    assert_eq!(body["timeRange"], "18:00 - 19:30");

    let body = json_body(send(app(api), get("/detail/t1?time=25:00", Some(&user))).await).await;
    assert!(body["timeRange"].is_null());
    assert_eq!(body["timeError"], "Hour must be between 00 and 23, got 25");
}

#[tokio::test]
async fn test_detail_unknown_table_shows_service_message() {
    let api = MockApi::new();
    let user = session(Role::User);

    let body = json_body(send(app(api), get("/detail/nope", Some(&user))).await).await;
    assert_eq!(body["table"]["state"], "err");
    assert_eq!(body["table"]["message"], "Table not found");
}

#[tokio::test]
async fn test_dashboard_lists_own_bookings() {
    let api = MockApi::new();
    let user = session(Role::User);

    let resp = send(app(api.clone()), get("/dashboard", Some(&user))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;

    let rows = body["bookings"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["timeRange"], "18:00 - 19:30");
    assert_eq!(rows[0]["canCancel"], true);
    assert_eq!(rows[1]["canCancel"], false);
    assert!(api.called("my_bookings"));
}

#[tokio::test]
async fn test_booking_on_deleted_table_keeps_pages_working() {
    let api = MockApi::new();
    api.bookings.lock().unwrap()[1].table = None;

    let user = session(Role::User);
    let body = json_body(send(app(api.clone()), get("/dashboard", Some(&user))).await).await;
    assert_eq!(body["bookings"]["state"], "ok");
    let rows = body["bookings"]["data"].as_array().unwrap();
    assert_eq!(rows[0]["tableName"], "Beach View");
    assert_eq!(rows[1]["tableName"], "Unknown");
    assert!(rows[1]["table"].is_null());
    assert_eq!(rows[1]["day"], "2026-05-01");

    let admin = session(Role::Admin);
    let body = json_body(send(app(api), get("/admin/dashboard", Some(&admin))).await).await;
    let rows = body["bookings"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1]["tableName"], "Unknown");
}

#[tokio::test]
async fn test_dashboard_401_ends_session() {
    let api = MockApi::new();
    api.fail_with(Failure::Unauthorized);
    let user = session(Role::User);

    let resp = send(app(api), get("/dashboard", Some(&user))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert_eq!(set_cookies(&resp).len(), 2);
}

#[tokio::test]
async fn test_cancel_booking_redirects_to_dashboard() {
    let api = MockApi::new();
    let user = session(Role::User);

    let resp = send(
        app(api.clone()),
        post_form("/dashboard/bookings/b1/cancel", Some(&user), ""),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");
    assert!(api.called("cancel_booking"));
}

#[tokio::test]
async fn test_admin_dashboard_filters_by_status() {
    let api = MockApi::new();
    let admin = session(Role::Admin);

    let body = json_body(send(app(api.clone()), get("/admin/dashboard?status=pending", Some(&admin))).await).await;
    assert_eq!(body["filter"], "pending");
    let rows = body["bookings"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["_id"], "b1");
    assert_eq!(rows[0]["actions"], json!(["confirmed", "cancelled"]));

    let body = json_body(send(app(api.clone()), get("/admin/dashboard", Some(&admin))).await).await;
    assert_eq!(body["filter"], "all");
    assert_eq!(body["bookings"]["data"].as_array().unwrap().len(), 3);

    let resp = send(app(api), get("/admin/dashboard?status=lost", Some(&admin))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_updates_status() {
    let api = MockApi::new();
    let admin = session(Role::Admin);

    let resp = send(
        app(api.clone()),
        post_form("/admin/bookings/b1/status", Some(&admin), "status=confirmed"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/dashboard");
    assert_eq!(
        *api.status_updates.lock().unwrap(),
        vec![("b1".to_string(), BookingStatus::Confirmed)]
    );
}

#[tokio::test]
async fn test_admin_status_update_failure_uses_fallback() {
    let api = MockApi::new();
    api.fail_with(Failure::ServerError);
    let admin = session(Role::Admin);

    let resp = send(
        app(api),
        post_form("/admin/bookings/b1/status", Some(&admin), "status=completed"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Failed to update booking status");
}

#[tokio::test]
async fn test_admin_creates_table() {
    let api = MockApi::new();
    let admin = session(Role::Admin);

    let resp = send(
        app(api.clone()),
        post_form(
            "/admin/tables",
            Some(&admin),
            "tableNumber=7&name=Patio&capacity=6&description=Outside&imageUrl=",
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/tables");

    let created = api.created_tables.lock().unwrap().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].table_number, 7);
    assert_eq!(created[0].capacity, 6);
    assert!(created[0].image_url.is_none());
}

#[tokio::test]
async fn test_admin_table_form_validation() {
    let api = MockApi::new();
    let admin = session(Role::Admin);

    let cases = [
        ("tableNumber=7&name=Patio&capacity=6", "Please fill in all required fields"),
        ("tableNumber=0&name=Patio&capacity=6&description=x", "Table number must be greater than 0"),
        ("tableNumber=7&name=Patio&capacity=-2&description=x", "Capacity must be greater than 0"),
    ];
    for (form, message) in cases {
        let resp = send(app(api.clone()), post_form("/admin/tables", Some(&admin), form)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{form}");
        let body = json_body(resp).await;
        assert_eq!(body["message"], message);
    }
    assert!(!api.called("create_table"));
}

#[tokio::test]
async fn test_admin_deletes_table() {
    let api = MockApi::new();
    let admin = session(Role::Admin);

    let resp = send(app(api.clone()), post_form("/admin/tables/t2/delete", Some(&admin), "")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/tables");
    assert!(api.called("delete_table"));

    let body = json_body(send(app(api), get("/admin/tables", Some(&admin))).await).await;
    assert_eq!(body["tables"]["state"], "ok");
}
