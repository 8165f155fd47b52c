// Shared fixtures for router tests: a recording BookingApi double and
// helpers that drive the app with tower's oneshot.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use cafe_client::{BookingApi, ClientError, ClientResult};
use cafe_web::auth::{CookieOptions, Session, set_session_cookies};
use cafe_web::{Config, ServerState, build_app};
use http_body_util::BodyExt;
use serde_json::Value;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use shared::models::{
    Booking, BookingCreate, BookingStatus, BookingTable, Role, Table, TableCreate, UserInfo,
};
use tower::ServiceExt;

/// How the double answers a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    None,
    Unauthorized,
    ServerError,
    Conflict,
}

#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<String>>,
    pub tables: Mutex<Vec<Table>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub created_bookings: Mutex<Vec<BookingCreate>>,
    pub created_tables: Mutex<Vec<TableCreate>>,
    pub status_updates: Mutex<Vec<(String, BookingStatus)>>,
    pub tokens: Mutex<Vec<String>>,
    pub failure: Mutex<Option<Failure>>,
    /// Restrict `failure` to one call name
    pub fail_only: Mutex<Option<&'static str>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        let api = MockApi::default();
        *api.tables.lock().unwrap() = vec![
            table("t1", 1, "Beach View", 4, true),
            table("t2", 2, "Garden", 2, true),
            table("t3", 3, "Family", 8, false),
        ];
        *api.bookings.lock().unwrap() = vec![
            booking("b1", BookingStatus::Pending),
            booking("b2", BookingStatus::Confirmed),
            booking("b3", BookingStatus::Cancelled),
        ];
        Arc::new(api)
    }

    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    /// Fail only the named call
    pub fn fail_call(&self, name: &'static str, failure: Failure) {
        *self.fail_only.lock().unwrap() = Some(name);
        self.fail_with(failure);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls().iter().any(|c| c == name)
    }

    fn enter(&self, name: &str, token: Option<&str>) -> ClientResult<()> {
        self.calls.lock().unwrap().push(name.to_string());
        if let Some(t) = token {
            self.tokens.lock().unwrap().push(t.to_string());
        }
        if let Some(only) = *self.fail_only.lock().unwrap() {
            if only != name {
                return Ok(());
            }
        }
        match *self.failure.lock().unwrap() {
            None | Some(Failure::None) => Ok(()),
            Some(Failure::Unauthorized) => Err(ClientError::Unauthorized(Some(
                "Not authorized, token failed".into(),
            ))),
            Some(Failure::ServerError) => Err(ClientError::Api {
                status: 500,
                message: None,
            }),
            Some(Failure::Conflict) => Err(ClientError::Api {
                status: 409,
                message: Some("Table is already booked for this time".into()),
            }),
        }
    }
}

#[async_trait]
impl BookingApi for MockApi {
    async fn login(&self, req: &LoginRequest) -> ClientResult<AuthResponse> {
        self.enter("login", None)?;
        if req.password != "pw" {
            return Err(ClientError::Validation(Some("Invalid credentials".into())));
        }
        let role = if req.email.starts_with("admin") {
            Role::Admin
        } else {
            Role::User
        };
        let username = req.email.split('@').next().unwrap_or_default().to_string();
        Ok(AuthResponse {
            token: format!("token-{username}"),
            user: UserInfo {
                username,
                email: req.email.clone(),
                role,
            },
        })
    }

    async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.enter("register", None)?;
        Ok(AuthResponse {
            token: "token-new".into(),
            user: UserInfo {
                username: req.username.clone(),
                email: req.email.clone(),
                role: Role::User,
            },
        })
    }

    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        self.enter("list_tables", None)?;
        Ok(self.tables.lock().unwrap().clone())
    }

    async fn get_table(&self, id: &str) -> ClientResult<Table> {
        self.enter("get_table", None)?;
        self.tables
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(Some("Table not found".into())))
    }

    async fn create_table(&self, token: &str, table: &TableCreate) -> ClientResult<()> {
        self.enter("create_table", Some(token))?;
        self.created_tables.lock().unwrap().push(table.clone());
        Ok(())
    }

    async fn delete_table(&self, token: &str, _id: &str) -> ClientResult<()> {
        self.enter("delete_table", Some(token))
    }

    async fn my_bookings(&self, token: &str) -> ClientResult<Vec<Booking>> {
        self.enter("my_bookings", Some(token))?;
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn all_bookings(&self, token: &str) -> ClientResult<Vec<Booking>> {
        self.enter("all_bookings", Some(token))?;
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn create_booking(&self, token: &str, booking: &BookingCreate) -> ClientResult<()> {
        self.enter("create_booking", Some(token))?;
        self.created_bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }

    async fn update_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<()> {
        self.enter("update_booking_status", Some(token))?;
        self.status_updates
            .lock()
            .unwrap()
            .push((id.to_string(), status));
        Ok(())
    }

    async fn cancel_booking(&self, token: &str, _id: &str) -> ClientResult<()> {
        self.enter("cancel_booking", Some(token))
    }
}

pub fn table(id: &str, number: i32, name: &str, capacity: i32, available: bool) -> Table {
    Table {
        id: id.into(),
        table_number: number,
        name: name.into(),
        capacity,
        is_available: available,
        description: format!("{name} table"),
        image_url: None,
    }
}

pub fn booking(id: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.into(),
        user: None,
        table: Some(BookingTable {
            id: "t1".into(),
            table_number: 1,
            name: "Beach View".into(),
            capacity: 4,
            image_url: None,
        }),
        date: "2026-05-01T00:00:00.000Z".into(),
        time: "18:00".into(),
        number_of_guests: 2,
        status,
        special_requests: None,
    }
}

pub fn app(api: Arc<MockApi>) -> Router {
    build_app(ServerState::new(Config::default(), api))
}

pub fn session(role: Role) -> Session {
    let name = match role {
        Role::Admin => "root",
        Role::User => "ana",
    };
    Session::new(
        format!("jwt-{name}"),
        UserInfo {
            username: name.into(),
            email: format!("{name}@cafe.test"),
            role,
        },
    )
}

/// `Cookie` request header carrying the session
pub fn cookie_header(session: &Session) -> String {
    let opts = CookieOptions {
        ttl_hours: 24,
        secure: false,
    };
    set_session_cookies(session, opts)
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn get(uri: &str, session: Option<&Session>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(s) = session {
        builder = builder.header(header::COOKIE, cookie_header(s));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, session: Option<&Session>, form: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(s) = session {
        builder = builder.header(header::COOKIE, cookie_header(s));
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> Response<Body> {
    app.oneshot(req).await.unwrap()
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(resp: &Response<Body>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn set_cookies(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}
