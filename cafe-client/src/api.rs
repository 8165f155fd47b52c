//! Booking service API surface
//!
//! [`BookingApi`] is the seam between page handlers and the network. The web
//! frontend holds it as `Arc<dyn BookingApi>` so tests can swap in a double.

use async_trait::async_trait;
use reqwest::Method;
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
use shared::models::{
    Booking, BookingCreate, BookingStatus, BookingStatusUpdate, Table, TableCreate,
};

use crate::{ClientResult, HttpClient};

/// Typed calls to the booking service
///
/// Calls that need authentication take the session's bearer token.
#[async_trait]
pub trait BookingApi: Send + Sync {
    // ========== Auth ==========
    async fn login(&self, req: &LoginRequest) -> ClientResult<AuthResponse>;
    async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthResponse>;

    // ========== Tables ==========
    async fn list_tables(&self) -> ClientResult<Vec<Table>>;
    async fn get_table(&self, id: &str) -> ClientResult<Table>;
    async fn create_table(&self, token: &str, table: &TableCreate) -> ClientResult<()>;
    async fn delete_table(&self, token: &str, id: &str) -> ClientResult<()>;

    // ========== Bookings ==========
    async fn my_bookings(&self, token: &str) -> ClientResult<Vec<Booking>>;
    async fn all_bookings(&self, token: &str) -> ClientResult<Vec<Booking>>;
    async fn create_booking(&self, token: &str, booking: &BookingCreate) -> ClientResult<()>;
    async fn update_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<()>;
    async fn cancel_booking(&self, token: &str, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl BookingApi for HttpClient {
    async fn login(&self, req: &LoginRequest) -> ClientResult<AuthResponse> {
        self.post("auth/login", req, None).await
    }

    async fn register(&self, req: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.post("auth/register", req, None).await
    }

    async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        self.get("tables", None).await
    }

    async fn get_table(&self, id: &str) -> ClientResult<Table> {
        self.get(&format!("tables/{id}"), None).await
    }

    async fn create_table(&self, token: &str, table: &TableCreate) -> ClientResult<()> {
        self.send_json(Method::POST, "tables", table, Some(token))
            .await
    }

    async fn delete_table(&self, token: &str, id: &str) -> ClientResult<()> {
        self.delete(&format!("tables/{id}"), Some(token)).await
    }

    async fn my_bookings(&self, token: &str) -> ClientResult<Vec<Booking>> {
        self.get("bookings/my-bookings", Some(token)).await
    }

    async fn all_bookings(&self, token: &str) -> ClientResult<Vec<Booking>> {
        self.get("bookings/all", Some(token)).await
    }

    async fn create_booking(&self, token: &str, booking: &BookingCreate) -> ClientResult<()> {
        self.send_json(Method::POST, "bookings", booking, Some(token))
            .await
    }

    async fn update_booking_status(
        &self,
        token: &str,
        id: &str,
        status: BookingStatus,
    ) -> ClientResult<()> {
        self.send_json(
            Method::PATCH,
            &format!("bookings/{id}/status"),
            &BookingStatusUpdate { status },
            Some(token),
        )
        .await
    }

    async fn cancel_booking(&self, token: &str, id: &str) -> ClientResult<()> {
        self.delete(&format!("bookings/{id}"), Some(token)).await
    }
}
