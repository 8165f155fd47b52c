//! Cafe Client - HTTP client for the booking service
//!
//! Provides typed REST calls for tables, bookings and authentication.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::BookingApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, LoginRequest, RegisterRequest};
