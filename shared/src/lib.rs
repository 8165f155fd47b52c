//! Shared types for the café reservation frontend
//!
//! Domain models mirroring the booking service, auth DTOs, page view state,
//! error codes and the time-slot / form validation core.

pub mod client;
pub mod error;
pub mod models;
pub mod validation;
pub mod view;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use view::ViewState;
