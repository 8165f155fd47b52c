//! Data models
//!
//! Mirror the booking service's JSON (camelCase fields, Mongo-style `_id`).

pub mod booking;
pub mod table;
pub mod user;

// Re-exports
pub use booking::*;
pub use table::*;
pub use user::*;
