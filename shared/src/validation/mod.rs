//! Time-slot computation and form validation
//!
//! Pure functions; page handlers call them before any request to the booking
//! service is made.

mod booking;
mod forms;
mod time;

pub use booking::*;
pub use forms::*;
pub use time::*;

use std::fmt;
use thiserror::Error;

use crate::error::{AppError, ErrorCode};

/// Form fields that can be reported as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Guests,
    Date,
    Username,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Guests => "numberOfGuests",
            Field::Date => "date",
            Field::Username => "username",
            Field::Password => "password",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone number",
            Field::Email => "Email",
            Field::Guests => "Number of guests",
            Field::Date => "Date",
            Field::Username => "Username",
            Field::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("Number of guests must be a whole number, got '{0}'")]
    GuestCountNotNumber(String),
    #[error(transparent)]
    GuestCount(#[from] RangeError),
    #[error("Date must be in YYYY-MM-DD format, got '{0}'")]
    InvalidDate(String),
    #[error(transparent)]
    InvalidTime(#[from] TimeError),
    #[error("This table is not available")]
    TableUnavailable,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please fill in all required fields")]
    IncompleteTableForm,
    #[error("Table number must be greater than 0")]
    TableNumberInvalid,
    #[error("Capacity must be greater than 0")]
    CapacityInvalid,
}

impl ValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingField(_) | ValidationError::IncompleteTableForm => {
                ErrorCode::RequiredField
            }
            ValidationError::GuestCountNotNumber(_) => ErrorCode::InvalidFormat,
            ValidationError::GuestCount(_) => ErrorCode::GuestCountOutOfRange,
            ValidationError::InvalidDate(_) => ErrorCode::InvalidBookingDate,
            ValidationError::InvalidTime(_) => ErrorCode::InvalidTimeSlot,
            ValidationError::TableUnavailable => ErrorCode::TableUnavailable,
            ValidationError::PasswordMismatch => ErrorCode::PasswordMismatch,
            ValidationError::TableNumberInvalid => ErrorCode::TableNumberInvalid,
            ValidationError::CapacityInvalid => ErrorCode::TableCapacityInvalid,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            ValidationError::MissingField(field) => app.with_detail("field", field.as_str()),
            _ => app,
        }
    }
}

/// Empty or whitespace-only
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
