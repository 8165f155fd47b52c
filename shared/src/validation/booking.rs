//! Booking form validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::time::{TimeRange, compute_time_range};
use super::{Field, ValidationError, is_blank};
use crate::models::{BookingCreate, Table};

/// Phone input keeps at most this many digits
pub const MAX_PHONE_DIGITS: usize = 13;

/// Smallest party a table can be booked for
pub const MIN_GUESTS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Number of guests must be at least 1")]
    BelowMinimum { count: i32 },
    #[error("Number of guests ({count}) exceeds table capacity ({capacity})")]
    ExceedsCapacity { count: i32, capacity: i32 },
}

/// Guest count must lie in `[1, capacity]`.
pub fn validate_guest_count(count: i32, capacity: i32) -> Result<(), RangeError> {
    if count < MIN_GUESTS {
        return Err(RangeError::BelowMinimum { count });
    }
    if count > capacity {
        return Err(RangeError::ExceedsCapacity { count, capacity });
    }
    Ok(())
}

/// Parse the guest count as typed; blank counts as missing.
pub fn parse_guest_count(input: &str) -> Result<i32, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::MissingField(Field::Guests));
    }
    s.parse()
        .map_err(|_| ValidationError::GuestCountNotNumber(s.to_string()))
}

/// Strip every non-digit and cap the result at [`MAX_PHONE_DIGITS`].
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Booking form input as typed on the detail page
///
/// Every field defaults so that a partially filled form still reaches validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingFormDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Raw text; parsed by [`parse_guest_count`]
    pub number_of_guests: String,
    pub date: String,
    pub time: String,
    pub special_requests: Option<String>,
}

/// A booking form that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidBooking {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub number_of_guests: i32,
    pub date: NaiveDate,
    pub time_range: TimeRange,
    pub special_requests: Option<String>,
}

impl ValidBooking {
    /// Request body for `POST /bookings`
    pub fn to_create(&self, table_id: impl Into<String>) -> BookingCreate {
        BookingCreate {
            table: table_id.into(),
            date: self.date.format("%Y-%m-%d").to_string(),
            time: self.time_range.start_hhmm(),
            number_of_guests: self.number_of_guests,
            special_requests: self.special_requests.clone(),
        }
    }
}

/// Validate a booking form against the table it targets.
///
/// Checks run in order: name, phone, email, guest count, date, time, then
/// table availability. The first failure is returned.
pub fn validate_booking_form(
    draft: &BookingFormDraft,
    table: &Table,
) -> Result<ValidBooking, ValidationError> {
    let valid = check_draft(draft, table.capacity)?;
    if !table.is_available {
        return Err(ValidationError::TableUnavailable);
    }
    Ok(valid)
}

/// Same checks as [`validate_booking_form`] without a table: the guest count
/// is only bounded below.
///
/// Lets a handler reject obviously bad input before loading the table.
pub fn precheck_booking_form(draft: &BookingFormDraft) -> Result<ValidBooking, ValidationError> {
    check_draft(draft, i32::MAX)
}

fn check_draft(draft: &BookingFormDraft, capacity: i32) -> Result<ValidBooking, ValidationError> {
    if is_blank(&draft.name) {
        return Err(ValidationError::MissingField(Field::Name));
    }
    let phone = sanitize_phone(&draft.phone);
    if phone.is_empty() {
        return Err(ValidationError::MissingField(Field::Phone));
    }
    if is_blank(&draft.email) {
        return Err(ValidationError::MissingField(Field::Email));
    }

    let number_of_guests = parse_guest_count(&draft.number_of_guests)?;
    validate_guest_count(number_of_guests, capacity)?;

    let date = parse_date(&draft.date)?;
    let time_range = compute_time_range(&draft.time)?;

    let special_requests = draft
        .special_requests
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(ValidBooking {
        name: draft.name.trim().to_string(),
        phone,
        email: draft.email.trim().to_string(),
        number_of_guests,
        date,
        time_range,
        special_requests,
    })
}

fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::MissingField(Field::Date));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate(s.to_string()))
}

/// Tables that seat at least `guests`; every table when no count is given.
pub fn filter_tables_by_capacity(tables: Vec<Table>, guests: Option<i32>) -> Vec<Table> {
    match guests {
        Some(g) => tables.into_iter().filter(|t| t.fits(g)).collect(),
        None => tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::TimeError;

    fn table(capacity: i32, available: bool) -> Table {
        Table {
            id: "t1".into(),
            table_number: 1,
            name: "Beach View".into(),
            capacity,
            is_available: available,
            description: String::new(),
            image_url: None,
        }
    }

    fn draft() -> BookingFormDraft {
        BookingFormDraft {
            name: "Ana".into(),
            phone: "+62 812-3456".into(),
            email: "ana@cafe.test".into(),
            number_of_guests: "2".into(),
            date: "2026-05-01".into(),
            time: "18:00".into(),
            special_requests: Some("  ".into()),
        }
    }

    #[test]
    fn test_guest_count_bounds() {
        assert_eq!(
            validate_guest_count(0, 4),
            Err(RangeError::BelowMinimum { count: 0 })
        );
        assert_eq!(
            validate_guest_count(5, 4),
            Err(RangeError::ExceedsCapacity { count: 5, capacity: 4 })
        );
        assert!(validate_guest_count(4, 4).is_ok());
        assert!(validate_guest_count(1, 4).is_ok());
        assert!(validate_guest_count(-3, 4).is_err());
    }

    #[test]
    fn test_sanitize_phone() {
        assert_eq!(sanitize_phone("12a3-45"), "12345");
        assert_eq!(sanitize_phone("(021) 555 0199"), "0215550199");
        assert_eq!(sanitize_phone("12345678901234567"), "1234567890123");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_valid_form() {
        let valid = validate_booking_form(&draft(), &table(4, true)).unwrap();
        assert_eq!(valid.phone, "628123456");
        assert_eq!(valid.time_range.to_string(), "18:00 - 19:30");
        assert!(valid.special_requests.is_none());

        let create = valid.to_create("t1");
        assert_eq!(create.date, "2026-05-01");
        assert_eq!(create.time, "18:00");
        assert_eq!(create.number_of_guests, 2);
    }

    #[test]
    fn test_first_missing_field_wins() {
        let empty = BookingFormDraft::default();
        assert_eq!(
            validate_booking_form(&empty, &table(4, true)),
            Err(ValidationError::MissingField(Field::Name))
        );

        let mut d = draft();
        d.phone = "no digits".into();
        d.email = "   ".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::MissingField(Field::Phone))
        );

        d.phone = "0812".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::MissingField(Field::Email))
        );
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut d = draft();
        d.name = " \t".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_guest_count_checked_against_capacity() {
        let mut d = draft();
        d.number_of_guests = "5".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::GuestCount(RangeError::ExceedsCapacity {
                count: 5,
                capacity: 4
            }))
        );
        // capacity unknown: only the lower bound applies
        assert!(precheck_booking_form(&d).is_ok());

        d.number_of_guests = "0".into();
        assert!(matches!(
            precheck_booking_form(&d),
            Err(ValidationError::GuestCount(RangeError::BelowMinimum { .. }))
        ));
    }

    #[test]
    fn test_guest_count_text() {
        assert_eq!(parse_guest_count(" 3 "), Ok(3));
        assert_eq!(
            parse_guest_count(""),
            Err(ValidationError::MissingField(Field::Guests))
        );
        assert_eq!(
            parse_guest_count("two"),
            Err(ValidationError::GuestCountNotNumber("two".into()))
        );

        let mut d = draft();
        d.number_of_guests = "  ".into();
        let err = precheck_booking_form(&d).unwrap_err();
        assert_eq!(err.to_string(), "Number of guests is required");

        d.number_of_guests = "2.5".into();
        assert_eq!(
            precheck_booking_form(&d),
            Err(ValidationError::GuestCountNotNumber("2.5".into()))
        );
    }

    #[test]
    fn test_date_and_time_checked_after_fields() {
        let mut d = draft();
        d.date = "01/05/2026".into();
        d.time = "25:00".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::InvalidDate("01/05/2026".into()))
        );

        d.date = "2026-05-01".into();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::InvalidTime(TimeError::HourOutOfRange(25)))
        );

        d.date = String::new();
        assert_eq!(
            validate_booking_form(&d, &table(4, true)),
            Err(ValidationError::MissingField(Field::Date))
        );
    }

    #[test]
    fn test_unavailable_table() {
        assert_eq!(
            validate_booking_form(&draft(), &table(4, false)),
            Err(ValidationError::TableUnavailable)
        );
    }

    #[test]
    fn test_filter_tables_by_capacity() {
        let tables = vec![table(2, true), table(4, true), table(6, false)];
        assert_eq!(filter_tables_by_capacity(tables.clone(), None).len(), 3);

        let fit = filter_tables_by_capacity(tables, Some(4));
        assert_eq!(fit.len(), 2);
        assert!(fit.iter().all(|t| t.capacity >= 4));
    }
}
