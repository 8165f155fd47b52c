//! Booking time slot computation

use chrono::{Duration, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Length of one booking slot
pub const BOOKING_SLOT_MINUTES: i64 = 90;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("Time is required")]
    Empty,
    #[error("Time must be in HH:MM format, got '{0}'")]
    Malformed(String),
    #[error("Hour must be between 00 and 23, got {0}")]
    HourOutOfRange(u32),
    #[error("Minute must be between 00 and 59, got {0}")]
    MinuteOutOfRange(u32),
}

/// Start and end of a booking slot, rendered as `"HH:MM - HH:MM"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// True when the slot ends on the following day
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    pub fn start_hhmm(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_hhmm(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a 24-hour `HH:MM` start time.
///
/// The hour may be one or two digits, the minute is always two.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime, TimeError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(TimeError::Empty);
    }

    let malformed = || TimeError::Malformed(s.to_string());
    let (h, m) = s.split_once(':').ok_or_else(malformed)?;
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
        return Err(malformed());
    }

    let hour: u32 = h.parse().map_err(|_| malformed())?;
    let minute: u32 = m.parse().map_err(|_| malformed())?;
    if hour > 23 {
        return Err(TimeError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeError::MinuteOutOfRange(minute));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// `start + 1h30m`, minutes carried into the hour, hours wrapped modulo 24.
pub fn compute_time_range(start: &str) -> Result<TimeRange, TimeError> {
    let start = parse_hhmm(start)?;
    let (end, _days) = start.overflowing_add_signed(Duration::minutes(BOOKING_SLOT_MINUTES));
    Ok(TimeRange { start, end })
}
