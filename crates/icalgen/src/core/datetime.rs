//! DATE and DATE-TIME value types (RFC 5545 §3.3.4, §3.3.5).

use std::fmt;

use chrono::{Datelike, Timelike};

/// DATE value (RFC 5545 §3.3.4).
///
/// A calendar date without time component. Rendered as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl From<chrono::NaiveDate> for Date {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "calendar dates emitted on the wire fit u16/u8 components"
    )]
    fn from(d: chrono::NaiveDate) -> Self {
        Self {
            year: d.year() as u16,
            month: d.month() as u8,
            day: d.day() as u8,
        }
    }
}

/// DATE-TIME value (RFC 5545 §3.3.5).
///
/// Wall-clock components plus a UTC indicator. Rendered as
/// `YYYYMMDDTHHMMSS`, suffixed with `Z` when the UTC flag is set.
///
/// The components are taken exactly as supplied; no timezone conversion
/// is ever performed. The caller pairs the correct wall-clock reading
/// with the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// Whether this time is in UTC (indicated by the `Z` suffix).
    pub is_utc: bool,
}

impl DateTime {
    /// Creates a UTC date-time.
    #[must_use]
    pub const fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            is_utc: true,
        }
    }

    /// Creates a local (floating) date-time.
    #[must_use]
    pub const fn local(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            is_utc: false,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "calendar dates emitted on the wire fit u16/u8 components"
)]
fn from_chrono_parts(dt: &impl Datelike, tm: &impl Timelike, is_utc: bool) -> DateTime {
    DateTime {
        year: dt.year() as u16,
        month: dt.month() as u8,
        day: dt.day() as u8,
        hour: tm.hour() as u8,
        minute: tm.minute() as u8,
        second: tm.second() as u8,
        is_utc,
    }
}

impl From<chrono::NaiveDateTime> for DateTime {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        from_chrono_parts(&dt, &dt, false)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        from_chrono_parts(&dt, &dt, true)
    }
}
