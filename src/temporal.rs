use std::fmt;

use thiserror::Error;

use crate::date::Date;
use crate::time_of_day::TimeOfDay;

/// Fields that can be read from a temporal value through [`TemporalAccessor`].
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum TemporalField {
    HourOfDay,
    HourOfAmPm,
    MinuteOfHour,
    SecondOfMinute,
    NanoOfSecond,
    DayOfWeek,
    DayOfMonth,
    MonthOfYear,
    Year,
}

impl fmt::Display for TemporalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TemporalField::HourOfDay => "hour of day",
            TemporalField::HourOfAmPm => "hour of AM/PM",
            TemporalField::MinuteOfHour => "minute of hour",
            TemporalField::SecondOfMinute => "second of minute",
            TemporalField::NanoOfSecond => "nano of second",
            TemporalField::DayOfWeek => "day of week",
            TemporalField::DayOfMonth => "day of month",
            TemporalField::MonthOfYear => "month of year",
            TemporalField::Year => "year",
        };
        f.write_str(name)
    }
}

/// Read access to the individual fields of a temporal value. Sources return
/// `None` for fields they do not carry; values returned for a field must lie
/// in that field's valid range.
pub trait TemporalAccessor {
    fn get(&self, field: TemporalField) -> Option<i64>;
}

/// A calendar rule mapping one date to another, such as "skip to the next
/// working day".
pub trait DateAdjuster {
    fn adjust(&self, date: Date) -> Date;
}

/// A rule replacing components of a time-of-day value.
pub trait TimeAdjuster {
    fn adjust_time(&self, time: TimeOfDay) -> TimeOfDay;
}

/// A numeric input fell outside the valid range of its field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field} {value} is out of range 0..={max}")]
pub struct OutOfRange {
    pub(crate) field: TemporalField,
    pub(crate) value: i64,
    pub(crate) max: u32,
}

impl OutOfRange {
    /// The field whose range was violated.
    pub fn field(&self) -> TemporalField {
        self.field
    }

    /// The offending value.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Deriving a field value from a temporal source failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriveError {
    /// The source carries no such field.
    #[error("no {0} field available from this source")]
    Unsupported(TemporalField),
    /// The source returned a value outside the field's range.
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
}
