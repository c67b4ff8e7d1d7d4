use std::fmt;

use serde::{Deserialize, Serialize};

use crate::am_pm::AmPm;
use crate::temporal::{
    DeriveError, OutOfRange, TemporalAccessor, TemporalField, TimeAdjuster,
};
use crate::time_of_day::TimeOfDay;

/// The hour-of-day field, 0 to 23. A validated wrapper around the bare
/// number, with views onto the 12-hour clock and the AM/PM half.
///
/// Ordering, equality and hashing follow the underlying value, so 23
/// compares greater than 0 even though the field is cyclic.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourOfDay {
    value: u8,
}

impl HourOfDay {
    /// An hour-of-day in 0..=23.
    pub fn of(hour: u8) -> Result<Self, OutOfRange> {
        if hour > 23 {
            return Err(OutOfRange {
                field: TemporalField::HourOfDay,
                value: hour as i64,
                max: 23,
            });
        }
        Ok(HourOfDay { value: hour })
    }

    /// An hour-of-day from a half-of-day and an hour within that half in
    /// 0..=11.
    pub fn of_am_pm(half: AmPm, hour_of_am_pm: u8) -> Result<Self, OutOfRange> {
        if hour_of_am_pm > 11 {
            return Err(OutOfRange {
                field: TemporalField::HourOfAmPm,
                value: hour_of_am_pm as i64,
                max: 11,
            });
        }
        let value = match half {
            AmPm::Am => hour_of_am_pm,
            AmPm::Pm => hour_of_am_pm + 12,
        };
        Ok(HourOfDay { value })
    }

    /// Derives the hour-of-day from any temporal source that carries one.
    pub fn from_temporal(source: &dyn TemporalAccessor) -> Result<Self, DeriveError> {
        let value = source
            .get(TemporalField::HourOfDay)
            .ok_or(DeriveError::Unsupported(TemporalField::HourOfDay))?;
        let value = u8::try_from(value).map_err(|_| OutOfRange {
            field: TemporalField::HourOfDay,
            value,
            max: 23,
        })?;
        Ok(Self::of(value)?)
    }

    pub fn value(self) -> u8 {
        self.value
    }

    /// AM for hours 0-11, PM for 12-23.
    pub fn am_pm(self) -> AmPm {
        AmPm::of_hour(self.value)
    }

    /// Hour within the AM/PM half, 0-11.
    pub fn hour_of_am_pm(self) -> u8 {
        self.value % 12
    }

    /// Hour within the half as shown on a 12-hour clock face, 1-12.
    pub fn clock_hour_of_am_pm(self) -> u8 {
        match self.value % 12 {
            0 => 12,
            hour => hour,
        }
    }

    /// Hour as counted on a 1-24 clock, where midnight is 24.
    pub fn clock_hour_of_day(self) -> u8 {
        match self.value {
            0 => 24,
            hour => hour,
        }
    }
}

impl TimeAdjuster for HourOfDay {
    /// Replaces the hour-of-day of the given time, keeping the sub-hour
    /// components.
    fn adjust_time(&self, time: TimeOfDay) -> TimeOfDay {
        time.with_hour(self.value)
            .expect("hour of day is validated at construction")
    }
}

impl TemporalAccessor for HourOfDay {
    fn get(&self, field: TemporalField) -> Option<i64> {
        match field {
            TemporalField::HourOfDay => Some(self.value as i64),
            TemporalField::HourOfAmPm => Some(self.hour_of_am_pm() as i64),
            TemporalField::MinuteOfHour
            | TemporalField::SecondOfMinute
            | TemporalField::NanoOfSecond
            | TemporalField::DayOfWeek
            | TemporalField::DayOfMonth
            | TemporalField::MonthOfYear
            | TemporalField::Year => None,
        }
    }
}

impl TryFrom<u8> for HourOfDay {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, OutOfRange> {
        Self::of(value)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> u8 {
        hour.value
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HourOfDay={}", self.value)
    }
}
