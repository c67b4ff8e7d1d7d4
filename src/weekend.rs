use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date::Date;
use crate::temporal::DateAdjuster;
use crate::weekday::Weekday;

/// Adjuster returning the next day that is neither Saturday nor Sunday.
///
/// From a Friday or Saturday this jumps to the following Monday; from any
/// other day it moves one day forward. A single day-arithmetic step is
/// always enough because the rule table covers all seven weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NextNonWeekendDay;

/// Adjuster returning the previous day that is neither Saturday nor Sunday.
///
/// From a Monday or Sunday this jumps back to the preceding Friday; from any
/// other day it moves one day backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviousNonWeekendDay;

impl DateAdjuster for NextNonWeekendDay {
    fn adjust(&self, date: Date) -> Date {
        let days = match date.weekday() {
            Weekday::Friday => 3,
            Weekday::Saturday => 2,
            Weekday::Sunday
            | Weekday::Monday
            | Weekday::Tuesday
            | Weekday::Wednesday
            | Weekday::Thursday => 1,
        };
        date.plus_days(days)
    }
}

impl DateAdjuster for PreviousNonWeekendDay {
    fn adjust(&self, date: Date) -> Date {
        let days = match date.weekday() {
            Weekday::Monday => -3,
            Weekday::Sunday => -2,
            Weekday::Tuesday
            | Weekday::Wednesday
            | Weekday::Thursday
            | Weekday::Friday
            | Weekday::Saturday => -1,
        };
        date.plus_days(days)
    }
}

lazy_static! {
    static ref NEXT_NON_WEEKEND_DAY: NextNonWeekendDay = NextNonWeekendDay;
    static ref PREVIOUS_NON_WEEKEND_DAY: PreviousNonWeekendDay = PreviousNonWeekendDay;
}

/// The process-wide "next non-weekend day" adjuster. Every call returns the
/// same instance.
pub fn next_non_weekend_day() -> &'static NextNonWeekendDay {
    &NEXT_NON_WEEKEND_DAY
}

/// The process-wide "previous non-weekend day" adjuster. Every call returns
/// the same instance.
pub fn previous_non_weekend_day() -> &'static PreviousNonWeekendDay {
    &PREVIOUS_NON_WEEKEND_DAY
}

// Restoring a persisted adjuster resolves to the canonical singleton instead
// of building a fresh value, so identity survives a round-trip.

impl<'de> Deserialize<'de> for &'static NextNonWeekendDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NextNonWeekendDay::deserialize(deserializer)?;
        Ok(next_non_weekend_day())
    }
}

impl<'de> Deserialize<'de> for &'static PreviousNonWeekendDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        PreviousNonWeekendDay::deserialize(deserializer)?;
        Ok(previous_non_weekend_day())
    }
}
