use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Compile-time tag fixing the unit of a period field. Each concrete period
/// type picks exactly one tag, so amounts of different units are different
/// types and can never be mixed by accident.
pub trait PeriodUnit:
    Debug + Clone + Copy + Ord + PartialOrd + Eq + PartialEq + Hash + Sized
{
    const UNIT: TimeUnit;
}

/// The closed set of calendar units a period field can be measured in.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl TimeUnit {
    /// ISO-8601 designator for this unit.
    pub(crate) fn symbol(self) -> char {
        match self {
            TimeUnit::Years => 'Y',
            TimeUnit::Months => 'M',
            TimeUnit::Weeks => 'W',
            TimeUnit::Days => 'D',
            TimeUnit::Hours => 'H',
            TimeUnit::Minutes => 'M',
            TimeUnit::Seconds => 'S',
        }
    }

    /// Time-based units are written after the ISO-8601 'T' separator
    /// (PT5H), date-based units directly after 'P' (P5D).
    pub(crate) fn is_time_based(self) -> bool {
        matches!(self, TimeUnit::Hours | TimeUnit::Minutes | TimeUnit::Seconds)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Years => "years",
            TimeUnit::Months => "months",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct YearUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct MonthUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct WeekUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct DayUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct HourUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct MinuteUnit;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct SecondUnit;

impl PeriodUnit for YearUnit {
    const UNIT: TimeUnit = TimeUnit::Years;
}

impl PeriodUnit for MonthUnit {
    const UNIT: TimeUnit = TimeUnit::Months;
}

impl PeriodUnit for WeekUnit {
    const UNIT: TimeUnit = TimeUnit::Weeks;
}

impl PeriodUnit for DayUnit {
    const UNIT: TimeUnit = TimeUnit::Days;
}

impl PeriodUnit for HourUnit {
    const UNIT: TimeUnit = TimeUnit::Hours;
}

impl PeriodUnit for MinuteUnit {
    const UNIT: TimeUnit = TimeUnit::Minutes;
}

impl PeriodUnit for SecondUnit {
    const UNIT: TimeUnit = TimeUnit::Seconds;
}
