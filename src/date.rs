// Calendar arithmetic is aligned to the 400-year Gregorian cycle, using
// 2000-03-01 as the zero point so that every leap day falls at the end of its
// year, quadrennium, century and cycle. Day counts then decompose with plain
// floored division and the leap days come out as a natural "overflow" of the
// final period instead of needing per-period special cases.

use std::cmp::min;
use std::fmt;
use std::ops::{Add, Sub};

use num_integer::Integer;
use thiserror::Error;

use crate::period::{Days, Weeks};
use crate::temporal::{DateAdjuster, TemporalAccessor, TemporalField};
use crate::weekday::Weekday;

const DAYS_PER_CYCLE: i64 = 97 * 366 + 303 * 365;
const DAYS_PER_CENTURY: i64 = 24 * 366 + 76 * 365;
const DAYS_PER_QUADRENNIUM: i64 = 3 * 365 + 366;
const DAYS_PER_YEAR: i64 = 365;

// 11017 days from 1970-01-01 to 2000-03-01.
const EPOCH_OFFSET_DAYS: i64 = 11_017;

// Day-of-year offsets of the month starts, index 0 = March.
const MONTH_STARTS: [u16; 12] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

const MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// Epoch days of 0000-01-01 and 9999-12-31, the supported range.
const MIN_EPOCH_DAY: i64 = -719_528;
const MAX_EPOCH_DAY: i64 = 2_932_896;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The year/month/day combination does not name a calendar day.
    #[error("no such date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },
    /// The date falls outside the supported range.
    #[error("date is outside the supported range 0000-01-01..=9999-12-31")]
    OutOfBounds,
}

/// A proleptic-Gregorian calendar date. The range is from 0000-01-01 to
/// 9999-12-31; every value is validated at construction and immutable after.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Date {
    year: i16,
    month: u8,
    day: u8,
}

pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS_NON_LEAP_YEAR[(month - 1) as usize]
    }
}

fn month0_from_day_of_year(day_of_year: u16) -> usize {
    // Initial guess can undershoot by at most one month, so a single
    // correction suffices.
    let mut month0 = (day_of_year / 31) as usize;
    if month0 < 11 && day_of_year >= MONTH_STARTS[month0 + 1] {
        month0 += 1;
    }
    month0
}

impl Date {
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(0..=9999).contains(&year) {
            return Err(DateError::OutOfBounds);
        }
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(Date {
            year: year as i16,
            month,
            day,
        })
    }

    pub fn year(self) -> i32 {
        self.year as i32
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_epoch_day(self.to_epoch_day())
    }

    /// Days since 1970-01-01, negative for earlier dates.
    pub(crate) fn to_epoch_day(self) -> i64 {
        // Shift so the year starts in March: January and February count as
        // months 10 and 11 of the preceding year.
        let (year, month0) = if self.month <= 2 {
            (self.year as i64 - 1, self.month + 9)
        } else {
            (self.year as i64, self.month - 3)
        };
        let (cycle, year_of_cycle) = (year - 2000).div_mod_floor(&400);
        let century = year_of_cycle / 100;
        let year_of_century = year_of_cycle - century * 100;
        cycle * DAYS_PER_CYCLE
            + century * DAYS_PER_CENTURY
            + (year_of_century / 4) * DAYS_PER_QUADRENNIUM
            + (year_of_century % 4) * DAYS_PER_YEAR
            + MONTH_STARTS[month0 as usize] as i64
            + (self.day - 1) as i64
            + EPOCH_OFFSET_DAYS
    }

    /// Inverse of [`to_epoch_day`]; the day must be within the supported
    /// range.
    pub(crate) fn from_epoch_day(epoch_day: i64) -> Self {
        debug_assert!((MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&epoch_day));
        let day = epoch_day - EPOCH_OFFSET_DAYS;
        let (cycle, day_of_cycle) = day.div_mod_floor(&DAYS_PER_CYCLE);

        // The first three centuries have 36,524 days; the fourth also keeps
        // the cycle's closing leap day, hence the clamp.
        let century = min(day_of_cycle / DAYS_PER_CENTURY, 3);
        let day_of_century = day_of_cycle - century * DAYS_PER_CENTURY;

        // The final quadrennium of the first three centuries is one day
        // short, so its quotient never overshoots and no clamp is needed.
        let quadrennium = day_of_century / DAYS_PER_QUADRENNIUM;
        let day_of_quadrennium = day_of_century - quadrennium * DAYS_PER_QUADRENNIUM;

        // Leap years sit at the end of each quadrennium, again clamped.
        let year_of_quadrennium = min(day_of_quadrennium / DAYS_PER_YEAR, 3);
        let day_of_year = (day_of_quadrennium - year_of_quadrennium * DAYS_PER_YEAR) as u16;

        let year = 2000 + 400 * cycle + 100 * century + 4 * quadrennium + year_of_quadrennium;
        let month0 = month0_from_day_of_year(day_of_year);
        let day_of_month = (day_of_year - MONTH_STARTS[month0] + 1) as u8;
        let (year, month) = if month0 >= 10 {
            (year + 1, month0 as u8 - 9)
        } else {
            (year, month0 as u8 + 3)
        };
        Date {
            year: year as i16,
            month,
            day: day_of_month,
        }
    }

    /// Adds a number of days, which may be negative. Panics if the result
    /// leaves the supported range; use [`Date::checked_plus_days`] to handle
    /// that case.
    pub fn plus_days(self, days: i64) -> Self {
        self.checked_plus_days(days)
            .expect("resulting date is out of bounds")
    }

    pub fn checked_plus_days(self, days: i64) -> Result<Self, DateError> {
        let day = self
            .to_epoch_day()
            .checked_add(days)
            .ok_or(DateError::OutOfBounds)?;
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&day) {
            return Err(DateError::OutOfBounds);
        }
        Ok(Self::from_epoch_day(day))
    }

    /// Applies a calendar rule to this date.
    pub fn with<A: DateAdjuster + ?Sized>(self, adjuster: &A) -> Self {
        adjuster.adjust(self)
    }
}

impl Add<Days> for Date {
    type Output = Date;

    fn add(self, rhs: Days) -> Date {
        self.plus_days(rhs.amount() as i64)
    }
}

impl Sub<Days> for Date {
    type Output = Date;

    fn sub(self, rhs: Days) -> Date {
        self.plus_days(-(rhs.amount() as i64))
    }
}

impl Add<Weeks> for Date {
    type Output = Date;

    fn add(self, rhs: Weeks) -> Date {
        self.plus_days(rhs.amount() as i64 * 7)
    }
}

impl Sub<Weeks> for Date {
    type Output = Date;

    fn sub(self, rhs: Weeks) -> Date {
        self.plus_days(rhs.amount() as i64 * -7)
    }
}

impl TemporalAccessor for Date {
    fn get(&self, field: TemporalField) -> Option<i64> {
        match field {
            TemporalField::Year => Some(self.year as i64),
            TemporalField::MonthOfYear => Some(self.month as i64),
            TemporalField::DayOfMonth => Some(self.day as i64),
            TemporalField::DayOfWeek => Some(self.weekday().number() as i64),
            TemporalField::HourOfDay
            | TemporalField::HourOfAmPm
            | TemporalField::MinuteOfHour
            | TemporalField::SecondOfMinute
            | TemporalField::NanoOfSecond => None,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_day_probe_points() {
        // The zero point of unix time.
        let date = Date::of(1970, 1, 1).unwrap();
        assert_eq!(date.to_epoch_day(), 0);
        assert_eq!(Date::from_epoch_day(0), date);

        // The zero point of the cycle-aligned representation.
        let date = Date::of(2000, 3, 1).unwrap();
        assert_eq!(date.to_epoch_day(), 11017);
        assert_eq!(Date::from_epoch_day(11017), date);

        // Probe around the leap day ending a cycle.
        let date = Date::of(2000, 2, 29).unwrap();
        assert_eq!(Date::from_epoch_day(date.to_epoch_day()), date);
        let date = Date::of(1999, 2, 28).unwrap();
        assert_eq!(Date::from_epoch_day(date.to_epoch_day()), date);

        // The supported range boundaries.
        assert_eq!(Date::of(0, 1, 1).unwrap().to_epoch_day(), MIN_EPOCH_DAY);
        assert_eq!(Date::of(9999, 12, 31).unwrap().to_epoch_day(), MAX_EPOCH_DAY);
    }

    #[test]
    fn epoch_day_round_trip_sweep() {
        let mut day = MIN_EPOCH_DAY;
        while day <= MAX_EPOCH_DAY {
            let date = Date::from_epoch_day(day);
            assert_eq!(date.to_epoch_day(), day, "at {}", date);
            day += 9973;
        }
    }

    #[test]
    fn consecutive_days_are_consecutive() {
        // A non-leap and a leap February, plus a year boundary.
        let mut date = Date::of(2001, 2, 27).unwrap();
        for expected in [(2001, 2, 28), (2001, 3, 1), (2001, 3, 2)] {
            date = date.plus_days(1);
            assert_eq!((date.year(), date.month(), date.day()), expected);
        }
        let mut date = Date::of(2004, 2, 28).unwrap();
        for expected in [(2004, 2, 29), (2004, 3, 1)] {
            date = date.plus_days(1);
            assert_eq!((date.year(), date.month(), date.day()), expected);
        }
        let date = Date::of(2010, 12, 31).unwrap().plus_days(1);
        assert_eq!((date.year(), date.month(), date.day()), (2011, 1, 1));
    }

    #[test]
    fn validation() {
        assert!(Date::of(2012, 3, 2).is_ok());
        assert_eq!(
            Date::of(2012, 13, 1),
            Err(DateError::InvalidDate {
                year: 2012,
                month: 13,
                day: 1
            })
        );
        assert_eq!(
            Date::of(2012, 4, 31),
            Err(DateError::InvalidDate {
                year: 2012,
                month: 4,
                day: 31
            })
        );
        assert!(Date::of(2012, 2, 29).is_ok());
        assert_eq!(
            Date::of(2011, 2, 29),
            Err(DateError::InvalidDate {
                year: 2011,
                month: 2,
                day: 29
            })
        );
        assert!(Date::of(1900, 2, 29).is_err());
        assert!(Date::of(2000, 2, 29).is_ok());
        assert_eq!(Date::of(10000, 1, 1), Err(DateError::OutOfBounds));
        assert_eq!(Date::of(-1, 1, 1), Err(DateError::OutOfBounds));
        assert_eq!(
            Date::of(2012, 1, 0),
            Err(DateError::InvalidDate {
                year: 2012,
                month: 1,
                day: 0
            })
        );
    }

    #[test]
    fn weekdays() {
        assert_eq!(Date::of(1970, 1, 1).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(Date::of(2007, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::of(2010, 12, 31).unwrap().weekday(), Weekday::Friday);
        assert_eq!(Date::of(2011, 1, 2).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(Date::of(2011, 1, 3).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::of(2000, 1, 1).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn checked_plus_days_at_bounds() {
        let max = Date::of(9999, 12, 31).unwrap();
        assert_eq!(max.checked_plus_days(1), Err(DateError::OutOfBounds));
        assert_eq!(max.checked_plus_days(0), Ok(max));
        let min = Date::of(0, 1, 1).unwrap();
        assert_eq!(min.checked_plus_days(-1), Err(DateError::OutOfBounds));
        assert_eq!(min.checked_plus_days(i64::MIN), Err(DateError::OutOfBounds));
    }

    #[test]
    fn period_operators() {
        let date = Date::of(2010, 12, 30).unwrap();
        assert_eq!(date + Days::of(2), Date::of(2011, 1, 1).unwrap());
        assert_eq!(date - Days::of(30), Date::of(2010, 11, 30).unwrap());
        assert_eq!(date + Weeks::of(1), Date::of(2011, 1, 6).unwrap());
        assert_eq!(date - Weeks::of(52), Date::of(2009, 12, 31).unwrap());
    }

    #[test]
    fn temporal_accessor() {
        let date = Date::of(2012, 3, 2).unwrap();
        assert_eq!(date.get(TemporalField::Year), Some(2012));
        assert_eq!(date.get(TemporalField::MonthOfYear), Some(3));
        assert_eq!(date.get(TemporalField::DayOfMonth), Some(2));
        assert_eq!(date.get(TemporalField::DayOfWeek), Some(5));
        assert_eq!(date.get(TemporalField::HourOfDay), None);
    }

    #[test]
    fn display() {
        assert_eq!(Date::of(2010, 12, 31).unwrap().to_string(), "2010-12-31");
        assert_eq!(Date::of(33, 4, 5).unwrap().to_string(), "0033-04-05");
    }
}
