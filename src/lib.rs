pub use am_pm::AmPm;
pub use date::{Date, DateError};
pub use hour_of_day::HourOfDay;
pub use period::{ArithmeticError, PeriodField};
pub use period::{Days, Hours, Minutes, Months, Seconds, Weeks, Years};
pub use temporal::{
    DateAdjuster, DeriveError, OutOfRange, TemporalAccessor, TemporalField, TimeAdjuster,
};
pub use time_of_day::TimeOfDay;
pub use unit::{
    DayUnit, HourUnit, MinuteUnit, MonthUnit, PeriodUnit, SecondUnit, TimeUnit, WeekUnit, YearUnit,
};
pub use weekday::Weekday;
pub use weekend::{
    next_non_weekend_day, previous_non_weekend_day, NextNonWeekendDay, PreviousNonWeekendDay,
};

mod am_pm;
mod date;
mod hour_of_day;
mod period;
mod temporal;
mod time_of_day;
mod unit;
mod weekday;
mod weekend;
