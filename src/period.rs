// A period counts calendar slots ("5 days", "3 months") rather than elapsed
// time; the same slot count can cover different real durations. Each period
// type here is locked to one unit.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::unit::{
    DayUnit, HourUnit, MinuteUnit, MonthUnit, PeriodUnit, SecondUnit, TimeUnit, WeekUnit, YearUnit,
};

/// Period arithmetic could not represent its result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The result of an add, subtract, multiply, divide or negate fell
    /// outside the i32 amount range.
    #[error("{op} on period amount {amount} overflows an i32")]
    Overflow { op: &'static str, amount: i32 },
    /// A period amount was divided by zero.
    #[error("period amount {amount} divided by zero")]
    DivisionByZero { amount: i32 },
}

/// An immutable amount of time measured in a single fixed unit, such as
/// "5 days". The unit lives in the type parameter, so `Days` and `Hours` are
/// unrelated types; equality, ordering and hashing act on the amount alone.
///
/// Arithmetic never wraps: any result outside the i32 range is reported as an
/// [`ArithmeticError`] at the point of violation.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodField<U: PeriodUnit> {
    amount: i32,
    #[serde(skip)]
    phantom: PhantomData<U>,
}

pub type Years = PeriodField<YearUnit>;
pub type Months = PeriodField<MonthUnit>;
pub type Weeks = PeriodField<WeekUnit>;
pub type Days = PeriodField<DayUnit>;
pub type Hours = PeriodField<HourUnit>;
pub type Minutes = PeriodField<MinuteUnit>;
pub type Seconds = PeriodField<SecondUnit>;

impl<U: PeriodUnit> PeriodField<U> {
    /// A period of the given amount, which may be negative.
    pub fn of(amount: i32) -> Self {
        PeriodField {
            amount,
            phantom: PhantomData,
        }
    }

    pub fn amount(self) -> i32 {
        self.amount
    }

    pub fn unit(self) -> TimeUnit {
        U::UNIT
    }

    /// Same unit, different amount.
    pub fn with_amount(self, amount: i32) -> Self {
        Self::of(amount)
    }

    pub fn plus(self, amount: i32) -> Result<Self, ArithmeticError> {
        self.amount
            .checked_add(amount)
            .map(Self::of)
            .ok_or(ArithmeticError::Overflow {
                op: "add",
                amount: self.amount,
            })
    }

    pub fn minus(self, amount: i32) -> Result<Self, ArithmeticError> {
        self.amount
            .checked_sub(amount)
            .map(Self::of)
            .ok_or(ArithmeticError::Overflow {
                op: "subtract",
                amount: self.amount,
            })
    }

    pub fn multiplied_by(self, scalar: i32) -> Result<Self, ArithmeticError> {
        self.amount
            .checked_mul(scalar)
            .map(Self::of)
            .ok_or(ArithmeticError::Overflow {
                op: "multiply",
                amount: self.amount,
            })
    }

    /// Integer division truncating toward zero, so 3 / 2 is 1 and -3 / 2
    /// is -1.
    pub fn divided_by(self, divisor: i32) -> Result<Self, ArithmeticError> {
        if divisor == 0 {
            return Err(ArithmeticError::DivisionByZero {
                amount: self.amount,
            });
        }
        // checked_div also rejects i32::MIN / -1, whose quotient is not
        // representable.
        self.amount
            .checked_div(divisor)
            .map(Self::of)
            .ok_or(ArithmeticError::Overflow {
                op: "divide",
                amount: self.amount,
            })
    }

    pub fn negated(self) -> Result<Self, ArithmeticError> {
        self.amount
            .checked_neg()
            .map(Self::of)
            .ok_or(ArithmeticError::Overflow {
                op: "negate",
                amount: self.amount,
            })
    }
}

impl<U: PeriodUnit> fmt::Display for PeriodField<U> {
    /// ISO-8601 period form: "P5D" for date-based units, "PT5H" for
    /// time-based ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = U::UNIT;
        if unit.is_time_based() {
            write!(f, "PT{}{}", self.amount, unit.symbol())
        } else {
            write!(f, "P{}{}", self.amount, unit.symbol())
        }
    }
}
