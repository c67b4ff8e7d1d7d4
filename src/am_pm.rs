use std::fmt;

use serde::{Deserialize, Serialize};

/// Half of the day: AM runs from midnight up to noon, PM from noon up to
/// midnight.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AmPm {
    Am,
    Pm,
}

impl AmPm {
    /// The half of day containing an hour in 0..=23. Out-of-range hours are
    /// the caller's problem; this is a lookup, not a validation point.
    pub(crate) fn of_hour(hour: u8) -> Self {
        if hour < 12 {
            AmPm::Am
        } else {
            AmPm::Pm
        }
    }
}

impl fmt::Display for AmPm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmPm::Am => f.write_str("AM"),
            AmPm::Pm => f.write_str("PM"),
        }
    }
}
