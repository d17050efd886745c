use crate::consts::{MAX_MONTH, MIN_DAY, MIN_YEAR, MONTH_ABBREVIATIONS};
use crate::picker::days_in_month;
use crate::prelude::*;
use crate::{DATE_SEPARATOR, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Label shown for this month in the selector ("Jan".."Dec")
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.0.get() as usize]
    }

    /// The twelve selector entries, January first
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(NonZeroU8::new).map(Self)
    }
}

impl Default for Month {
    fn default() -> Self {
        Self(NonZeroU8::MIN)
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender radio choice. The lowercase form values are used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[display(fmt = "female")]
    Female,
    #[display(fmt = "male")]
    Male,
    #[display(fmt = "custom")]
    Custom,
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            "custom" => Ok(Self::Custom),
            other => Err(ParseError::InvalidGender(other.to_owned())),
        }
    }
}

/// A day/month/year picked in the date-of-birth selectors.
/// The year is never before `MIN_YEAR` and the day is always within the
/// month's length for that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateParts")]
pub struct DateSelection {
    day:   u8,
    month: Month,
    year:  i32,
}

#[derive(Deserialize)]
struct DateParts {
    day:   u8,
    month: Month,
    year:  i32,
}

impl TryFrom<DateParts> for DateSelection {
    type Error = ParseError;

    fn try_from(parts: DateParts) -> Result<Self, Self::Error> {
        Self::new(parts.day, parts.month, parts.year)
    }
}

impl DateSelection {
    /// Creates a selection, checking the year against `MIN_YEAR` and the day
    /// against the month length
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is before `MIN_YEAR`, or
    /// `ParseError::InvalidDay` if the day is 0 or past the end of the month.
    pub fn new(day: u8, month: Month, year: i32) -> Result<Self, ParseError> {
        if year < MIN_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if day < MIN_DAY || day > days_in_month(month, year) {
            return Err(ParseError::InvalidDay {
                day,
                month: month.get(),
                year,
            });
        }
        Ok(Self { day, month, year })
    }

    pub(crate) const fn new_unchecked(day: u8, month: Month, year: i32) -> Self {
        Self { day, month, year }
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{}",
            self.day, self.month, self.year
        )
    }
}
