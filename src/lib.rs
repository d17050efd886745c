//! Client-side logic of a signup form: populating the date-of-birth
//! selectors and validating a submitted form.
//!
//! Rendering is left to the caller. The crate hands back plain option lists
//! and typed results, and the caller decides how to display them.

mod consts;
mod form;
mod picker;
mod policy;
mod prelude;
mod types;
mod validator;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use form::{SignupForm, Submission};
pub use picker::{DateOfBirthPicker, day_options, days_in_month, is_leap_year, year_options};
pub use policy::SignupPolicy;
pub use types::{DateSelection, Gender, Month};
pub use validator::{
    Contact, RawSignupForm, SignupFormInput, SignupValidator, ValidationError, ValidationResult,
    validate,
};

use crate::prelude::*;
use std::num::ParseIntError;

/// Error for selector values that cannot be turned into typed input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid value: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {} or later)", "_0", MIN_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: i32 },
    #[display(fmt = "Invalid gender: {_0} (must be female, male or custom)")]
    InvalidGender(String),
}

impl std::error::Error for ParseError {}

impl From<ParseIntError> for ParseError {
    fn from(error: ParseIntError) -> Self {
        Self::InvalidFormat(error.to_string())
    }
}
