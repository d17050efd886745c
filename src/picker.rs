//! Date-of-birth selector population.
//!
//! The picker only computes option lists. Materialising them as `<option>`
//! elements (or anything else) is up to the rendering layer.

use chrono::Datelike;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MIN_DAY, MIN_YEAR,
};
use crate::{DateSelection, Month, ParseError};

/// Gregorian leap year: divisible by 4, except centuries not divisible by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of calendar days in `month` of `year`, i.e. the last valid day of
/// the month. Any year is accepted.
pub const fn days_in_month(month: Month, year: i32) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Years offered by the year selector: `current_year` down to `MIN_YEAR`
/// inclusive. Empty when `current_year` is older than `MIN_YEAR`.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (MIN_YEAR..=current_year).rev().collect()
}

/// Days offered by the day selector for the given month and year.
pub fn day_options(month: Month, year: i32) -> Vec<u8> {
    (MIN_DAY..=days_in_month(month, year)).collect()
}

/// Selector state for the three date-of-birth dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOfBirthPicker {
    day:          u8,
    month:        Month,
    year:         i32,
    day_options:  Vec<u8>,
    year_options: Vec<i32>,
}

impl DateOfBirthPicker {
    /// Populates the year options from `current_year` and refreshes the day
    /// options for the default selection (January of `current_year`).
    ///
    /// A `current_year` before `MIN_YEAR` offers no years at all; the
    /// selection then holds `MIN_YEAR`.
    pub fn new(current_year: i32) -> Self {
        let mut picker = Self {
            day:          MIN_DAY,
            month:        Month::default(),
            year:         current_year.max(MIN_YEAR),
            day_options:  Vec::new(),
            year_options: year_options(current_year),
        };
        picker.refresh_day_options();
        picker
    }

    /// Same as [`DateOfBirthPicker::new`] using the local clock's year.
    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn day_options(&self) -> &[u8] {
        &self.day_options
    }

    pub fn year_options(&self) -> &[i32] {
        &self.year_options
    }

    /// The current selection. The day always lies within `day_options`.
    pub const fn selection(&self) -> DateSelection {
        // day is re-clamped on every refresh
        DateSelection::new_unchecked(self.day, self.month, self.year)
    }

    pub fn select_month(&mut self, month: Month) {
        self.month = month;
        self.refresh_day_options();
    }

    /// # Errors
    /// Returns `ParseError::InvalidFormat` if `year` is not one of the year options.
    pub fn select_year(&mut self, year: i32) -> Result<(), ParseError> {
        if !self.year_options.contains(&year) {
            return Err(ParseError::InvalidFormat(format!(
                "Year {year} is not offered (must be {MIN_YEAR}-{})",
                self.year_options.first().copied().unwrap_or(MIN_YEAR)
            )));
        }
        self.year = year;
        self.refresh_day_options();
        Ok(())
    }

    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` is not one of the current day options.
    pub fn select_day(&mut self, day: u8) -> Result<(), ParseError> {
        if !self.day_options.contains(&day) {
            return Err(ParseError::InvalidDay {
                day,
                month: self.month.get(),
                year: self.year,
            });
        }
        self.day = day;
        Ok(())
    }

    /// Replaces the day options for the current month and year. A selected
    /// day past the new end of month falls back to the first option.
    fn refresh_day_options(&mut self) {
        self.day_options = day_options(self.month, self.year);
        if !self.day_options.contains(&self.day) {
            self.day = MIN_DAY;
        }
        tracing::trace!(
            month = self.month.get(),
            year = self.year,
            days = self.day_options.len(),
            "Refreshed day options"
        );
    }
}

impl Default for DateOfBirthPicker {
    fn default() -> Self {
        Self::for_today()
    }
}
