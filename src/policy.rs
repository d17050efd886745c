use serde::{Deserialize, Serialize};

use crate::consts::{MIN_PASSWORD_LEN, MOBILE_MAX_DIGITS, MOBILE_MIN_DIGITS, SPECIAL_CHARACTERS};

/// Tunable limits for [`SignupValidator`](crate::SignupValidator).
///
/// Missing fields take their default, so a partial JSON document like
/// `{"min_password_len": 12}` is a valid policy. The default reproduces the
/// stock signup rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupPolicy {
    /// Shortest accepted password, counted in characters
    pub min_password_len:   usize,
    /// A password needs at least one of these
    pub special_characters: String,
    /// Accepted digit count of a mobile number, inclusive on both ends
    pub mobile_digits:      (usize, usize),
}

impl SignupPolicy {
    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(c)
    }

    /// Whether `value` is a mobile number: ASCII digits only, with a digit
    /// count inside `mobile_digits`.
    pub fn is_mobile(&self, value: &str) -> bool {
        let (min, max) = self.mobile_digits;
        (min..=max).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
    }
}

impl Default for SignupPolicy {
    fn default() -> Self {
        Self {
            min_password_len:   MIN_PASSWORD_LEN,
            special_characters: SPECIAL_CHARACTERS.to_owned(),
            mobile_digits:      (MOBILE_MIN_DIGITS, MOBILE_MAX_DIGITS),
        }
    }
}
