//! Ordered, short-circuiting validation of a submitted signup form.
//!
//! Rules run in a fixed order and the first violation wins:
//!
//! 1. every field is filled in
//! 2. the contact is an email address or a mobile number
//! 3. the password is long enough
//! 4. ..and has an uppercase letter,
//! 5. ..a lowercase letter,
//! 6. ..a digit,
//! 7. ..no space,
//! 8. ..and a special character.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::REDACTED;
use crate::{DateSelection, Gender, Month, ParseError, SignupPolicy};

#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid literal")
});

/// Typed payload of one submit event.
///
/// Text fields are kept as typed by the user. The date of birth is `None`
/// until all three of its dropdowns are picked, and the gender is `None`
/// until a radio button is picked.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupFormInput {
    pub first_name:      String,
    pub surname:         String,
    pub email_or_mobile: String,
    pub password:        String,
    pub date_of_birth:   Option<DateSelection>,
    pub gender:          Option<Gender>,
}

impl SignupFormInput {
    fn has_missing_field(&self) -> bool {
        self.first_name.is_empty()
            || self.surname.is_empty()
            || self.email_or_mobile.is_empty()
            || self.password.is_empty()
            || self.date_of_birth.is_none()
            || self.gender.is_none()
    }
}

impl fmt::Debug for SignupFormInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupFormInput")
            .field("first_name", &self.first_name)
            .field("surname", &self.surname)
            .field("email_or_mobile", &self.email_or_mobile)
            .field("password", &REDACTED)
            .field("date_of_birth", &self.date_of_birth)
            .field("gender", &self.gender)
            .finish()
    }
}

/// The form as a renderer posts it: every control's value as a string,
/// keyed by the control's `name` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSignupForm {
    pub first_name:      String,
    pub surname:         String,
    pub email_or_mobile: String,
    pub password:        String,
    #[serde(rename = "dob-day")]
    pub dob_day:         String,
    #[serde(rename = "dob-month")]
    pub dob_month:       String,
    #[serde(rename = "dob-year")]
    pub dob_year:        String,
    pub gender:          String,
}

impl TryFrom<RawSignupForm> for SignupFormInput {
    type Error = ParseError;

    fn try_from(raw: RawSignupForm) -> Result<Self, Self::Error> {
        let day: Option<u8> = parse_selector(&raw.dob_day)?;
        let month = parse_selector::<u8>(&raw.dob_month)?
            .map(Month::new)
            .transpose()?;
        let year: Option<i32> = parse_selector(&raw.dob_year)?;

        let date_of_birth = match (day, month, year) {
            (Some(day), Some(month), Some(year)) => Some(DateSelection::new(day, month, year)?),
            _ => None,
        };

        Ok(Self {
            date_of_birth,
            gender: parse_selector(&raw.gender)?,
            first_name: raw.first_name,
            surname: raw.surname,
            email_or_mobile: raw.email_or_mobile,
            password: raw.password,
        })
    }
}

/// Empty selector value means nothing was picked
fn parse_selector<T: std::str::FromStr>(value: &str) -> Result<Option<T>, ParseError>
where
    ParseError: From<T::Err>,
{
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.parse::<T>()?))
}

/// What the contact field was recognised as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Contact {
    Email(String),
    Mobile(String),
}

impl Contact {
    /// Classifies `value` as an email address or a mobile number, or `None`
    /// if it is neither.
    pub fn classify(value: &str, policy: &SignupPolicy) -> Option<Self> {
        if EMAIL_REGEX.is_match(value) {
            Some(Self::Email(value.to_owned()))
        } else if policy.is_mobile(value) {
            Some(Self::Mobile(value.to_owned()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Email(value) | Self::Mobile(value) => value,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First rule a submitted form violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field")]
    MissingRequiredField,

    #[error("invalid email or mobile format")]
    InvalidContact,

    #[error("password too short")]
    PasswordTooShort { min: usize },

    #[error("password missing uppercase letter")]
    PasswordMissingUppercase,

    #[error("password missing lowercase letter")]
    PasswordMissingLowercase,

    #[error("password missing digit")]
    PasswordMissingDigit,

    #[error("password contains space")]
    PasswordContainsSpace,

    #[error("password missing special character")]
    PasswordMissingSpecial,
}

impl ValidationError {
    /// Sentence shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingRequiredField => "Please fill in all fields.".to_owned(),
            Self::InvalidContact => {
                "Please enter a valid email address or mobile number.".to_owned()
            },
            Self::PasswordTooShort { min } => {
                format!("Password must be at least {min} characters long.")
            },
            Self::PasswordMissingUppercase => {
                "Password must contain at least one uppercase letter.".to_owned()
            },
            Self::PasswordMissingLowercase => {
                "Password must contain at least one lowercase letter.".to_owned()
            },
            Self::PasswordMissingDigit => "Password must contain at least one number.".to_owned(),
            Self::PasswordContainsSpace => "Password cannot contain spaces.".to_owned(),
            Self::PasswordMissingSpecial => {
                "Password must contain at least one special character.".to_owned()
            },
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Runs the signup rules against a [`SignupFormInput`]. Holds no state
/// besides its policy, so the same input always yields the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupValidator {
    policy: SignupPolicy,
}

impl SignupValidator {
    pub const fn new(policy: SignupPolicy) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> &SignupPolicy {
        &self.policy
    }

    /// # Errors
    /// Returns the [`ValidationError`] of the first rule `input` violates.
    pub fn validate(&self, input: &SignupFormInput) -> ValidationResult {
        let result = self.check(input);
        if let Err(ref error) = result {
            tracing::debug!(rule = %error, "Signup validation failed");
        }
        result
    }

    fn check(&self, input: &SignupFormInput) -> ValidationResult {
        if input.has_missing_field() {
            return Err(ValidationError::MissingRequiredField);
        }
        if Contact::classify(&input.email_or_mobile, &self.policy).is_none() {
            return Err(ValidationError::InvalidContact);
        }
        self.check_password(&input.password)
    }

    fn check_password(&self, password: &str) -> ValidationResult {
        if password.chars().count() < self.policy.min_password_len {
            return Err(ValidationError::PasswordTooShort {
                min: self.policy.min_password_len,
            });
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::PasswordMissingUppercase);
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::PasswordMissingLowercase);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::PasswordMissingDigit);
        }
        if password.contains(' ') {
            return Err(ValidationError::PasswordContainsSpace);
        }
        if !password.chars().any(|c| self.policy.is_special(c)) {
            return Err(ValidationError::PasswordMissingSpecial);
        }
        Ok(())
    }
}

/// Validates `input` against the default [`SignupPolicy`].
///
/// # Errors
/// Returns the [`ValidationError`] of the first rule `input` violates.
pub fn validate(input: &SignupFormInput) -> ValidationResult {
    SignupValidator::default().validate(input)
}
