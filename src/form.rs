use std::fmt;

use serde::Serialize;

use crate::consts::REDACTED;
use crate::{Contact, DateSelection, Gender, SignupFormInput, SignupValidator, ValidationError};

/// Normalised values of an accepted signup.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub first_name:    String,
    pub surname:       String,
    pub contact:       Contact,
    pub password:      String,
    /// Composed as `day-month-year`, without padding
    pub date_of_birth: String,
    pub gender:        Gender,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("first_name", &self.first_name)
            .field("surname", &self.surname)
            .field("contact", &self.contact)
            .field("password", &REDACTED)
            .field("date_of_birth", &self.date_of_birth)
            .field("gender", &self.gender)
            .finish()
    }
}

impl Submission {
    /// Builds a submission from input that already passed validation.
    fn from_input(
        input: SignupFormInput,
        validator: &SignupValidator,
    ) -> Result<Self, ValidationError> {
        let (Some(date_of_birth), Some(gender)) = (input.date_of_birth, input.gender) else {
            return Err(ValidationError::MissingRequiredField);
        };
        let contact = Contact::classify(&input.email_or_mobile, validator.policy())
            .ok_or(ValidationError::InvalidContact)?;

        Ok(Self {
            first_name: input.first_name,
            surname: input.surname,
            contact,
            password: input.password,
            date_of_birth: date_of_birth.to_string(),
            gender,
        })
    }
}

/// Submit handler of the signup form: owns the field values between edits
/// and turns a submit into either a [`Submission`] or the first failed rule.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    input:     SignupFormInput,
    validator: SignupValidator,
}

impl SignupForm {
    pub const fn new(validator: SignupValidator) -> Self {
        Self {
            input: SignupFormInput {
                first_name:      String::new(),
                surname:         String::new(),
                email_or_mobile: String::new(),
                password:        String::new(),
                date_of_birth:   None,
                gender:          None,
            },
            validator,
        }
    }

    pub const fn input(&self) -> &SignupFormInput {
        &self.input
    }

    /// Replaces every field at once, e.g. with values read from the page.
    pub fn fill(&mut self, input: SignupFormInput) {
        self.input = input;
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.input.first_name = value.into();
    }

    pub fn set_surname(&mut self, value: impl Into<String>) {
        self.input.surname = value.into();
    }

    pub fn set_email_or_mobile(&mut self, value: impl Into<String>) {
        self.input.email_or_mobile = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.input.password = value.into();
    }

    pub fn set_date_of_birth(&mut self, date: DateSelection) {
        self.input.date_of_birth = Some(date);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.input.gender = Some(gender);
    }

    /// Clears every field.
    pub fn reset(&mut self) {
        self.input = SignupFormInput::default();
    }

    /// Validates the current fields.
    ///
    /// On success the accepted values are logged, returned, and the form is
    /// cleared. On failure the fields are left as they are.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] of the first rule the fields violate.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        if let Err(error) = self.validator.validate(&self.input) {
            tracing::warn!(rule = %error, "Signup submit blocked");
            return Err(error);
        }

        let submission = Submission::from_input(self.input.clone(), &self.validator)?;
        tracing::info!(
            first_name = %submission.first_name,
            surname = %submission.surname,
            email_or_mobile = %submission.contact,
            password = REDACTED,
            date_of_birth = %submission.date_of_birth,
            gender = %submission.gender,
            "Form submitted successfully"
        );
        self.reset();
        Ok(submission)
    }
}
