//! Shared builders for unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::{DateSelection, Gender, Month, RawSignupForm, SignupFormInput};

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

/// A form that passes every rule.
pub fn valid_input() -> SignupFormInput {
    SignupFormInput {
        first_name:      "Jane".to_owned(),
        surname:         "Doe".to_owned(),
        email_or_mobile: "jane@example.com".to_owned(),
        password:        "Abcdef1!".to_owned(),
        date_of_birth:   Some(DateSelection::new(1, month(1), 2000).unwrap()),
        gender:          Some(Gender::Female),
    }
}

/// [`valid_input`] as the page would post it.
pub fn valid_raw_form() -> RawSignupForm {
    RawSignupForm {
        first_name:      "Jane".to_owned(),
        surname:         "Doe".to_owned(),
        email_or_mobile: "jane@example.com".to_owned(),
        password:        "Abcdef1!".to_owned(),
        dob_day:         "1".to_owned(),
        dob_month:       "1".to_owned(),
        dob_year:        "2000".to_owned(),
        gender:          "female".to_owned(),
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns its result along with
/// every event it logged, one formatted line per event.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (result, logs)
}
