//! Waitlist signup form on the prototype detail page.
//!
//! DESIGN
//! ======
//! In-memory only. A successful submit flips `submitted` once; nothing is
//! persisted or sent anywhere.

#[cfg(test)]
#[path = "waitlist_test.rs"]
mod waitlist_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a submit did not go through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitlistError {
    EmailRequired,
    InvalidEmail,
    AlreadySubmitted,
}

impl WaitlistError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::EmailRequired => "Email is required",
            Self::InvalidEmail => "Please enter a valid email",
            Self::AlreadySubmitted => "You're already on the waitlist",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    pub email: String,
    pub submitted: bool,
    pub error: Option<WaitlistError>,
}

impl WaitlistForm {
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Validate and record the signup.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, which is also kept in `error` for
    /// inline display. `AlreadySubmitted` leaves the form untouched.
    pub fn submit(&mut self) -> Result<(), WaitlistError> {
        if self.submitted {
            return Err(WaitlistError::AlreadySubmitted);
        }
        if let Err(err) = validate_email(&self.email) {
            self.error = Some(err);
            return Err(err);
        }
        self.submitted = true;
        self.error = None;
        Ok(())
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(WaitlistError::message)
    }
}

/// Check an address the way the form does: non-empty, then `x@y.z` shape.
///
/// # Errors
///
/// `EmailRequired` for an empty string, `InvalidEmail` otherwise.
pub fn validate_email(email: &str) -> Result<(), WaitlistError> {
    if email.is_empty() {
        return Err(WaitlistError::EmailRequired);
    }
    let valid = EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email));
    if valid { Ok(()) } else { Err(WaitlistError::InvalidEmail) }
}
