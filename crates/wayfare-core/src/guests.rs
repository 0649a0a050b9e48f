//! Guest invite list for the trip-creation wizard.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripError},
    validate,
};

/// An insertion-ordered list of unique guest e-mail addresses.
///
/// Duplicate detection compares the literal string as typed, so the same
/// address with different casing is accepted twice. Addresses are stored with
/// their typed casing, and the check follows the stored form rather than
/// silently normalizing (see DESIGN.md).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestList {
    emails: Vec<String>,
}

impl GuestList {
    /// Creates an empty invite list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate address to the list.
    ///
    /// Syntax is checked first; a malformed candidate leaves the list
    /// untouched. A literal duplicate is rejected with
    /// [`TripError::DuplicateEmail`].
    pub fn add(&mut self, candidate: &str) -> Result<()> {
        if !validate::is_email(candidate) {
            return Err(TripError::InvalidEmail {
                email: candidate.to_string(),
            });
        }

        if self.emails.iter().any(|email| email == candidate) {
            return Err(TripError::DuplicateEmail {
                email: candidate.to_string(),
            });
        }

        self.emails.push(candidate.to_string());
        Ok(())
    }

    /// Removes an address from the list. Removing an absent address is a
    /// no-op.
    pub fn remove(&mut self, email: &str) {
        self.emails.retain(|invited| invited != email);
    }

    /// Invited addresses in insertion order.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Number of invited guests.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// True when nobody has been invited yet.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
