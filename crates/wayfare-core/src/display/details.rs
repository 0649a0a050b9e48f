//! Link and guest list formatting for the details tab.

use std::fmt;

use crate::models::{Participant, TripLink};

/// Markdown rendering of a trip's shared links.
pub struct Links<'a>(pub &'a [TripLink]);

impl fmt::Display for Links<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No links created.");
        }

        for link in self.0 {
            writeln!(f, "- **{}**: {}", link.title, link.url)?;
        }

        Ok(())
    }
}

/// Markdown rendering of a trip's guest list.
pub struct Guests<'a>(pub &'a [Participant]);

impl fmt::Display for Guests<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No guests invited.");
        }

        for guest in self.0 {
            let status = if guest.is_confirmed {
                "confirmed"
            } else {
                "pending"
            };
            match &guest.name {
                Some(name) => writeln!(f, "- {} <{}> ({status})", name, guest.email)?,
                None => writeln!(f, "- {} ({status})", guest.email)?,
            }
        }

        Ok(())
    }
}
