//! Screen state machines.
//!
//! Each screen of the planner owns one machine: the two-step creation wizard,
//! the post-creation trip screen, and the add-activity form. A machine is a
//! plain value whose transition methods check their guards before mutating
//! anything, so a rejected event always leaves the state exactly as it was.
//! Overlays are mutually exclusive within a machine; the nested overlays
//! (date pickers opened from inside another overlay) close back to their
//! parent overlay, not to the bare screen.
//!
//! The machines are synchronous and side-effect free. Busy flags and
//! collaborator calls live in [`crate::controllers`].

mod activity_form;
mod trip_screen;
mod wizard;


pub use activity_form::{ActivityDraft, ActivityForm, ActivityOverlay};
pub use trip_screen::{Tab, TripOverlay, TripScreen};
pub use wizard::{Advance, Step, Wizard, WizardOverlay};
