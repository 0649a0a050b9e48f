//! Display wrapper types for formatting different contexts.
//!
//! Domain models stay presentation-free; these wrappers implement
//! [`std::fmt::Display`] over references to them, producing the markdown the
//! CLI renders. The same data can be formatted differently per context
//! (headline vs. list vs. schedule) without touching the models.

mod details;
mod schedule;
mod trip;

pub use details::{Guests, Links};
pub use schedule::Schedule;
pub use trip::TripHeadline;
