//! # Lawbook Core
//!
//! Domain types and pure rules for the Lawbook booking service: weekly lawyer
//! availability, the hourly slot deriver, the look-ahead booking window and
//! booking validation. Nothing in this crate touches the network or a database.

pub mod booking;
pub mod errors;
pub mod models;
pub mod slots;
pub mod time;
pub mod validation;
pub mod window;

pub use errors::{LawbookError, LawbookResult};
pub use slots::{derive_slots, derive_slots_for_date, mark_booked};
pub use time::ClockTime;
pub use window::{booking_window, BOOKING_WINDOW_DAYS};
