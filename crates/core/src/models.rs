pub mod availability;
pub mod booking;
pub mod response;
pub mod schedule;
pub mod slot;
