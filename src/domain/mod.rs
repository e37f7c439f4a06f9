//! Domain aggregates exposed by the booking service layer.

pub mod booking;
pub mod filter;
pub mod service;
pub mod source;
pub mod types;
