//! Booking core of the freight desk: maps enquiry data into booking forms,
//! drives the booking wizard and serves paginated, filterable job lists.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "client")]
pub mod export;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

/// Rows per page until the user picks another size.
pub const DEFAULT_PAGE_SIZE: usize = 25;
