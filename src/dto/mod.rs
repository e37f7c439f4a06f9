//! DTO modules that bridge services with callers and the REST API.

pub mod api;
pub mod list;
pub mod navigation;
