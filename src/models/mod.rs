//! Runtime configuration of the REST client.

pub mod config;
