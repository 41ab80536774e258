//! Middleware and extractors.

pub mod admin;
pub mod client;
pub mod error;
