//! # Nook Core
//!
//! The domain layer of the Nook backend: comments, posts, and the pipelines
//! that prepare them for storage. Infrastructure lives behind the traits in
//! [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
