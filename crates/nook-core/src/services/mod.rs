//! Pipelines that sit between the transport and the ports.

mod comments;
mod gate;
mod posts;

#[cfg(test)]
mod fakes;

pub use comments::{CommentPolicy, CommentService, is_loopback};
pub use gate::AccessGate;
pub use posts::PostService;
