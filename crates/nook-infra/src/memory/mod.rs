//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart.

mod comments;
mod posts;

pub use comments::InMemoryCommentRepository;
pub use posts::InMemoryPostRepository;

use std::collections::BTreeMap;

/// Rows keyed by a monotonic id, the way an auto-increment table hands them out.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}
