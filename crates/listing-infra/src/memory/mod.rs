//! In-memory repositories - used when no database is configured, and as
//! the store behind service and HTTP tests.
//!
//! Data is lost on process restart.

mod category;
mod post;

pub use category::InMemoryCategoryRepository;
pub use post::InMemoryPostRepository;

/// Rows of one table keyed by ID; `BTreeMap` keeps insertion order since
/// IDs are handed out monotonically.
struct Table<T> {
    next_id: i32,
    rows: std::collections::BTreeMap<i32, T>,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            rows: std::collections::BTreeMap::new(),
        }
    }

    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
