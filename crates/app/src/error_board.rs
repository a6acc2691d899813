//! Error board — one error slot per resource, reduced to a single visible
//! message at the presentation boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::slot::lock;

/// Resources that can raise a user-facing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Summary,
    Categories,
    QuickStats,
    /// Create, update and archive of a category.
    CategoryMutation,
}

/// A message raised by one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaisedError {
    pub resource: Resource,
    pub message: String,
    raised_at: u64,
}

#[derive(Debug, Default)]
struct Board {
    clock: u64,
    entries: HashMap<Resource, RaisedError>,
}

/// Latest error message per resource.
///
/// Raising replaces the resource's previous message. Nothing is cleared
/// implicitly; callers decide when the board is wiped.
#[derive(Debug, Default)]
pub struct ErrorBoard {
    inner: Mutex<Board>,
}

impl ErrorBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self, resource: Resource, message: impl Into<String>) {
        let mut board = lock(&self.inner);
        board.clock += 1;
        let raised_at = board.clock;
        board.entries.insert(
            resource,
            RaisedError {
                resource,
                message: message.into(),
                raised_at,
            },
        );
    }

    pub fn clear_all(&self) {
        lock(&self.inner).entries.clear();
    }

    /// Message currently held for `resource`.
    #[must_use]
    pub fn get(&self, resource: Resource) -> Option<String> {
        lock(&self.inner)
            .entries
            .get(&resource)
            .map(|entry| entry.message.clone())
    }

    /// The most recently raised error across all resources.
    #[must_use]
    pub fn visible(&self) -> Option<RaisedError> {
        lock(&self.inner)
            .entries
            .values()
            .max_by_key(|entry| entry.raised_at)
            .cloned()
    }
}
