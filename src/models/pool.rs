//! Seeding pools: the per-slot entrant lists the draw pulls from.

use serde::{Deserialize, Serialize};

/// A seeding pool: an ordered list of entrant names, drained during the draw.
///
/// A pool has no name of its own; it is identified by its index in the pool
/// list, and that index is also the position its entrants occupy in every
/// group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pool {
    entrants: Vec<String>,
}

impl Pool {
    /// Create a pool from entrant names.
    pub fn new<I, S>(entrants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entrants: entrants.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of entrants still in the pool.
    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }

    /// Remaining entrants, in their current order.
    pub fn entrants(&self) -> &[String] {
        &self.entrants
    }

    /// Remove and return the entrant at `idx` (swap-and-pop; the order of
    /// the remaining entrants is not preserved). Removal by index keeps the
    /// draw well-defined even when a pool contains duplicate names.
    ///
    /// Panics if `idx` is out of bounds, like `Vec::swap_remove`.
    pub fn take(&mut self, idx: usize) -> String {
        self.entrants.swap_remove(idx)
    }
}
