//! Groups: the output unit of the draw.

use serde::{Deserialize, Serialize};

/// One drawn group: position `p` holds the entrant drawn from pool `p`.
/// Built up during the draw, not modified afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group {
    members: Vec<String>,
}

impl Group {
    pub(crate) fn with_capacity(pool_count: usize) -> Self {
        Self {
            members: Vec::with_capacity(pool_count),
        }
    }

    pub(crate) fn push(&mut self, entrant: String) {
        self.members.push(entrant);
    }

    /// Members in pool order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.members.join(", "))
    }
}
