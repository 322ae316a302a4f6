//! Draw configuration and errors.

use crate::models::pool::Pool;
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a draw's preconditions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DrawError {
    /// The draw was given no pools at all.
    NoPools,
    /// A pool has no entrants.
    EmptyPool { pool: usize },
    /// A pool's length differs from the first pool's (pools must be equal-sized).
    UnevenPools {
        pool: usize,
        len: usize,
        expected: usize,
    },
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::NoPools => write!(f, "Need at least one pool to draw from"),
            DrawError::EmptyPool { pool } => write!(f, "Pool {} has no entrants", pool + 1),
            DrawError::UnevenPools {
                pool,
                len,
                expected,
            } => write!(
                f,
                "Pool {} has {} entrants but pools must all have {}",
                pool + 1,
                len,
                expected
            ),
        }
    }
}

impl std::error::Error for DrawError {}

/// Input to a draw: the seeding pools.
///
/// The default is the fixed four-by-four seeding this tool was built for.
/// Any equivalent structure can be supplied as JSON via [`DrawConfig::from_json`],
/// e.g. `{"pools": [["A", "B"], ["C", "D"]]}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub pools: Vec<Pool>,
}

impl DrawConfig {
    /// Parse a config from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Number of pools (entrants per group).
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Entrants per pool (groups to be drawn); 0 with no pools.
    pub fn group_count(&self) -> usize {
        self.pools.first().map_or(0, Pool::len)
    }

    /// Consume the config, yielding the pools for a single draw.
    pub fn into_pools(self) -> Vec<Pool> {
        self.pools
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            pools: vec![
                Pool::new(["Asgard Ymir", "Overwork", "Plate Group", "Los Pinguinos"]),
                Pool::new(["Alpha Impact", "UW Paradox", "TST", "munich eSport Celestial"]),
                Pool::new(["ushi's Daycare", "MRG Amethyst", "Sovereign", "Warrior Genesis"]),
                Pool::new(["UKN Lupine", ".eXe", "Kiira", "Wave Racers"]),
            ],
        }
    }
}
