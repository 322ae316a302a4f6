//! The draw engine: balanced random assignment without replacement.

use crate::models::{DrawError, Group, Pool};
use rand::Rng;

/// Draw groups from the seeding pools.
///
/// Produces one group per pool entry, each group taking exactly one entrant
/// from each pool, chosen uniformly at random from that pool's remaining
/// entrants. Group position `p` always holds the entrant drawn from pool `p`.
///
/// Preconditions are checked before anything is drawn: at least one pool,
/// no empty pool, all pools the same length. On error the pools are left
/// untouched; on success they are fully drained (pools are single-use).
pub fn draw_groups<R: Rng>(pools: &mut [Pool], rng: &mut R) -> Result<Vec<Group>, DrawError> {
    validate_pools(pools)?;

    let group_count = pools[0].len();
    let mut groups: Vec<Group> = (0..group_count)
        .map(|_| Group::with_capacity(pools.len()))
        .collect();

    for group in &mut groups {
        for pool in pools.iter_mut() {
            let idx = rng.gen_range(0..pool.len());
            group.push(pool.take(idx));
        }
    }

    Ok(groups)
}

/// Fail fast on malformed pool sets; the draw itself cannot fail after this.
fn validate_pools(pools: &[Pool]) -> Result<(), DrawError> {
    if pools.is_empty() {
        return Err(DrawError::NoPools);
    }
    let expected = pools[0].len();
    for (i, pool) in pools.iter().enumerate() {
        if pool.is_empty() {
            return Err(DrawError::EmptyPool { pool: i });
        }
        if pool.len() != expected {
            return Err(DrawError::UnevenPools {
                pool: i,
                len: pool.len(),
                expected,
            });
        }
    }
    Ok(())
}
