//! Data structures for the group draw: pools, groups, config, errors.

mod draw;
mod group;
mod pool;

pub use draw::{DrawConfig, DrawError};
pub use group::Group;
pub use pool::Pool;
