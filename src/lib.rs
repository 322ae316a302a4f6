//! Tournament group draw: library with models and draw logic.

pub mod logic;
pub mod models;

pub use logic::{draw_groups, report_groups};
pub use models::{DrawConfig, DrawError, Group, Pool};
