//! Draw logic: the random assignment engine and the group reporter.

mod draw;
mod report;

pub use draw::draw_groups;
pub use report::report_groups;
