//! Reporting: announce the drawn groups one line at a time.

use crate::models::Group;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Write one `Group <n>: <members>` line per group (1-based), pausing
/// `pause` between lines for dramatic effect.
///
/// Each line is flushed before the pause so it is visible while the pause
/// runs. A zero `pause` never sleeps, and no pause follows the last group,
/// so non-interactive callers (and tests) pay no wall-clock cost.
pub fn report_groups<W: Write>(
    out: &mut W,
    groups: &[Group],
    pause: Duration,
) -> std::io::Result<()> {
    for (i, group) in groups.iter().enumerate() {
        writeln!(out, "Group {}: {}", i + 1, group)?;
        out.flush()?;
        if !pause.is_zero() && i + 1 < groups.len() {
            thread::sleep(pause);
        }
    }
    Ok(())
}
