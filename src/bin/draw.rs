//! Group draw CLI: draws the tournament groups from the seeding pools and
//! announces them on stdout, one group every few seconds.
//! Run with: cargo run --bin draw
//! Logging via env: RUST_LOG (e.g. RUST_LOG=info).

use group_draw::{draw_groups, report_groups, DrawConfig};
use std::io;
use std::time::Duration;

/// Pause between group announcements.
const ANNOUNCE_PAUSE: Duration = Duration::from_secs(5);

fn main() {
    env_logger::init();

    let config = DrawConfig::default();
    log::info!(
        "drawing {} groups from {} pools",
        config.group_count(),
        config.pool_count()
    );

    let mut pools = config.into_pools();
    let mut rng = rand::thread_rng();
    let groups = match draw_groups(&mut pools, &mut rng) {
        Ok(groups) => groups,
        Err(e) => {
            log::error!("draw failed: {e}");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = report_groups(&mut stdout.lock(), &groups, ANNOUNCE_PAUSE) {
        log::error!("failed to announce groups: {e}");
        std::process::exit(1);
    }
}
