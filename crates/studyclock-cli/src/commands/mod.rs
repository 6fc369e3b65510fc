pub mod config;
pub mod format;
pub mod run;
pub mod simulate;

use studyclock_core::Config;

/// Config from disk with optional per-invocation duration overrides.
///
/// Overrides are range-checked by clap before they reach here.
pub fn load_config(work: Option<u32>, rest: Option<u32>) -> Config {
    let mut config = Config::load_or_default();
    if let Some(minutes) = work {
        config.timer.work_minutes = minutes;
    }
    if let Some(minutes) = rest {
        config.timer.rest_minutes = minutes;
    }
    config
}
