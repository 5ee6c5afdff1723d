//! Diagnostic logging setup.
//!
//! The core logs through `tracing` macros everywhere. Hosts that want
//! the output call [`init`] once at startup; without it the macros are
//! no-ops.

use crate::config::LogConfig;

/// Installs a stderr subscriber at the configured level.
///
/// Does nothing if `config.enabled` is `false`. Safe to call more than
/// once: only the first successful call installs a subscriber.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
