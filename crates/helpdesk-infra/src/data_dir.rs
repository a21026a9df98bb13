//! Data directory resolution.

use std::path::PathBuf;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `HELPDESK_DATA_DIR` environment variable
/// 2. `~/.helpdesk`
/// 3. `.helpdesk` in the current directory as a last resort
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HELPDESK_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".helpdesk");
    }

    PathBuf::from(".helpdesk")
}
