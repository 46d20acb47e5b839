//! Storage locations inside the plugin sandbox.

use std::path::PathBuf;

const PREFERENCES_FILE: &str = "preferences.json";
const LOG_FILE: &str = "userdeck.log";

/// Plugin-private data directory provided by Zellij.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// File holding the persisted preferences.
#[must_use]
pub fn preferences_path() -> PathBuf {
    get_data_dir().join(PREFERENCES_FILE)
}

/// File receiving the plugin log.
#[must_use]
pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_the_data_dir() {
        assert_eq!(preferences_path(), PathBuf::from("/data/preferences.json"));
        assert_eq!(log_path(), PathBuf::from("/data/userdeck.log"));
    }
}
