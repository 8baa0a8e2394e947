use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File and directory constants
// ---------------------------------------------------------------------------

pub const CONFIG_DIR: &str = "config";
pub const LOGS_DIR: &str = "logs";

pub const SETTINGS_FILE: &str = "config/settings.json";
pub const TEMPLATE_FILE: &str = "example_autoexec.cfg";
pub const ENV_FILE: &str = ".env";

pub const CSV_LOG_FILE: &str = "logs/sensitivity_log.csv";
pub const JSON_LOG_FILE: &str = "logs/sensitivity_log.json";

pub const AUTOEXEC_FILE: &str = "autoexec.cfg";

/// Key looked up in `.env` for the CS2 cfg directory.
pub const AUTOEXEC_LOCATION_KEY: &str = "AUTOEXEC_LOCATION";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

pub fn template_path(root: &Path) -> PathBuf {
    root.join(TEMPLATE_FILE)
}

pub fn env_path(root: &Path) -> PathBuf {
    root.join(ENV_FILE)
}

pub fn logs_dir(root: &Path) -> PathBuf {
    root.join(LOGS_DIR)
}

pub fn csv_log_path(root: &Path) -> PathBuf {
    root.join(CSV_LOG_FILE)
}

pub fn json_log_path(root: &Path) -> PathBuf {
    root.join(JSON_LOG_FILE)
}

/// Where the patched config lands inside the CS2 cfg directory.
pub fn autoexec_path(target: &Path) -> PathBuf {
    target.join(AUTOEXEC_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
