//! End-to-end flow for one sensitivity change: resolve the CS2 cfg
//! directory, patch the template, write `autoexec.cfg`, record the change.

use crate::error::{Result, SensError};
use crate::logbook::{change_timestamp, LogEntry, Logbook};
use crate::patch::{insert_sensitivity, HeaderSpec};
use crate::{envfile, io, paths};
use std::path::{Path, PathBuf};

/// What a successful apply produced, for the CLI to report.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApplyOutcome {
    pub sensitivity: f64,
    pub timestamp: String,
    pub autoexec_path: PathBuf,
}

/// Patch the template with `sensitivity`, overwrite the target
/// `autoexec.cfg`, and append one entry to each log.
///
/// The target directory comes from `AUTOEXEC_LOCATION` in `<root>/.env` and
/// must already exist — this tool never creates the game's cfg directory.
pub fn apply_sensitivity(root: &Path, sensitivity: f64) -> Result<ApplyOutcome> {
    let env = envfile::load(root)?;
    let location = env
        .get(paths::AUTOEXEC_LOCATION_KEY)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SensError::EnvKeyMissing(paths::AUTOEXEC_LOCATION_KEY.to_string()))?;

    let target = PathBuf::from(location);
    if !target.exists() {
        return Err(SensError::TargetMissing(target));
    }

    let template_path = paths::template_path(root);
    if !template_path.exists() {
        return Err(SensError::TemplateMissing(template_path));
    }
    let template = std::fs::read_to_string(&template_path)?;
    let patched = insert_sensitivity(&template, sensitivity, &HeaderSpec::default());

    let autoexec_path = paths::autoexec_path(&target);
    io::atomic_write(&autoexec_path, patched.as_bytes())?;

    // The logbook itself does not create directories.
    io::ensure_dir(&paths::logs_dir(root))?;
    let timestamp = change_timestamp();
    Logbook::at_root(root).append(&LogEntry {
        timestamp: timestamp.clone(),
        sensitivity,
        autoexec_content: patched,
    })?;

    Ok(ApplyOutcome {
        sensitivity,
        timestamp,
        autoexec_path,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
