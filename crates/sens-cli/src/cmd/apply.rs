use crate::output::print_json;
use anyhow::Context;
use sens_core::apply::{apply_sensitivity, ApplyOutcome};
use sens_core::randomize::random_sensitivity;
use sens_core::settings::Settings;
use std::path::Path;

// ---------------------------------------------------------------------------
// random (the default command)
// ---------------------------------------------------------------------------

pub fn run_random(root: &Path, json: bool) -> anyhow::Result<()> {
    let settings = Settings::load(root).context("failed to load settings")?;
    if settings.lower_bound > settings.upper_bound {
        anyhow::bail!(
            "invalid random range: lower bound {} exceeds upper bound {}",
            settings.lower_bound,
            settings.upper_bound
        );
    }
    let sensitivity = random_sensitivity(settings.lower_bound, settings.upper_bound);
    let outcome = apply_sensitivity(root, sensitivity)?;
    report(&outcome, "randomized", json)
}

// ---------------------------------------------------------------------------
// main (apply the pinned favorite)
// ---------------------------------------------------------------------------

pub fn run_main(root: &Path, json: bool) -> anyhow::Result<()> {
    let settings = Settings::load(root).context("failed to load settings")?;
    let outcome = apply_sensitivity(root, settings.main_sensitivity)?;
    report(&outcome, "main", json)
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

fn report(outcome: &ApplyOutcome, label: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({
            "label": label,
            "sensitivity": outcome.sensitivity,
            "timestamp": outcome.timestamp,
            "autoexec_path": outcome.autoexec_path,
        });
        return print_json(&value);
    }

    println!("sensitivity ({label}): {}", outcome.sensitivity);
    println!("written: {}", outcome.autoexec_path.display());
    println!(
        "logged:  {}, {}",
        sens_core::paths::CSV_LOG_FILE,
        sens_core::paths::JSON_LOG_FILE
    );
    Ok(())
}
