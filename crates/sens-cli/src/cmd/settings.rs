use crate::output::print_json;
use anyhow::Context;
use sens_core::settings::Settings;
use std::path::Path;

// ---------------------------------------------------------------------------
// set-main
// ---------------------------------------------------------------------------

pub fn set_main(root: &Path, value: f64) -> anyhow::Result<()> {
    let mut settings = Settings::load(root).context("failed to load settings")?;
    settings.main_sensitivity = value;
    settings.save(root).context("failed to save settings")?;
    println!("main sensitivity set to {value}");
    Ok(())
}

// ---------------------------------------------------------------------------
// show-range
// ---------------------------------------------------------------------------

pub fn show_range(root: &Path, json: bool) -> anyhow::Result<()> {
    let settings = Settings::load(root).context("failed to load settings")?;

    if json {
        let value = serde_json::json!({
            "lower_bound": settings.lower_bound,
            "upper_bound": settings.upper_bound,
        });
        return print_json(&value);
    }

    println!("lower bound: {}", settings.lower_bound);
    println!("upper bound: {}", settings.upper_bound);
    Ok(())
}

// ---------------------------------------------------------------------------
// set-lower / set-upper
// ---------------------------------------------------------------------------

pub fn set_lower(root: &Path, value: f64) -> anyhow::Result<()> {
    let mut settings = Settings::load(root).context("failed to load settings")?;
    settings.lower_bound = value;
    settings.save(root).context("failed to save settings")?;
    println!("lower bound set to {value}");
    Ok(())
}

pub fn set_upper(root: &Path, value: f64) -> anyhow::Result<()> {
    let mut settings = Settings::load(root).context("failed to load settings")?;
    settings.upper_bound = value;
    settings.save(root).context("failed to save settings")?;
    println!("upper bound set to {value}");
    Ok(())
}
