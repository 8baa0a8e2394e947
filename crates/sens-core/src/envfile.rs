use crate::error::Result;
use crate::paths;
use std::collections::HashMap;
use std::path::Path;

/// Parse `<root>/.env` into KEY=VALUE pairs.
///
/// Blank lines and `#` comments are skipped; the split is on the first `=`
/// so values may themselves contain `=`. A missing file yields an empty map
/// — the caller reports the missing key where it is actually needed.
pub fn load(root: &Path) -> Result<HashMap<String, String>> {
    let path = paths::env_path(root);
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(parse(&content))
}

fn parse(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .filter_map(|l| l.split_once('='))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
