use std::path::{Path, PathBuf};

/// Resolve the tool root directory (where the template, `.env`, `config/`
/// and `logs/` live).
///
/// Priority:
/// 1. `--root` flag / `SENS_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `example_autoexec.cfg`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut dir = cwd.clone();
    loop {
        if dir.join(sens_core::paths::TEMPLATE_FILE).is_file() {
            return dir;
        }
        match dir.parent() {
            Some(p) => dir = p.to_path_buf(),
            None => break,
        }
    }

    cwd
}
