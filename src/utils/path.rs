//! Path utilities: expand ~, resolve config-relative paths.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve `path` against `base` unless it is already absolute (after `~` expansion).
pub fn resolve_from(base: Option<&Path>, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    match base {
        Some(dir) if p.is_relative() => dir.join(p),
        _ => p,
    }
}
