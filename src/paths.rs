use pathdiff::diff_paths;
use std::env;
use std::path::Path;

/// Rewrites `path` relative to the current working directory when it is an
/// absolute path underneath it; any other input passes through unchanged.
///
/// Only used for the log line ahead of a scoped run. Inspections always
/// receive the original paths.
pub fn display_path(path: &str) -> String {
    match env::current_dir() {
        Ok(cwd) => display_path_from(path, &cwd),
        Err(_) => path.to_string(),
    }
}

/// [`display_path`] against an explicit base directory.
pub fn display_path_from(path: &str, base: &Path) -> String {
    let candidate = Path::new(path);
    if !candidate.is_absolute() || !candidate.starts_with(base) {
        return path.to_string();
    }

    match diff_paths(candidate, base) {
        Some(relative) => relative.to_string_lossy().into_owned(),
        None => path.to_string(),
    }
}
