//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `base` with `/` separators.
///
/// Both paths are compared component-wise, so a path outside `base` gets
/// leading `..` components. When one path is absolute and the other is not,
/// `path` is only cleaned of `.` components.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use glot_extract::utils::relative_path;
///
/// assert_eq!(relative_path(Path::new("/repo"), Path::new("/repo/src/app.js")), "src/app.js");
/// assert_eq!(relative_path(Path::new("/repo"), Path::new("/lib/i18n.js")), "../lib/i18n.js");
/// assert_eq!(relative_path(Path::new("/repo"), Path::new("./src/app.js")), "src/app.js");
/// ```
pub fn relative_path(base: &Path, path: &Path) -> String {
    let relative = if path.is_absolute() == base.is_absolute() {
        diff_paths(path, base)
    } else {
        path.to_path_buf()
    };

    if relative.has_root() {
        return relative.to_string_lossy().into_owned();
    }

    relative
        .components()
        .filter(|c| *c != Component::CurDir)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn diff_paths(path: &Path, base: &Path) -> PathBuf {
    let path: Vec<Component> = path
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    let base: Vec<Component> = base
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();

    let common = path
        .iter()
        .zip(base.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push("..");
    }
    for component in &path[common..] {
        relative.push(component.as_os_str());
    }
    relative
}
