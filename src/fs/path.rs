//! Path utilities
//!
//! Pure string-level path math for the virtual filesystem. Paths are
//! slash-separated and absolute; no charset validation is performed.

/// Normalize a path: strip a single trailing slash (root excepted) and map
/// the empty string to `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = if path != "/" && path.ends_with('/') {
        &path[..path.len() - 1]
    } else {
        path
    };
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Resolve `target` against `current_dir`.
///
/// Absolute targets ignore `current_dir` entirely. Relative targets are
/// folded segment by segment: `..` pops the accumulated segments (a no-op
/// at root), `.` is dropped, anything else is appended.
pub fn resolve_path(current_dir: &str, target: &str) -> String {
    if target.starts_with('/') {
        return normalize_path(target);
    }

    let mut parts: Vec<&str> = current_dir.split('/').filter(|p| !p.is_empty()).collect();
    for part in target.split('/').filter(|p| !p.is_empty()) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    normalize_path(&format!("/{}", parts.join("/")))
}
