//! Path utilities
//!
//! Paths inside the tree are kept as component sequences from the root;
//! an empty sequence is the root itself.

pub const SEPARATOR: char = '/';

/// Resolve `path` against `cwd` into an absolute, dot-free component list.
///
/// `..` at the root stays at the root. No existence checks are made.
pub fn normalize_path(path: &str, cwd: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = if path.starts_with(SEPARATOR) {
        Vec::new()
    } else {
        cwd.to_vec()
    };

    for part in path.split(SEPARATOR).filter(|p| !p.is_empty()) {
        match part {
            "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part.to_string()),
        }
    }
    resolved
}

/// Render components back to an absolute path string.
pub fn render_path(components: &[String]) -> String {
    if components.is_empty() {
        return SEPARATOR.to_string();
    }
    let mut out = String::new();
    for part in components {
        out.push(SEPARATOR);
        out.push_str(part);
    }
    out
}
