//! Request-path mapping and path-safety checks for web assets.

use std::path::{Component, Path, PathBuf};

/// Known asset directories inside the bundled `web/` tree.
const ASSET_DIRS: [&str; 4] = ["css", "js", "plugins", "scss"];

/// Flattens an arbitrary request path onto the bundled `web/...` layout by
/// cutting at the first known asset directory. Paths without one map to
/// `web/<file name>`.
pub fn flatten(file_name: &str) -> String {
    let parts: Vec<&str> = file_name.split('/').collect();
    match parts.iter().position(|part| ASSET_DIRS.contains(part)) {
        Some(i) => {
            let mut out = String::from("web");
            for part in &parts[i..] {
                out.push('/');
                out.push_str(part);
            }
            out
        }
        None => format!("web/{}", parts.last().copied().unwrap_or_default()),
    }
}

/// Validates that `file_name` stays inside a containing directory: rejects
/// empty names, absolute paths, and parent-directory components. Returns the
/// normalized relative path.
pub fn safe_relative(file_name: &str) -> Option<PathBuf> {
    if file_name.is_empty() {
        return None;
    }
    let mut out = PathBuf::new();
    for component in Path::new(file_name).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out.as_os_str().is_empty() {
        None
    } else {
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_cuts_at_known_asset_dir() {
        assert_eq!(flatten("theme/css/main.css"), "web/css/main.css");
        assert_eq!(flatten("a/b/js/app.js"), "web/js/app.js");
        assert_eq!(flatten("plugins/extra/chart.js"), "web/plugins/extra/chart.js");
    }

    #[test]
    fn flatten_without_asset_dir_keeps_file_name() {
        assert_eq!(flatten("network.html"), "web/network.html");
        assert_eq!(flatten("pages/network.html"), "web/network.html");
    }

    #[test]
    fn safe_relative_accepts_plain_and_nested() {
        assert_eq!(
            safe_relative("network.html"),
            Some(PathBuf::from("network.html"))
        );
        assert_eq!(
            safe_relative("css/./main.css"),
            Some(PathBuf::from("css/main.css"))
        );
    }

    #[test]
    fn safe_relative_rejects_escapes() {
        assert!(safe_relative("../evil.html").is_none());
        assert!(safe_relative("css/../../evil.html").is_none());
        assert!(safe_relative("/etc/passwd").is_none());
        assert!(safe_relative("").is_none());
        assert!(safe_relative(".").is_none());
    }
}
