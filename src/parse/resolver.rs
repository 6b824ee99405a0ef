use crate::walk;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Normalize a relative import specifier against the importing file's
/// directory. Bare specifiers (npm packages, node builtins) are external
/// and return None.
pub fn normalize_specifier(source_file: &Path, specifier: &str) -> Option<PathBuf> {
    if !specifier.starts_with('.') {
        return None;
    }
    let base = source_file.parent().unwrap_or(Path::new(""));
    Some(normalize_path(&base.join(specifier)))
}

/// Collapse `.` and `..` components lexically, without touching the
/// filesystem. Leading `..` components that escape the root are kept, so
/// the result simply fails to match any discovered file.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(Component::Normal(_))) {
                    parts.pop();
                } else {
                    parts.push(component);
                }
            }
            other => parts.push(other),
        }
    }
    parts.into_iter().collect()
}

/// Resolve a normalized import path against the discovered file set.
///
/// Tries the path as written first (specifiers carrying an extension),
/// then with each JS/TS extension appended, then as a directory with an
/// `index.*` file. Returns None when the target is not part of the scan.
pub fn resolve_target(normalized: &Path, files: &HashSet<PathBuf>) -> Option<PathBuf> {
    if files.contains(normalized) {
        return Some(normalized.to_path_buf());
    }

    for ext in walk::EXTENSIONS {
        let mut with_ext = normalized.as_os_str().to_os_string();
        with_ext.push(format!(".{ext}"));
        let candidate = PathBuf::from(with_ext);
        if files.contains(&candidate) {
            return Some(candidate);
        }
    }

    for ext in walk::EXTENSIONS {
        let candidate = normalized.join(format!("index.{ext}"));
        if files.contains(&candidate) {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file_set(paths: &[&str]) -> HashSet<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn sibling_import() {
        let normalized = normalize_specifier(Path::new("src/a.ts"), "./b.ts").unwrap();
        assert_eq!(normalized, PathBuf::from("src/b.ts"));
    }

    #[test]
    fn parent_directory_import() {
        let normalized = normalize_specifier(Path::new("src/sub/a.ts"), "../util.ts").unwrap();
        assert_eq!(normalized, PathBuf::from("src/util.ts"));
    }

    #[test]
    fn nested_dot_components_collapse() {
        let normalized =
            normalize_specifier(Path::new("src/a.ts"), "./x/../y/./z.ts").unwrap();
        assert_eq!(normalized, PathBuf::from("src/y/z.ts"));
    }

    #[test]
    fn bare_specifier_is_external() {
        assert_eq!(normalize_specifier(Path::new("src/a.ts"), "react"), None);
        assert_eq!(normalize_specifier(Path::new("src/a.ts"), "node:fs"), None);
    }

    #[test]
    fn escaping_the_root_stays_unresolved() {
        let normalized = normalize_specifier(Path::new("a.ts"), "../outside.ts").unwrap();
        assert_eq!(normalized, PathBuf::from("../outside.ts"));
        assert_eq!(resolve_target(&normalized, &file_set(&["outside.ts"])), None);
    }

    #[test]
    fn resolves_exact_path() {
        let files = file_set(&["src/b.ts"]);
        assert_eq!(
            resolve_target(Path::new("src/b.ts"), &files),
            Some(PathBuf::from("src/b.ts"))
        );
    }

    #[test]
    fn resolves_extensionless_specifier() {
        let files = file_set(&["src/b.ts"]);
        assert_eq!(
            resolve_target(Path::new("src/b"), &files),
            Some(PathBuf::from("src/b.ts"))
        );
    }

    #[test]
    fn resolves_directory_index() {
        let files = file_set(&["src/lib/index.ts"]);
        assert_eq!(
            resolve_target(Path::new("src/lib"), &files),
            Some(PathBuf::from("src/lib/index.ts"))
        );
    }

    #[test]
    fn unknown_target_is_skipped() {
        let files = file_set(&["src/b.ts"]);
        assert_eq!(resolve_target(Path::new("src/missing"), &files), None);
    }
}
