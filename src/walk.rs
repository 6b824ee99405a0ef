use crate::errors::Result;
use crate::git;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File extensions considered part of the JS/TS family.
pub const EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Check whether a path carries a JS/TS source extension.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
}

/// Discover JS/TS source files under `root`, returned as sorted paths
/// relative to `root`.
///
/// - Prefers the git index; falls back to a directory walk when `root` is
///   not inside a repository (or `untracked` is set)
/// - The walk respects `.gitignore`
/// - Applies include/exclude glob patterns
pub fn discover_files(
    root: &Path,
    include_patterns: &[String],
    exclude_patterns: &[String],
    untracked: bool,
) -> Result<Vec<PathBuf>> {
    let exclude_set = build_globset(exclude_patterns)?;
    let include_set = if include_patterns.is_empty() {
        None
    } else {
        Some(build_globset(include_patterns)?)
    };

    let candidates = if untracked {
        walk_files(root)
    } else {
        match git::tracked_files(root) {
            Ok(tracked) => tracked
                .into_iter()
                // the index can hold entries deleted from disk
                .filter(|rel| root.join(rel).is_file())
                .collect(),
            Err(err) => {
                tracing::debug!(%err, "git listing unavailable, walking directory");
                walk_files(root)
            }
        }
    };

    let mut files: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|rel| has_source_extension(rel))
        .filter(|rel| !exclude_set.is_match(rel))
        // Also check just the filename for patterns like *.test.ts
        .filter(|rel| {
            rel.file_name()
                .is_none_or(|name| !exclude_set.is_match(Path::new(name)))
        })
        .filter(|rel| {
            include_set
                .as_ref()
                .is_none_or(|include| include.is_match(rel))
        })
        .collect();

    // Sort for deterministic output
    files.sort();

    Ok(files)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Walk the tree under `root`, collecting files relative to `root`.
fn walk_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path);
        files.push(relative.to_path_buf());
    }
    files
}
