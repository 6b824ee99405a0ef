use crate::errors::{EntwineError, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// List git-tracked files under `root`, as paths relative to `root`.
///
/// `root` may be a subdirectory of the repository; index entries outside
/// it are dropped. Entries with non-UTF-8 paths are skipped.
pub fn tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = Repository::discover(root)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| EntwineError::BareRepo {
            path: root.to_path_buf(),
        })?
        .to_path_buf();
    let workdir = workdir.canonicalize().unwrap_or(workdir);

    let index = repo.index()?;
    let mut files = Vec::new();
    for entry in index.iter() {
        let Ok(rel) = std::str::from_utf8(&entry.path) else {
            continue;
        };
        let abs = workdir.join(rel);
        if let Ok(under_root) = abs.strip_prefix(root) {
            files.push(under_root.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
