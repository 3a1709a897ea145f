//! Candidate discovery. A pass uses exactly one of the two modes:
//!
//! - glob: expand `source` as a shell-style pattern and keep regular files;
//! - walk: recursively walk a root directory and keep regular files whose
//!   name ends with the configured extension, case-insensitively.
//!
//! Both collect the full candidate list up front so a pass never renames
//! inside a directory it is still reading.
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::core::params::RenameParams;
use crate::error::{Error, Result};
use crate::types::DiscoveryMode;

/// Enumerate candidates for `source` using the mode in `params`
pub fn discover(source: &str, params: &RenameParams) -> Result<Vec<PathBuf>> {
    let candidates = match params.mode {
        DiscoveryMode::Glob => glob_candidates(source)?,
        DiscoveryMode::Walk => {
            let root = walk_root(source)?;
            walk_candidates(&root, &params.walk_suffix())?
        }
    };
    debug!(
        "Discovered {} candidate(s) for {:?} in {} mode",
        candidates.len(),
        source,
        params.mode
    );
    Ok(candidates)
}

/// Directory a walk starts from: `source` itself when it is a directory,
/// otherwise its parent, and the working directory when there is no parent
/// (e.g. a bare `*.mp3`).
pub fn walk_root(source: &str) -> Result<PathBuf> {
    let path = Path::new(source);
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Ok(std::env::current_dir()?),
    }
}

/// All regular files under `root` whose lowercased name ends with `suffix`.
/// Any unreadable entry aborts the walk.
pub fn walk_candidates(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let path = source
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                return Err(Error::Traversal { path, source });
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if name.ends_with(suffix) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// All regular files matching the glob `pattern`
pub fn glob_candidates(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
