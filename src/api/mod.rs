//! High-level, ergonomic library API: rename a single file or run a whole pass
//! over a glob pattern or directory tree, collecting a `RenameReport`. Prefer these
//! entrypoints over the low-level `core` and `io` modules when embedding the renamer.
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::chapters::{Chapter, lookup};
use crate::core::filename::{canonical_name, extract_number};
use crate::core::params::RenameParams;
use crate::error::{Error, Result};
use crate::io::discover;
use crate::types::{ConflictPolicy, SkipReason};

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Renamed, or would have been when `dry_run` is set
    Renamed {
        from: PathBuf,
        to: PathBuf,
        dry_run: bool,
    },
    Skipped {
        path: PathBuf,
        reason: SkipReason,
    },
    Failed {
        path: PathBuf,
        error: String,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Renamed { from, .. } => from,
            FileOutcome::Skipped { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Rename pass report. `examined` counts every candidate, whatever its outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub examined: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl RenameReport {
    fn record(&mut self, outcome: FileOutcome) {
        self.examined += 1;
        match outcome {
            FileOutcome::Renamed { .. } => self.renamed += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.errors += 1,
        }
        self.outcomes.push(outcome);
    }
}

/// Resolve the chapter and canonical destination for `path` without touching
/// the filesystem. The destination stays in the same directory.
///
/// The number is taken from the file stem only, so digits in the extension
/// (`.mp3`, `.m4a`) never count. A bare dotfile such as `.mp3` has no stem.
pub fn plan_rename(path: &Path) -> std::result::Result<(&'static Chapter, PathBuf), SkipReason> {
    let stem = path
        .file_stem()
        .map(|n| n.to_string_lossy())
        .filter(|n| !(n.starts_with('.') && path.extension().is_none()))
        .ok_or(SkipReason::NoNumber)?;

    let number = match extract_number(&stem) {
        Ok(n) => n,
        Err(Error::InvalidNumber { digits }) => return Err(SkipReason::InvalidNumber { digits }),
        Err(_) => return Err(SkipReason::NoNumber),
    };
    let chapter = lookup(number).ok_or(SkipReason::UnknownChapter { number })?;

    let destination = path.with_file_name(canonical_name(chapter, path.extension()));
    if destination == path {
        return Err(SkipReason::AlreadyCanonical);
    }
    Ok((chapter, destination))
}

/// Destinations handed out earlier in a dry-run pass. A real pass claims names
/// on disk; a dry run has to remember them so later files see the same conflicts.
#[derive(Debug, Default)]
struct ClaimedNames(HashSet<PathBuf>);

impl ClaimedNames {
    fn is_taken(&self, destination: &Path) -> bool {
        // symlink_metadata so a dangling link at the destination still counts as taken
        self.0.contains(destination) || fs::symlink_metadata(destination).is_ok()
    }

    fn claim(&mut self, destination: &Path) {
        self.0.insert(destination.to_path_buf());
    }
}

/// Rename one file to its canonical name. Per-file problems are reported in the
/// returned outcome, never as an error.
pub fn rename_file(path: &Path, params: &RenameParams) -> FileOutcome {
    rename_claiming(path, params, &mut ClaimedNames::default())
}

fn rename_claiming(path: &Path, params: &RenameParams, claimed: &mut ClaimedNames) -> FileOutcome {
    let (chapter, destination) = match plan_rename(path) {
        Ok(plan) => plan,
        Err(reason) => {
            debug!("Skipping {:?}: {}", path, reason);
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason,
            };
        }
    };

    if claimed.is_taken(&destination) {
        match params.on_conflict {
            ConflictPolicy::Error => {
                let err = Error::DestinationExists { path: destination };
                warn!("Not renaming {:?}: {}", path, err);
                return FileOutcome::Failed {
                    path: path.to_path_buf(),
                    error: err.to_string(),
                };
            }
            ConflictPolicy::Skip => {
                debug!("Skipping {:?}: {:?} already exists", path, destination);
                return FileOutcome::Skipped {
                    path: path.to_path_buf(),
                    reason: SkipReason::DestinationExists,
                };
            }
            ConflictPolicy::Overwrite => {
                info!("Overwriting existing {:?}", destination);
            }
        }
    }

    if params.dry_run {
        claimed.claim(&destination);
        return FileOutcome::Renamed {
            from: path.to_path_buf(),
            to: destination,
            dry_run: true,
        };
    }

    match fs::rename(path, &destination) {
        Ok(()) => {
            debug!("Chapter {} -> {:?}", chapter.number, destination);
            FileOutcome::Renamed {
                from: path.to_path_buf(),
                to: destination,
                dry_run: false,
            }
        }
        Err(e) => {
            let err = Error::from(e);
            warn!("Error renaming {:?}: {}", path, err);
            FileOutcome::Failed {
                path: path.to_path_buf(),
                error: err.to_string(),
            }
        }
    }
}

/// Run a full pass over `source`, calling `on_outcome` as each file is handled.
/// Discovery errors abort the pass before anything is renamed.
pub fn rename_pass_with<F>(
    source: &str,
    params: &RenameParams,
    mut on_outcome: F,
) -> Result<RenameReport>
where
    F: FnMut(&FileOutcome),
{
    let candidates = discover(source, params)?;
    info!(
        "Starting rename pass over {} file(s) (mode: {}, on conflict: {}, dry run: {})",
        candidates.len(),
        params.mode,
        params.on_conflict,
        params.dry_run
    );

    let mut report = RenameReport::default();
    let mut claimed = ClaimedNames::default();
    for path in candidates {
        let outcome = rename_claiming(&path, params, &mut claimed);
        on_outcome(&outcome);
        report.record(outcome);
    }

    info!("Rename pass complete!");
    info!("Examined: {}", report.examined);
    info!("Renamed: {}", report.renamed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);

    Ok(report)
}

/// Run a full pass over `source` and return the report
pub fn rename_pass(source: &str, params: &RenameParams) -> Result<RenameReport> {
    rename_pass_with(source, params, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_plan_rename_examples() {
        let (chapter, to) = plan_rename(Path::new("/music/003 Sura.mp3")).unwrap();
        assert_eq!(chapter.number, 3);
        assert_eq!(to, PathBuf::from("/music/003 - Ali-Imran - (آل عمران).mp3"));

        let (_, to) = plan_rename(Path::new("track07.mp3")).unwrap();
        assert_eq!(to, PathBuf::from("007 - Al-A'raf - (الأعراف).mp3"));
    }

    #[test]
    fn test_plan_rename_skip_reasons() {
        assert_eq!(
            plan_rename(Path::new("notes.txt")).unwrap_err(),
            SkipReason::NoNumber
        );
        assert_eq!(
            plan_rename(Path::new("150_extra.mp3")).unwrap_err(),
            SkipReason::UnknownChapter { number: 150 }
        );
        assert_eq!(
            plan_rename(Path::new("000.mp3")).unwrap_err(),
            SkipReason::UnknownChapter { number: 0 }
        );
        assert_eq!(
            plan_rename(Path::new("001 - Al-Fathiha - (الفاتحة).mp3")).unwrap_err(),
            SkipReason::AlreadyCanonical
        );
    }

    #[test]
    fn test_plan_rename_ignores_digits_in_extension() {
        assert_eq!(
            plan_rename(Path::new("intro.mp3")).unwrap_err(),
            SkipReason::NoNumber
        );
        assert_eq!(
            plan_rename(Path::new("/music/Al-Fatiha.mp3")).unwrap_err(),
            SkipReason::NoNumber
        );
        assert_eq!(
            plan_rename(Path::new("سورة ٣.mp3")).unwrap_err(),
            SkipReason::NoNumber
        );
        assert_eq!(
            plan_rename(Path::new("/music/.mp3")).unwrap_err(),
            SkipReason::NoNumber
        );

        let (chapter, to) = plan_rename(Path::new("chapter 9.m4a")).unwrap();
        assert_eq!(chapter.number, 9);
        assert_eq!(to, PathBuf::from("009 - At-Taubah - (التوبة).m4a"));
    }

    #[test]
    fn test_plan_rename_only_reads_file_name() {
        let (chapter, to) = plan_rename(Path::new("/disc 2/track 05.mp3")).unwrap();
        assert_eq!(chapter.number, 5);
        assert_eq!(to.parent().unwrap(), Path::new("/disc 2"));
    }

    #[test]
    fn test_rename_file_moves_within_directory() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("track07.mp3");
        File::create(&from).unwrap();

        let outcome = rename_file(&from, &RenameParams::default());
        let to = dir.path().join("007 - Al-A'raf - (الأعراف).mp3");
        assert_eq!(
            outcome,
            FileOutcome::Renamed {
                from: from.clone(),
                to: to.clone(),
                dry_run: false,
            }
        );
        assert!(!from.exists());
        assert!(to.exists());
    }

    #[test]
    fn test_rename_file_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("2.mp3");
        File::create(&from).unwrap();

        let params = RenameParams {
            dry_run: true,
            ..RenameParams::default()
        };
        let outcome = rename_file(&from, &params);
        assert!(matches!(outcome, FileOutcome::Renamed { dry_run: true, .. }));
        assert!(from.exists());
        assert!(!dir.path().join("002 - Al-Baqarah - (البقرة).mp3").exists());
    }

    #[test]
    fn test_dry_run_pass_sees_its_own_claims() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("001.mp3");
        let second = dir.path().join("1 copy.mp3");
        File::create(&first).unwrap();
        File::create(&second).unwrap();

        let params = RenameParams {
            dry_run: true,
            ..RenameParams::default()
        };
        let mut claimed = ClaimedNames::default();
        let outcome = rename_claiming(&first, &params, &mut claimed);
        assert!(matches!(outcome, FileOutcome::Renamed { dry_run: true, .. }));

        let outcome = rename_claiming(&second, &params, &mut claimed);
        assert!(matches!(outcome, FileOutcome::Failed { .. }));
        assert!(first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_rename_file_conflict_policies() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("track 1.mp3");
        let taken = dir.path().join("001 - Al-Fathiha - (الفاتحة).mp3");
        File::create(&from).unwrap();
        fs::write(&taken, b"keep").unwrap();

        let outcome = rename_file(&from, &RenameParams::default());
        assert!(matches!(outcome, FileOutcome::Failed { .. }));
        assert!(from.exists());

        let params = RenameParams {
            on_conflict: ConflictPolicy::Skip,
            ..RenameParams::default()
        };
        let outcome = rename_file(&from, &params);
        assert_eq!(
            outcome,
            FileOutcome::Skipped {
                path: from.clone(),
                reason: SkipReason::DestinationExists,
            }
        );
        assert_eq!(fs::read(&taken).unwrap(), b"keep");

        let params = RenameParams {
            on_conflict: ConflictPolicy::Overwrite,
            ..RenameParams::default()
        };
        let outcome = rename_file(&from, &params);
        assert!(matches!(outcome, FileOutcome::Renamed { .. }));
        assert!(!from.exists());
        assert!(fs::read(&taken).unwrap().is_empty());
    }

    #[test]
    fn test_rename_file_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("005.mp3");

        let outcome = rename_file(&from, &RenameParams::default());
        assert!(matches!(outcome, FileOutcome::Failed { .. }));
        assert_eq!(outcome.path(), from.as_path());
    }

    #[test]
    fn test_report_counts() {
        let mut report = RenameReport::default();
        report.record(FileOutcome::Skipped {
            path: PathBuf::from("a"),
            reason: SkipReason::NoNumber,
        });
        report.record(FileOutcome::Failed {
            path: PathBuf::from("b"),
            error: "denied".to_string(),
        });
        report.record(FileOutcome::Renamed {
            from: PathBuf::from("c"),
            to: PathBuf::from("d"),
            dry_run: false,
        });
        assert_eq!(report.examined, 3);
        assert_eq!(report.renamed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 1);
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = FileOutcome::Skipped {
            path: PathBuf::from("150_extra.mp3"),
            reason: SkipReason::UnknownChapter { number: 150 },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"]["kind"], "unknown_chapter");
        assert_eq!(json["reason"]["number"], 150);
    }
}
