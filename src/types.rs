//! Shared types and enums used across the renamer.
//! Includes `DiscoveryMode`, `ConflictPolicy` and the `SkipReason` attached to
//! files a pass leaves untouched.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a pass turns its `source` argument into candidate files.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DiscoveryMode {
    /// Expand `source` as a shell-style glob pattern
    #[default]
    Glob,
    /// Walk the directory named by `source` (or its parent) recursively, filtering by extension
    Walk,
}

impl std::fmt::Display for DiscoveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscoveryMode::Glob => write!(f, "glob"),
            DiscoveryMode::Walk => write!(f, "walk"),
        }
    }
}

/// What to do when the canonical name is already taken by another file.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    #[default]
    Error,
    Skip,
    Overwrite,
}

impl std::fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictPolicy::Error => write!(f, "error"),
            ConflictPolicy::Skip => write!(f, "skip"),
            ConflictPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    NoNumber,
    InvalidNumber { digits: String },
    UnknownChapter { number: u32 },
    AlreadyCanonical,
    DestinationExists,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoNumber => write!(f, "no number in filename"),
            SkipReason::InvalidNumber { digits } => write!(f, "unusable number {}", digits),
            SkipReason::UnknownChapter { number } => write!(f, "no chapter {}", number),
            SkipReason::AlreadyCanonical => write!(f, "already named"),
            SkipReason::DestinationExists => write!(f, "destination exists"),
        }
    }
}
