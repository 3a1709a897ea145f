use serde::{Deserialize, Serialize};

use crate::types::{ConflictPolicy, DiscoveryMode};

/// Default audio extension matched in walk mode
pub const DEFAULT_EXTENSION: &str = "mp3";

/// Rename pass parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameParams {
    pub mode: DiscoveryMode,
    /// Extension (without the dot) a walked file must end with, compared case-insensitively
    pub extension: String,
    pub on_conflict: ConflictPolicy,
    /// If true, compute and report destinations without renaming anything
    pub dry_run: bool,
}

impl Default for RenameParams {
    fn default() -> Self {
        Self {
            mode: DiscoveryMode::Glob,
            extension: DEFAULT_EXTENSION.to_string(),
            on_conflict: ConflictPolicy::Error,
            dry_run: false,
        }
    }
}

impl RenameParams {
    /// Suffix a file name must end with in walk mode, lowercased and dot-prefixed
    pub fn walk_suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.').to_lowercase())
    }
}
