use clap::Parser;

use surah_rename::core::params::DEFAULT_EXTENSION;
use surah_rename::{ConflictPolicy, DiscoveryMode};

#[derive(Parser)]
#[command(
    name = "surah-rename",
    version,
    about = "Rename numbered surah audio files to 'NNN - English - (Arabic).ext'"
)]
pub struct CliArgs {
    /// Glob pattern (e.g. '*.mp3') or, in walk mode, a directory or a pattern inside one
    pub source: String,

    /// How candidates are found: expand SOURCE as a glob, or walk its directory recursively
    #[arg(short, long, value_enum, default_value_t = DiscoveryMode::Glob)]
    pub mode: DiscoveryMode,

    /// Audio extension to match in walk mode (case-insensitive)
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// What to do when the canonical name is already taken
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Error)]
    pub on_conflict: ConflictPolicy,

    /// Print what would be renamed without renaming anything
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the pass report as JSON instead of one line per file
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
