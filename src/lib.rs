#![doc = r#"
surah-rename: give numbered surah recordings canonical file names.

Audio collections of the 114 surahs tend to arrive with names like `003 Sura.mp3`
or `track07.mp3`. This crate finds the first number in each file name, looks the
chapter up in a compiled-in table and renames the file, in place, to

```text
NNN - EnglishName - (ArabicName).ext
```

It powers the `surah-rename` CLI and can be embedded in your own Rust tools.

Quick start: rename everything a glob matches
---------------------------------------------
```rust,no_run
use surah_rename::{rename_pass, RenameParams};

fn main() -> surah_rename::Result<()> {
    let report = rename_pass("/music/quran/*.mp3", &RenameParams::default())?;
    println!(
        "examined={} renamed={} skipped={} errors={}",
        report.examined, report.renamed, report.skipped, report.errors
    );
    Ok(())
}
```

Walk a tree instead, without touching anything
----------------------------------------------
```rust,no_run
use surah_rename::{rename_pass_with, DiscoveryMode, FileOutcome, RenameParams};

fn main() -> surah_rename::Result<()> {
    let params = RenameParams {
        mode: DiscoveryMode::Walk,
        extension: "m4a".to_string(),
        dry_run: true,
        ..RenameParams::default()
    };

    rename_pass_with("/music/quran", &params, |outcome| {
        if let FileOutcome::Renamed { from, to, .. } = outcome {
            println!("{} -> {}", from.display(), to.display());
        }
    })?;
    Ok(())
}
```

Table lookups
-------------
```rust
use surah_rename::{canonical_stem, extract_number, lookup};

let number = extract_number("track07").unwrap();
let chapter = lookup(number).unwrap();
assert_eq!(canonical_stem(chapter), "007 - Al-A'raf - (الأعراف)");
assert!(lookup(150).is_none());
```

Error handling
--------------
Discovery failures (an invalid glob, an unreadable directory) abort a pass and are
returned as `surah_rename::Error`. Per-file problems never abort: they show up as
`FileOutcome::Skipped` or `FileOutcome::Failed` in the `RenameReport`.

Useful modules
--------------
- [`api`] — high-level entry points and the pass report.
- [`core`] — the chapter table, filename parsing and `RenameParams`.
- [`io`] — glob and directory-walk discovery.
- [`types`] — `DiscoveryMode`, `ConflictPolicy`, `SkipReason`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::chapters::{CHAPTER_COUNT, CHAPTERS, Chapter, lookup};
pub use crate::core::filename::{canonical_name, canonical_stem, extract_number};
pub use crate::core::params::RenameParams;
pub use error::{Error, Result};
pub use types::{ConflictPolicy, DiscoveryMode, SkipReason};

// Discovery
pub use io::discovery::{discover, glob_candidates, walk_candidates, walk_root};

// High-level API re-exports
pub use api::{
    FileOutcome, RenameReport, plan_rename, rename_file, rename_pass, rename_pass_with,
};
