//! Filename parsing and canonical name construction.
use std::ffi::{OsStr, OsString};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::chapters::Chapter;
use crate::error::{Error, Result};

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern is valid"));

/// Parse the first maximal run of ASCII digits in `name`, which should be a
/// file stem: digits in an extension such as `mp3` would otherwise count.
///
/// Only the first run is considered: if it overflows `u32` the call fails
/// rather than moving on to a later run.
pub fn extract_number(name: &str) -> Result<u32> {
    let digits = DIGIT_RUN
        .find(name)
        .ok_or_else(|| Error::NoNumber {
            name: name.to_string(),
        })?
        .as_str();

    digits.parse::<u32>().map_err(|_| Error::InvalidNumber {
        digits: digits.to_string(),
    })
}

/// Canonical stem for a chapter: `NNN - English - (Arabic)`
pub fn canonical_stem(chapter: &Chapter) -> String {
    format!(
        "{:03} - {} - ({})",
        chapter.number, chapter.english, chapter.arabic
    )
}

/// Canonical file name, keeping the original extension as-is
pub fn canonical_name(chapter: &Chapter, extension: Option<&OsStr>) -> OsString {
    let mut name = OsString::from(canonical_stem(chapter));
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    name
}
