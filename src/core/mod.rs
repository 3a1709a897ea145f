//! Core building blocks: the chapter table, filename parsing and pass
//! parameters. These are pure primitives consumed by the high-level `api` module.
pub mod chapters;
pub mod filename;
pub mod params;
