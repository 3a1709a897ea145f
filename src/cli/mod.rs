//! Command Line Interface (CLI) layer for surah-rename.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a rename pass. It wires
//! user-provided options to the library functionality exposed via
//! `surah_rename::api`.
//!
//! If you are embedding the renamer into another application, prefer using
//! the high-level `surah_rename::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
