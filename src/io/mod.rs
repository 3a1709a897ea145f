//! I/O layer: turning a `source` argument into candidate files.
//! Provides directory-walk and glob discovery; renaming itself lives in `api`.
pub mod discovery;
pub use discovery::{discover, glob_candidates, walk_candidates, walk_root};
