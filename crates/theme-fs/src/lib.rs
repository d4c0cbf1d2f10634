//! Filesystem boundary for theme-sync
//!
//! Provides normalized path handling with the local/remote mirror
//! transform, tolerant JSON document loading, canonical JSON output, and
//! glob-based file discovery.

pub mod discovery;
pub mod error;
pub mod io;
pub mod path;
pub mod reader;

pub use discovery::{clean_dir, fetch_files};
pub use error::{Error, Result};
pub use path::{NormalizedPath, REMOTE_ROOT};
pub use reader::{parse_document, read_document};
