//! File system helpers

mod local;
mod scan;

pub use local::{atomic_write, hash_content, hash_file};
pub use scan::{scan_content, CONTENT_EXTENSIONS};
