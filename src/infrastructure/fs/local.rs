//! Local file system operations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

/// Write content to a file atomically
///
/// The content goes to a temporary file in the destination directory, is
/// flushed to disk, then renamed over `path`. Readers never observe a
/// partially written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// SHA-256 of `content`, prefixed with `sha256:`
pub fn hash_content(content: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(content))
}

/// SHA-256 of a file's content
pub fn hash_file(path: &Path) -> io::Result<String> {
    fs::read(path).map(|bytes| hash_content(&bytes))
}
