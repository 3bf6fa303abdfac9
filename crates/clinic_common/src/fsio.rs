//! Atomic file write helper (temp file + fsync + rename).

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Write data to a file atomically so the file is never observed in a
/// partial state. The temp file lives in the same directory so the final
/// rename stays on one filesystem.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Write string data atomically.
pub fn atomic_write_str(path: &Path, data: &str) -> io::Result<()> {
    atomic_write(path, data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_content_and_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("db.json");

        atomic_write_str(&path, "{\"slots\": []}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"slots\": []}\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/db.json");

        atomic_write_str(&path, "x").unwrap();
        assert!(path.exists());
    }
}
