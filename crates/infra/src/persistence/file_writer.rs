// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use line_ratio_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        Self::write_via_temp(path, data)
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        log::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn write_via_temp(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = path.parent().ok_or_else(|| std::io::Error::other("path has no parent"))?;

        // PID + nanos keeps the temp name unique without a retry loop.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        if let Err(err) = w.write_all(data).and_then(|()| w.flush()) {
            drop(w);
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        let _ = w.get_ref().sync_all();
        drop(w);

        if let Err(err) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use line_ratio_shared_kernel::ErrorKind;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn atomic_write_replaces_existing_content() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, "old").expect("seed");

        FileWriter::atomic_write(&path, b"{}").expect("writes");

        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "{}");
        let leftovers = std::fs::read_dir(dir.path()).expect("list").count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn missing_directory_is_an_output_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("no/such/dir/report.json");

        let err = FileWriter::atomic_write(&path, b"{}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Output);
    }
}
