//! Rotating file writer with size-based rotation and backup retention.
//!
//! Once the log grows past a size threshold it is renamed to a timestamped
//! backup and a fresh file is started. Only the newest backups are kept, so
//! disk usage stays bounded.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const MAX_BACKUP_FILES: usize = 3;

/// Append-only log file that rotates itself.
///
/// Writes go through `&FileWriter`, so one instance can serve as the
/// [`MakeWriter`] of a `tracing_subscriber` fmt layer.
pub struct FileWriter {
    file_path: PathBuf,
    max_size: u64,
    max_backups: usize,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Writer rotating at 10 MiB and keeping 3 backups.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_size: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_size,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn write_record(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_prefix(&self) -> String {
        let file_name = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("log");
        format!("{file_name}.")
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = Utc::now().format("%Y%m%dT%H%M%S%.3f");
        let backup_path = self
            .file_path
            .with_file_name(format!("{}{timestamp}", self.backup_prefix()));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = self.backup_prefix();

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamped names sort chronologically; newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_record(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = &'a Self;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("test.log."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("test.log"));

        (&writer).write_all(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        let contents = fs::read_to_string(writer.file_path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn rotates_past_the_size_limit_and_keeps_few_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::with_limits(dir.path().join("test.log"), 8, 2);

        for _ in 0..6 {
            (&writer).write_all(b"0123456789\n").unwrap();
            std::thread::sleep(std::time::Duration::from_millis(5));
        }

        assert!(backups_in(dir.path()) <= 2);
        assert!(backups_in(dir.path()) >= 1);
        let contents = fs::read_to_string(writer.file_path()).unwrap();
        assert_eq!(contents, "0123456789\n");
    }
}
