//! Rotating log file writer with size-based rotation and backup retention.
//!
//! Used as the `tracing-subscriber` fmt writer when a `log_file` is
//! configured, so that long-running or frequently launched pickers never grow
//! a log file without bound.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Maximum file size before rotation (10 MiB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Before each write the current file size is checked. Once it exceeds the
/// limit the file is renamed to `<name>.<timestamp>` and a fresh file is
/// started; backups beyond the retention limit are removed, oldest first.
///
/// `&FileWriter` implements [`io::Write`], so an `Arc<FileWriter>` can be
/// handed straight to `tracing_subscriber::fmt::layer().with_writer(..)`.
///
/// # Example
///
/// ```rust
/// use quickpick::observability::FileWriter;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir()?;
/// let writer = FileWriter::new(dir.path().join("quickpick.log"));
/// writeln!(&writer, "picker started")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened lazily on first write.
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer rotating at 10 MiB and keeping 3 backups.
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with explicit rotation limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("log writer mutex poisoned: {e}")))
    }

    fn write_bytes(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self.lock()?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file is not open"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    /// Closes the handle and rotates when the file has grown past the limit.
    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<timestamp>` and prunes backups.
    ///
    /// Timestamps sort lexicographically in creation order.
    fn rotate_files(&self) -> io::Result<()> {
        let stamp = Local::now().format("%Y%m%dT%H%M%S%.6f");
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }

        self.cleanup_old_backups()
    }

    /// Lists backup files, newest first.
    pub(crate) fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log file name is not valid UTF-8"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        backups.sort_unstable_by(|a, b| b.cmp(a));
        Ok(backups)
    }

    /// Removes backups beyond the retention limit, ignoring individual failures.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        for old_backup in self.backups()?.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }
        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.lock()?.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_file_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pick.log");
        let writer = FileWriter::new(path.clone());
        assert!(!path.exists());

        writeln!(&writer, "hello").unwrap();
        (&writer).flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pick.log");
        fs::write(&path, "old\n").unwrap();

        let writer = FileWriter::new(path.clone());
        writeln!(&writer, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pick.log");
        let writer = FileWriter::with_limits(path.clone(), 64, 3);

        for i in 0..40 {
            writeln!(&writer, "line {i:03} padding padding padding").unwrap();
        }

        let backups = writer.backups().unwrap();
        assert!(!backups.is_empty());
        assert!(backups.len() <= 3, "{backups:?}");
        // the live file never grows far past the limit
        assert!(fs::metadata(&path).unwrap().len() < 128);
    }

    #[test]
    fn unrelated_files_are_not_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("other.log.1"), "x").unwrap();
        fs::write(dir.path().join("pick.log.20240101T000000.000000"), "x").unwrap();

        let writer = FileWriter::new(dir.path().join("pick.log"));
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert!(backups[0].ends_with("pick.log.20240101T000000.000000"));
    }
}
