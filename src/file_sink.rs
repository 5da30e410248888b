use crate::backup::{self, BackupPolicy};
use crate::clean::CleanPolicy;
use crate::level::Level;
use crate::naming::NamingPolicy;
use crate::sink::LogSink;
use chrono::Utc;
use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;

const DEFAULT_FILE_NAME: &str = "log";
const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024; // 1M bytes
const DEFAULT_MAX_BACKUPS: usize = 10;

type HeaderFn = Box<dyn Fn() -> String + Send + Sync>;

/// Error reported when a write to the file sink is dropped.
#[derive(thiserror::Error, Debug)]
pub enum FileSinkError {
    #[error("failed to create log directory {dir}: {source}")]
    CreateDir { dir: PathBuf, source: io::Error },

    #[error("failed to open log file {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to append to log file: {0}")]
    Write(#[from] io::Error),
}

/// Sink that appends finished lines to a file in a configured directory,
/// rotating it into numbered backups and pruning stale files per policy.
///
/// The open handle, the rotation decision and the clean pass are one
/// shared mutable resource: every write runs check-rotate → clean →
/// append as a single atomic sequence behind one lock, so concurrent
/// callers can never interleave a rotation with a write. The file is
/// opened lazily on the first write and every write is flushed before the
/// call returns.
///
/// I/O failures are reported as the sink's `Err`; the dispatcher isolates
/// them, so a full disk or an unwritable directory costs log lines, never
/// application control flow.
pub struct FileSink {
    dir: PathBuf,
    naming: NamingPolicy,
    backup: BackupPolicy,
    clean: CleanPolicy,
    header: Option<HeaderFn>,
    state: Mutex<FileState>,
}

#[derive(Default)]
struct FileState {
    writer: Option<LineWriter<File>>,
    name: String,
    size: u64,
}

impl FileSink {
    /// File sink with the default policies: changeless name `"log"`,
    /// size rotation at 1 MiB keeping 10 backups, never clean.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSink::builder(dir).build()
    }

    pub fn builder(dir: impl Into<PathBuf>) -> FileSinkBuilder {
        FileSinkBuilder {
            dir: dir.into(),
            naming: NamingPolicy::changeless(DEFAULT_FILE_NAME),
            backup: BackupPolicy::file_size(DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_BACKUPS),
            clean: CleanPolicy::Never,
            header: None,
        }
    }

    fn append(&self, line: &str) -> Result<(), FileSinkError> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        self.append_locked(&mut state, line)
    }

    fn append_locked(&self, state: &mut FileState, line: &str) -> Result<(), FileSinkError> {
        let pending = line.len() as u64 + 1;
        let target = self.naming.file_name(Utc::now());

        // Open on first write, and whenever the naming policy switches
        // (daily date boundary).
        if state.writer.is_none() || state.name != target {
            self.open_target(state, &target)?;
        }

        if self.backup.should_rotate(state.size, pending) {
            // Close before renaming so no buffered bytes are lost and no
            // write can race onto the old handle.
            state.writer = None;
            if let Err(e) = backup::shift_backups(&self.dir, &target, self.backup.max_backups()) {
                // Non-fatal: keep writing to the oversized file.
                eprintln!("fanlog: log file backup failed: {e}");
            }
            self.open_target(state, &target)?;
        }

        if self.clean != CleanPolicy::Never {
            if let Err(e) = self.clean_stale(&target) {
                eprintln!("fanlog: log file clean failed: {e}");
            }
        }

        let writer = state
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "log file is not open"))?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        state.size += pending;
        Ok(())
    }

    fn open_target(&self, state: &mut FileState, name: &str) -> Result<(), FileSinkError> {
        // At most one handle open at a time: close the previous file
        // before touching the next one.
        state.writer = None;
        fs::create_dir_all(&self.dir).map_err(|source| FileSinkError::CreateDir {
            dir: self.dir.clone(),
            source,
        })?;
        let path = self.dir.join(name);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| FileSinkError::Open {
                path: path.clone(),
                source,
            })?;
        let mut size = file.metadata()?.len();
        let mut writer = LineWriter::new(file);
        if size == 0 {
            if let Some(header) = &self.header {
                let banner = header();
                if !banner.is_empty() {
                    writer.write_all(banner.as_bytes())?;
                    writer.write_all(b"\n")?;
                    writer.flush()?;
                    size += banner.len() as u64 + 1;
                }
            }
        }
        state.writer = Some(writer);
        state.name = name.to_string();
        state.size = size;
        Ok(())
    }

    /// Delete stale files in the directory. Every regular file other than
    /// the active one is a candidate; the policy judges its age.
    fn clean_stale(&self, active: &str) -> io::Result<()> {
        let now = SystemTime::now();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy() == active {
                continue;
            }
            let meta = entry.metadata()?;
            if !meta.is_file() {
                continue;
            }
            let age = meta
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();
            if self.clean.should_clean(age) {
                if let Err(e) = fs::remove_file(entry.path()) {
                    eprintln!("fanlog: failed to delete stale log file: {e}");
                }
            }
        }
        Ok(())
    }
}

impl LogSink for FileSink {
    fn emit(&self, _level: Level, _tag: &str, line: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.append(line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(writer) = state.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Best-effort close at shutdown.
        if let Ok(mut state) = self.state.lock() {
            if let Some(writer) = state.writer.as_mut() {
                let _ = writer.flush();
            }
        }
    }
}

/// Builder for [`FileSink`]. Construction does no I/O; the target file is
/// opened on the first write.
pub struct FileSinkBuilder {
    dir: PathBuf,
    naming: NamingPolicy,
    backup: BackupPolicy,
    clean: CleanPolicy,
    header: Option<HeaderFn>,
}

impl FileSinkBuilder {
    pub fn naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn backup(mut self, backup: BackupPolicy) -> Self {
        self.backup = backup;
        self
    }

    pub fn clean(mut self, clean: CleanPolicy) -> Self {
        self.clean = clean;
        self
    }

    /// Hook fired when a brand-new file is created; its banner is written
    /// before the first log line (device/environment info, for example).
    pub fn header<F>(mut self, header: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.header = Some(Box::new(header));
        self
    }

    pub fn build(self) -> FileSink {
        FileSink {
            dir: self.dir,
            naming: self.naming,
            backup: self.backup,
            clean: self.clean,
            header: self.header,
            state: Mutex::new(FileState::default()),
        }
    }
}
