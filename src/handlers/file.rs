//! File handler implementation

use crate::core::{Encoding, EncodingPolicy, Handler, LoggerError, Result, Verbosity};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// How the log file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Append to the file, creating it if missing. The default.
    #[default]
    Append,
    /// Truncate any existing contents, creating the file if missing.
    Truncate,
}

/// Handler that owns a log file.
///
/// The file is opened eagerly at construction; an unopenable path fails
/// construction with the offending path in the error. Writes are
/// line-buffered in spirit: every accepted entry is flushed immediately,
/// and whatever remains buffered is flushed again when the handler drops.
#[derive(Debug)]
pub struct FileHandler {
    writer: BufWriter<File>,
    path: PathBuf,
    encoding: Encoding,
    policy: EncodingPolicy,
    min_verbosity: Verbosity,
}

impl FileHandler {
    /// Open `path` in append mode with UTF-8 strict encoding.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_mode(path, FileMode::Append)
    }

    /// Open `path` with an explicit [`FileMode`].
    pub fn with_mode(path: impl Into<PathBuf>, mode: FileMode) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.create(true).write(true);
        match mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.truncate(true),
        };
        let file = options
            .open(&path)
            .map_err(|e| LoggerError::file_handler(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            encoding: Encoding::Utf8,
            policy: EncodingPolicy::Strict,
            min_verbosity: Verbosity::Info,
        })
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn with_encoding_policy(mut self, policy: EncodingPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_min_verbosity(mut self, min_verbosity: Verbosity) -> Self {
        self.min_verbosity = min_verbosity;
        self
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn min_verbosity(&self) -> Verbosity {
        self.min_verbosity
    }
}

impl Handler for FileHandler {
    fn write(&mut self, entry: &str, verbosity: Verbosity) -> Result<()> {
        if verbosity < self.min_verbosity {
            return Ok(());
        }
        let bytes = self.encoding.encode(entry, self.policy)?;
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileHandler {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file before the descriptor
        // closes.
        let _ = self.writer.flush();
    }
}
