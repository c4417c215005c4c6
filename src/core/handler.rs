//! Handler trait for log output destinations

use super::{error::Result, verbosity::Verbosity};

/// A destination-specific writer for formatted log entries.
///
/// Each handler owns a minimum verbosity threshold and must treat a write
/// below it as a no-op. Accepted entries are made visible immediately
/// (flushed where the destination buffers). Write failures propagate to
/// the caller; handlers do not swallow I/O errors.
pub trait Handler: Send {
    /// Write a fully formatted entry at the given verbosity.
    fn write(&mut self, entry: &str, verbosity: Verbosity) -> Result<()>;

    fn name(&self) -> &str;
}
