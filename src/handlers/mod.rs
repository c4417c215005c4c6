//! Handler implementations

pub mod file;
pub mod socket;
pub mod stream;
pub mod syslog;

pub use file::{FileHandler, FileMode};
pub use socket::{SocketFamily, SocketHandler, SocketKind};
pub use stream::{StderrHandler, StdoutHandler, StreamHandler};
pub use syslog::{Facility, SyslogHandler};

// Re-export the trait next to its implementations
pub use crate::core::Handler;
