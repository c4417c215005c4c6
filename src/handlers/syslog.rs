//! Syslog handler implementation
//!
//! Frames entries with the RFC 5424 PRI field and ships them as UDP
//! datagrams, the classic `/etc/syslog` wire convention: `<priority>`
//! followed by the message and a single NUL byte, where
//! `priority = facility * 8 + severity`.

use super::socket::SocketHandler;
use crate::core::{Encoding, EncodingPolicy, Handler, Result, Verbosity};

/// Syslog facility codes (RFC 5424).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facility {
    /// kernel messages.
    Kernel = 0,
    /// user-level messages. The default.
    #[default]
    User = 1,
    /// mail system.
    Mail = 2,
    /// system daemons.
    Daemon = 3,
    /// security/authorization messages.
    Auth = 4,
    /// messages generated internally by syslogd.
    Syslog = 5,
    /// line printer subsystem.
    Lpr = 6,
    /// network news subsystem.
    News = 7,
    /// UUCP subsystem.
    Uucp = 8,
    /// clock daemon.
    Cron = 9,
    /// security/authorization messages (private).
    AuthPriv = 10,
    /// FTP daemon.
    Ftp = 11,
    /// NTP subsystem.
    Ntp = 12,
    /// log audit.
    Audit = 13,
    /// log alert.
    Alert = 14,
    /// clock daemon (note 2).
    Clock = 15,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Handler speaking the syslog datagram protocol over UDP/IPv4.
///
/// # Example
///
/// ```no_run
/// use sinklog::handlers::{Facility, SyslogHandler};
///
/// let handler = SyslogHandler::localhost()
///     .expect("no syslog daemon")
///     .with_facility(Facility::Daemon);
/// ```
pub struct SyslogHandler {
    socket: SocketHandler,
    facility: Facility,
}

impl SyslogHandler {
    /// The registered syslog port.
    pub const DEFAULT_PORT: u16 = 514;

    /// Connect to a syslog receiver at `(host, port)`.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        Ok(Self {
            socket: SocketHandler::udp(host, port)?,
            facility: Facility::User,
        })
    }

    /// Connect to the local syslog daemon on the default port.
    pub fn localhost() -> Result<Self> {
        Self::new("localhost", Self::DEFAULT_PORT)
    }

    #[must_use]
    pub fn with_facility(mut self, facility: Facility) -> Self {
        self.facility = facility;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.socket = self.socket.with_encoding(encoding);
        self
    }

    #[must_use]
    pub fn with_encoding_policy(mut self, policy: EncodingPolicy) -> Self {
        self.socket = self.socket.with_encoding_policy(policy);
        self
    }

    #[must_use]
    pub fn with_min_verbosity(mut self, min_verbosity: Verbosity) -> Self {
        self.socket = self.socket.with_min_verbosity(min_verbosity);
        self
    }

    pub fn facility(&self) -> Facility {
        self.facility
    }

    pub fn min_verbosity(&self) -> Verbosity {
        self.socket.min_verbosity()
    }

    /// PRI value for an entry at `verbosity`.
    pub fn priority(&self, verbosity: Verbosity) -> u8 {
        self.facility.code() * 8 + verbosity.as_syslog()
    }
}

impl Handler for SyslogHandler {
    fn write(&mut self, entry: &str, verbosity: Verbosity) -> Result<()> {
        if verbosity < self.socket.min_verbosity() {
            return Ok(());
        }
        let framed = format!("<{}>{}\u{0}", self.priority(verbosity), entry);
        self.socket.send_text(&framed)
    }

    fn name(&self) -> &str {
        "syslog"
    }
}
