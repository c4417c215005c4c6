//! Socket handlers for network log destinations
//!
//! Sends formatted entries to a remote peer over TCP, UDP, or Unix-domain
//! sockets. Useful for centralized log collection in distributed systems.

use crate::core::{Encoding, EncodingPolicy, Handler, LoggerError, Result, Verbosity};
use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs, UdpSocket};
#[cfg(unix)]
use std::os::unix::net::{UnixDatagram, UnixStream};

/// Address family for socket handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketFamily {
    /// IPv4.
    Inet,
    /// IPv6.
    Inet6,
    /// Unix-domain, addressed by filesystem path.
    #[cfg(unix)]
    Unix,
}

/// Socket type: connected byte stream or datagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketKind {
    Stream,
    Datagram,
}

#[derive(Debug)]
enum Connection {
    Tcp(TcpStream),
    Udp(UdpSocket),
    #[cfg(unix)]
    UnixStream(UnixStream),
    #[cfg(unix)]
    UnixDatagram(UnixDatagram),
}

/// Handler that writes entries to a connected socket.
///
/// The connection is established eagerly at construction; an unreachable
/// peer is a construction error. Each accepted entry is encoded and sent
/// whole: streams use `write_all` (partial writes are retried by the
/// stream itself), datagrams go out as a single send and a short send is
/// an error, since a datagram cannot be partially resent.
///
/// # Example
///
/// ```no_run
/// use sinklog::handlers::SocketHandler;
///
/// let handler = SocketHandler::tcp("logs.internal", 6514)
///     .expect("failed to connect to log collector");
/// ```
#[derive(Debug)]
pub struct SocketHandler {
    conn: Connection,
    target: String,
    encoding: Encoding,
    policy: EncodingPolicy,
    min_verbosity: Verbosity,
}

impl SocketHandler {
    /// Establish a connection per the generic selection rules.
    ///
    /// A port combined with a non-datagram type means a TCP-style
    /// connected stream to `(host, port)`. Otherwise the target is
    /// `(host, port)` when a port is given and the bare `host`
    /// (a filesystem path) for Unix-domain; an explicit family/type pair
    /// is honored as given, a lone type defaults the family to
    /// Unix-domain, and when neither is given the connection is a
    /// Unix-domain datagram.
    pub fn connect(
        host: &str,
        port: Option<u16>,
        family: Option<SocketFamily>,
        kind: Option<SocketKind>,
    ) -> Result<Self> {
        if let Some(p) = port {
            if kind != Some(SocketKind::Datagram) {
                return Self::connect_stream(host, p, family);
            }
        }

        match (family, kind) {
            (Some(family), kind) => {
                Self::connect_raw(host, port, family, kind.unwrap_or(SocketKind::Datagram))
            }
            #[cfg(unix)]
            (None, kind) => Self::connect_raw(
                host,
                port,
                SocketFamily::Unix,
                kind.unwrap_or(SocketKind::Datagram),
            ),
            #[cfg(not(unix))]
            (None, _) => Err(LoggerError::config(
                "SocketHandler",
                "Unix-domain sockets are not available on this platform",
            )),
        }
    }

    /// Connected TCP session over IPv4.
    pub fn tcp(host: &str, port: u16) -> Result<Self> {
        Self::connect_stream(host, port, Some(SocketFamily::Inet))
    }

    /// Connected TCP session over IPv6.
    pub fn tcp6(host: &str, port: u16) -> Result<Self> {
        Self::connect_stream(host, port, Some(SocketFamily::Inet6))
    }

    /// UDP datagrams over IPv4.
    pub fn udp(host: &str, port: u16) -> Result<Self> {
        Self::connect_raw(host, Some(port), SocketFamily::Inet, SocketKind::Datagram)
    }

    /// UDP datagrams over IPv6.
    pub fn udp6(host: &str, port: u16) -> Result<Self> {
        Self::connect_raw(host, Some(port), SocketFamily::Inet6, SocketKind::Datagram)
    }

    /// Unix-domain datagrams to a socket path.
    #[cfg(unix)]
    pub fn unix(path: &str) -> Result<Self> {
        Self::connect_raw(path, None, SocketFamily::Unix, SocketKind::Datagram)
    }

    fn connect_stream(host: &str, port: u16, family: Option<SocketFamily>) -> Result<Self> {
        #[cfg(unix)]
        if family == Some(SocketFamily::Unix) {
            return Err(LoggerError::config(
                "SocketHandler",
                "Unix-domain targets take a path, not a host and port",
            ));
        }
        let addr = resolve(host, port, family)?;
        let stream = TcpStream::connect(addr).map_err(|e| {
            LoggerError::io_operation(
                "connecting",
                format!("cannot reach {}:{}", host, port),
                e,
            )
        })?;
        // Low-latency log delivery; entries are tiny.
        stream.set_nodelay(true)?;
        Ok(Self::wrap(
            Connection::Tcp(stream),
            format!("tcp://{}:{}", host, port),
        ))
    }

    fn connect_raw(
        host: &str,
        port: Option<u16>,
        family: SocketFamily,
        kind: SocketKind,
    ) -> Result<Self> {
        match family {
            SocketFamily::Inet | SocketFamily::Inet6 => {
                let port = port.ok_or_else(|| {
                    LoggerError::config("SocketHandler", "an IP target requires a port")
                })?;
                match kind {
                    SocketKind::Stream => Self::connect_stream(host, port, Some(family)),
                    SocketKind::Datagram => {
                        let addr = resolve(host, port, Some(family))?;
                        let wildcard = match family {
                            SocketFamily::Inet => "0.0.0.0:0",
                            _ => "[::]:0",
                        };
                        let socket = UdpSocket::bind(wildcard)?;
                        socket.connect(addr).map_err(|e| {
                            LoggerError::io_operation(
                                "connecting",
                                format!("cannot reach {}:{}", host, port),
                                e,
                            )
                        })?;
                        Ok(Self::wrap(
                            Connection::Udp(socket),
                            format!("udp://{}:{}", host, port),
                        ))
                    }
                }
            }
            #[cfg(unix)]
            SocketFamily::Unix => {
                if port.is_some() {
                    return Err(LoggerError::config(
                        "SocketHandler",
                        "Unix-domain targets take a path, not a port",
                    ));
                }
                let target = format!("unix://{}", host);
                match kind {
                    SocketKind::Stream => {
                        let stream = UnixStream::connect(host).map_err(|e| {
                            LoggerError::io_operation(
                                "connecting",
                                format!("cannot reach socket '{}'", host),
                                e,
                            )
                        })?;
                        Ok(Self::wrap(Connection::UnixStream(stream), target))
                    }
                    SocketKind::Datagram => {
                        let socket = UnixDatagram::unbound()?;
                        socket.connect(host).map_err(|e| {
                            LoggerError::io_operation(
                                "connecting",
                                format!("cannot reach socket '{}'", host),
                                e,
                            )
                        })?;
                        Ok(Self::wrap(Connection::UnixDatagram(socket), target))
                    }
                }
            }
        }
    }

    fn wrap(conn: Connection, target: String) -> Self {
        Self {
            conn,
            target,
            encoding: Encoding::Utf8,
            policy: EncodingPolicy::Strict,
            min_verbosity: Verbosity::Info,
        }
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

    pub fn min_verbosity(&self) -> Verbosity {
        self.min_verbosity
    }

    /// Peer description, e.g. `udp://localhost:514`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Encode and send text to the peer, bypassing the threshold check.
    ///
    /// The syslog handler frames entries itself and uses this to push the
    /// finished payload.
    pub(crate) fn send_text(&mut self, text: &str) -> Result<()> {
        let bytes = self.encoding.encode(text, self.policy)?;
        self.send_bytes(&bytes)
    }

    fn send_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        match &mut self.conn {
            Connection::Tcp(stream) => {
                stream.write_all(bytes)?;
                stream.flush()?;
            }
            Connection::Udp(socket) => {
                let sent = socket.send(bytes)?;
                if sent != bytes.len() {
                    return Err(LoggerError::short_write(self.target.as_str(), sent, bytes.len()));
                }
            }
            #[cfg(unix)]
            Connection::UnixStream(stream) => {
                stream.write_all(bytes)?;
                stream.flush()?;
            }
            #[cfg(unix)]
            Connection::UnixDatagram(socket) => {
                let sent = socket.send(bytes)?;
                if sent != bytes.len() {
                    return Err(LoggerError::short_write(self.target.as_str(), sent, bytes.len()));
                }
            }
        }
        Ok(())
    }
}

impl Handler for SocketHandler {
    fn write(&mut self, entry: &str, verbosity: Verbosity) -> Result<()> {
        if verbosity < self.min_verbosity {
            return Ok(());
        }
        self.send_text(entry)
    }

    fn name(&self) -> &str {
        "socket"
    }
}

fn resolve(host: &str, port: u16, family: Option<SocketFamily>) -> Result<SocketAddr> {
    let mut addrs = (host, port).to_socket_addrs().map_err(|e| {
        LoggerError::io_operation("resolving", format!("cannot resolve '{}'", host), e)
    })?;
    addrs
        .find(|addr| match family {
            None => true,
            Some(SocketFamily::Inet) => addr.is_ipv4(),
            Some(SocketFamily::Inet6) => addr.is_ipv6(),
            #[cfg(unix)]
            Some(SocketFamily::Unix) => false,
        })
        .ok_or_else(|| {
            LoggerError::config(
                "SocketHandler",
                format!("no matching address for {}:{}", host, port),
            )
        })
}
