//! TCP transport (raw / JetDirect printing)

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{error::*, validate, Transport, CONNECT_TIMEOUT_MS, READ_TIMEOUT_MS};

/// TCP transport for network thermal printers
///
/// One transport drives one socket for one job; independent jobs get
/// independent transports and may run concurrently without locking.
pub struct TcpTransport {
    addr: String,
    port: u16,
    socket_addr: Option<SocketAddr>,
    stream: Option<TcpStream>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl TcpTransport {
    /// Create a new TCP transport
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            socket_addr: None,
            stream: None,
            connect_timeout: Duration::from_millis(CONNECT_TIMEOUT_MS),
            read_timeout: Duration::from_millis(READ_TIMEOUT_MS),
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set read timeout. The raw-9100 path never reads, so this bound only
    /// matters to transports that grow a status channel; it is kept as
    /// part of the connection contract.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Configured connection timeout
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Configured read timeout
    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Resolve address to SocketAddr
    async fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.socket_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&addr_str)
            .await
            .map_err(|_| Error::HostUnresolvable(self.addr.clone()))?
            .collect();

        let addr = addrs
            .first()
            .ok_or_else(|| Error::HostUnresolvable(self.addr.clone()))?;

        self.socket_addr = Some(*addr);
        Ok(*addr)
    }

    /// Probe whether the printer accepts TCP connections.
    ///
    /// Reachability only - no printer status is queried. Never errors.
    pub async fn is_reachable(&self) -> bool {
        let addr = format!("{}:{}", self.addr, self.port);
        match timeout(self.connect_timeout, TcpStream::connect(&addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!(error = %e, "printer unreachable");
                false
            }
            Err(_) => {
                debug!("printer probe timed out");
                false
            }
        }
    }

    fn classify_connect_error(e: io::Error) -> Error {
        match e.kind() {
            io::ErrorKind::ConnectionRefused => Error::ConnectionRefused,
            io::ErrorKind::TimedOut => Error::ConnectTimeout,
            _ => Error::Io(e),
        }
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyConnected);
        }

        validate::validate_address(&self.addr)?;
        validate::validate_port(self.port)?;

        let addr = self.resolve_addr().await?;

        debug!("Connecting to {}...", addr);

        let stream = timeout(self.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::ConnectTimeout)?
            .map_err(Self::classify_connect_error)?;

        // Disable Nagle's algorithm so small jobs leave immediately
        stream.set_nodelay(true)?;

        debug!("Connected to {}", addr);

        self.stream = Some(stream);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            debug!("Disconnecting from {}...", self.remote_addr());

            // Graceful shutdown; a close failure never outranks the job result
            let _ = stream.shutdown().await;
        }

        self.socket_addr = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyPayload);
        }

        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        trace!(
            "Sending {} bytes: {:02X?}",
            data.len(),
            &data[..data.len().min(16)]
        );

        stream.write_all(data).await?;
        stream.flush().await?;

        Ok(())
    }

    fn remote_addr(&self) -> String {
        self.socket_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("TCP transport dropped while still connected");
        }
    }
}
