//! Transport layer for raw ESC/POS printing
//!
//! Delivers finished byte streams to a printer's listening socket. The
//! protocol is write-only: nothing is read back, so the trait has no
//! receive side.

pub mod error;
pub mod tcp;
pub mod validate;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use async_trait::async_trait;

/// Default connect timeout in milliseconds
pub const CONNECT_TIMEOUT_MS: u64 = 5000;

/// Default read timeout in milliseconds (defensive; the raw-9100 path
/// never reads)
pub const READ_TIMEOUT_MS: u64 = 3000;

/// Transport trait for printer links
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect to the printer
    async fn connect(&mut self) -> Result<()>;

    /// Disconnect from the printer; close failures are swallowed
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Stream raw bytes to the printer and flush
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Remote address in host:port form
    fn remote_addr(&self) -> String;
}
