//! High-level printer interface

use std::time::Duration;

use chrono::Local;
use tracing::{debug, info, warn};

use rawprint_transport::{validate, Error, TcpTransport, Transport};

use crate::jobs;
use crate::result::PrintResult;

/// Timestamp format used on printed pages
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Network thermal printer
///
/// Holds the connection parameters; every job opens its own socket and
/// closes it before returning, so independent jobs may run concurrently.
/// Two jobs aimed at the same physical printer can still interleave in its
/// receive buffer - serializing per destination is the caller's call.
///
/// # Examples
///
/// ```no_run
/// use rawprint::{EscPosBuilder, Printer, CutMode};
///
/// #[tokio::main]
/// async fn main() {
///     let printer = Printer::new("192.168.1.100", 9100);
///
///     let mut job = EscPosBuilder::new();
///     job.initialize()
///         .text_line("Hello")
///         .feed_paper(3)
///         .cut_paper(CutMode::Full);
///
///     let result = printer.print(&job.build()).await;
///     println!("{result}");
/// }
/// ```
pub struct Printer {
    address: String,
    port: u16,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
}

impl Printer {
    /// Create a printer handle for `address:port`
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            connect_timeout: None,
            read_timeout: None,
        }
    }

    /// Override the transport's connect timeout (default 5000 ms)
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the transport's read timeout (default 3000 ms)
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Printer address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Printer port
    pub fn port(&self) -> u16 {
        self.port
    }

    fn transport(&self) -> TcpTransport {
        let mut transport = TcpTransport::new(self.address.clone(), self.port);
        if let Some(t) = self.connect_timeout {
            transport = transport.with_connect_timeout(t);
        }
        if let Some(t) = self.read_timeout {
            transport = transport.with_read_timeout(t);
        }
        transport
    }

    /// Send a finished ESC/POS byte stream to the printer.
    ///
    /// Parameters are validated before any socket is opened; the socket is
    /// closed on every exit path and close failures never replace the job
    /// outcome.
    pub async fn print(&self, data: &[u8]) -> PrintResult {
        if let Err(e) = validate::validate_address(&self.address) {
            return e.into();
        }
        if let Err(e) = validate::validate_port(self.port) {
            return e.into();
        }
        if data.is_empty() {
            return Error::EmptyPayload.into();
        }

        let mut transport = self.transport();

        info!(
            "Printing {} bytes to {}",
            data.len(),
            transport.remote_addr()
        );

        if let Err(e) = transport.connect().await {
            warn!(error = %e, "connect failed");
            return e.into();
        }

        let outcome = transport.send(data).await;

        // Unconditional close; its own failures are discarded
        let _ = transport.disconnect().await;

        match outcome {
            Ok(()) => {
                debug!("Job delivered");
                PrintResult::success("print succeeded")
            }
            Err(e) => {
                warn!(error = %e, "send failed");
                e.into()
            }
        }
    }

    /// Print the connection test page
    pub async fn print_test(&self) -> PrintResult {
        let data = jobs::test_page(&self.address, self.port, &Self::now());
        self.print(&data).await
    }

    /// Print free-form text inside the standard frame
    pub async fn print_text(&self, text: &str) -> PrintResult {
        if text.trim().is_empty() {
            return Error::EmptyPayload.into();
        }
        let data = jobs::custom_text(text, &Self::now());
        self.print(&data).await
    }

    /// Print the fixed sample receipt
    pub async fn print_sample_receipt(&self) -> PrintResult {
        let data = jobs::sample_receipt(&Self::now());
        self.print(&data).await
    }

    /// Print the feature demo page
    pub async fn print_demo(&self) -> PrintResult {
        self.print(&jobs::demo_page()).await
    }

    /// Probe whether the printer accepts TCP connections
    pub async fn is_reachable(&self) -> bool {
        self.transport().is_reachable().await
    }

    fn now() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
