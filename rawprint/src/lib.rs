//! # rawprint
//!
//! ESC/POS receipt printing over raw TCP (JetDirect port 9100).
//!
//! ## Features
//!
//! - Fluent ESC/POS job builder with Windows-1254 text encoding
//! - Validated, timeout-bounded TCP delivery
//! - Every operation resolves to a [`PrintResult`] - expected failures
//!   (bad address, powered-off printer) are data, not panics
//!
//! ## Quick Start
//!
//! ```no_run
//! use rawprint::Printer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let printer = Printer::new("192.168.1.100", 9100);
//!
//!     let result = printer.print_test().await;
//!     println!("{result}");
//! }
//! ```
//!
//! For custom layouts, build the job yourself:
//!
//! ```no_run
//! use rawprint::{Alignment, CutMode, EscPosBuilder, Printer, LINE_WIDTH};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut job = EscPosBuilder::new();
//!     job.initialize()
//!         .align(Alignment::Center)
//!         .double_text_line("KASA 1")
//!         .align(Alignment::Left)
//!         .two_column_text("Toplam:", "70.21 TL", LINE_WIDTH)
//!         .feed_paper(3)
//!         .cut_paper(CutMode::Full);
//!
//!     let printer = Printer::new("192.168.1.100", 9100);
//!     let result = printer.print(&job.build()).await;
//!     println!("{result}");
//! }
//! ```

pub mod jobs;
pub mod printer;
pub mod result;

// Re-exports
pub use printer::Printer;
pub use result::PrintResult;

// Re-export the building blocks
pub use rawprint_core::{
    codepage, command, Alignment, CodePage, CutMode, EscPosBuilder, DEFAULT_PORT, LINE_WIDTH,
};
pub use rawprint_transport::{TcpTransport, Transport};
