//! # rawprint-core
//!
//! ESC/POS encoding for thermal receipt printers.
//!
//! This crate provides the protocol-level primitives:
//! - Command byte sequences and style/alignment/cut tables
//! - Windows-1254 text re-encoding
//! - The fluent [`EscPosBuilder`] for assembling a print job
//!
//! ESC/POS is a write-only, byte-oriented control protocol: there is no
//! framing and no negotiation, so correctness is purely a matter of
//! emitting the right bytes in the right order.

pub mod builder;
pub mod codepage;
pub mod command;

pub use builder::EscPosBuilder;
pub use command::{Alignment, CodePage, CutMode};

/// Conventional raw-printing port (JetDirect)
pub const DEFAULT_PORT: u16 = 9100;

/// Characters per line on 58mm paper at the default font
pub const LINE_WIDTH: usize = 32;
