//! ESC/POS command definitions
//!
//! Byte values follow the Epson ESC/POS reference; the subset here is the
//! one understood by virtually every thermal printer clone.

use std::fmt;

/// Escape control byte
pub const ESC: u8 = 0x1B;

/// Group separator control byte
pub const GS: u8 = 0x1D;

/// Line feed (print buffer and advance one line)
pub const LINE_FEED: u8 = 0x0A;

/// Initialize printer (ESC @) - clears styles, alignment and tab state
pub const INIT: [u8; 2] = [ESC, b'@'];

/// Emphasis on (ESC E 1)
pub const BOLD_ON: [u8; 3] = [ESC, b'E', 0x01];

/// Emphasis off (ESC E 0)
pub const BOLD_OFF: [u8; 3] = [ESC, b'E', 0x00];

/// Underline on (ESC - 1)
pub const UNDERLINE_ON: [u8; 3] = [ESC, b'-', 0x01];

/// Underline off (ESC - 0)
pub const UNDERLINE_OFF: [u8; 3] = [ESC, b'-', 0x00];

/// Double height + double width (ESC ! 0x30)
pub const DOUBLE_SIZE_ON: [u8; 3] = [ESC, b'!', 0x30];

/// Back to the default character size (ESC ! 0)
pub const SIZE_RESET: [u8; 3] = [ESC, b'!', 0x00];

/// Print and feed n lines (ESC d n)
pub fn feed(lines: u8) -> [u8; 3] {
    [ESC, b'd', lines]
}

/// Text alignment (ESC a n)
///
/// The printer latches alignment: it stays in effect until another
/// alignment command or a reset, which is why the builder does not track
/// it - callers own the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Alignment {
    Left = 0x00,
    Center = 0x01,
    Right = 0x02,
}

impl Alignment {
    /// Command bytes selecting this alignment
    pub fn command(self) -> [u8; 3] {
        [ESC, b'a', self as u8]
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        };
        write!(f, "{name}")
    }
}

/// Paper cut mode (GS V n)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CutMode {
    /// Cut straight through
    Full = 0x00,
    /// Leave a small bridge so the receipt stays attached
    Partial = 0x01,
}

impl CutMode {
    /// Command bytes performing this cut
    pub fn command(self) -> [u8; 3] {
        [GS, b'V', self as u8]
    }
}

/// Printer character table (ESC t n)
///
/// Selects which glyph the printer renders for each high byte. Only the
/// tables the library actually targets are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CodePage {
    /// PC437 (USA / standard Europe)
    Pc437 = 0x00,
    /// PC850 (multilingual Latin)
    Pc850 = 0x02,
    /// PC857 (Turkish)
    Pc857Turkish = 0x0D,
}

impl CodePage {
    /// Command bytes selecting this character table
    pub fn command(self) -> [u8; 3] {
        [ESC, b't', self as u8]
    }
}
