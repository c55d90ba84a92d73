//! ESC/POS job builder
//!
//! Accumulates command bytes and Windows-1254 text into one buffer. The
//! buffer is owned by a single job: build it up, hand the bytes to the
//! transport, drop it. The builder mirrors none of the printer's latched
//! state (alignment, styles) - it only emits commands, so ordering is the
//! caller's responsibility and a job should always start with
//! [`initialize`](EscPosBuilder::initialize).

use bytes::{BufMut, Bytes, BytesMut};

use crate::codepage;
use crate::command::{self, Alignment, CodePage, CutMode};

/// Fluent builder for an ESC/POS byte stream
///
/// # Examples
///
/// ```
/// use rawprint_core::{Alignment, CutMode, EscPosBuilder, LINE_WIDTH};
///
/// let mut job = EscPosBuilder::new();
/// job.initialize()
///     .align(Alignment::Center)
///     .double_text_line("FİŞ")
///     .align(Alignment::Left)
///     .horizontal_line('-', LINE_WIDTH)
///     .two_column_text("Toplam:", "70.21 TL", LINE_WIDTH)
///     .feed_paper(3)
///     .cut_paper(CutMode::Full);
///
/// let data = job.build();
/// assert_eq!(&data[..5], &[0x1B, 0x40, 0x1B, 0x74, 0x0D]);
/// ```
#[derive(Debug, Default)]
pub struct EscPosBuilder {
    buf: BytesMut,
}

impl EscPosBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(1024),
        }
    }

    /// Reset the printer and select the Turkish character table.
    ///
    /// Must be the first operation of a job; without it the printer keeps
    /// whatever alignment and style the previous job left behind.
    pub fn initialize(&mut self) -> &mut Self {
        self.buf.put_slice(&command::INIT);
        self.select_code_page(CodePage::Pc857Turkish)
    }

    /// Select a printer character table
    pub fn select_code_page(&mut self, page: CodePage) -> &mut Self {
        self.buf.put_slice(&page.command());
        self
    }

    // === Text ===

    /// Append text, re-encoded into Windows-1254
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.put_slice(&codepage::encode(s));
        self
    }

    /// Append text followed by a line feed
    pub fn text_line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.put_u8(command::LINE_FEED);
        self
    }

    /// Append emphasized text
    pub fn bold_text(&mut self, s: &str) -> &mut Self {
        self.buf.put_slice(&command::BOLD_ON);
        self.text(s);
        self.buf.put_slice(&command::BOLD_OFF);
        self
    }

    /// Append emphasized text followed by a line feed
    pub fn bold_text_line(&mut self, s: &str) -> &mut Self {
        self.bold_text(s);
        self.buf.put_u8(command::LINE_FEED);
        self
    }

    /// Append underlined text
    pub fn underline_text(&mut self, s: &str) -> &mut Self {
        self.buf.put_slice(&command::UNDERLINE_ON);
        self.text(s);
        self.buf.put_slice(&command::UNDERLINE_OFF);
        self
    }

    /// Append underlined text followed by a line feed
    pub fn underline_text_line(&mut self, s: &str) -> &mut Self {
        self.underline_text(s);
        self.buf.put_u8(command::LINE_FEED);
        self
    }

    /// Append double-height, double-width text
    pub fn double_text(&mut self, s: &str) -> &mut Self {
        self.buf.put_slice(&command::DOUBLE_SIZE_ON);
        self.text(s);
        self.buf.put_slice(&command::SIZE_RESET);
        self
    }

    /// Append double-size text followed by a line feed
    pub fn double_text_line(&mut self, s: &str) -> &mut Self {
        self.double_text(s);
        self.buf.put_u8(command::LINE_FEED);
        self
    }

    // === Alignment ===

    /// Set text alignment; the printer latches it until changed or reset
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.buf.put_slice(&alignment.command());
        self
    }

    /// Shorthand for `align(Alignment::Left)`
    pub fn align_left(&mut self) -> &mut Self {
        self.align(Alignment::Left)
    }

    /// Shorthand for `align(Alignment::Center)`
    pub fn align_center(&mut self) -> &mut Self {
        self.align(Alignment::Center)
    }

    /// Shorthand for `align(Alignment::Right)`
    pub fn align_right(&mut self) -> &mut Self {
        self.align(Alignment::Right)
    }

    // === Layout ===

    /// Append a single line feed
    pub fn newline(&mut self) -> &mut Self {
        self.buf.put_u8(command::LINE_FEED);
        self
    }

    /// Append `n` line feeds; `n = 0` is a no-op
    pub fn newlines(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            self.buf.put_u8(command::LINE_FEED);
        }
        self
    }

    /// Append a rule of `length` repetitions of `ch`, as its own line
    pub fn horizontal_line(&mut self, ch: char, length: usize) -> &mut Self {
        let rule: String = std::iter::repeat_n(ch, length).collect();
        self.text_line(&rule)
    }

    /// Append one line with `left` at the left edge and `right` at the
    /// right edge of a `total_width`-column area.
    ///
    /// When both sides fit, the gap is filled with spaces and the line is
    /// exactly `total_width` columns. When they don't fit (or fit exactly),
    /// the line collapses to `left + " " + right` and column alignment is
    /// lost. Kept bug-for-bug compatible with known receipt layouts.
    pub fn two_column_text(&mut self, left: &str, right: &str, total_width: usize) -> &mut Self {
        let used = codepage::visible_width(left) + codepage::visible_width(right);
        if used < total_width {
            let gap = " ".repeat(total_width - used);
            self.text(left);
            self.text(&gap);
            self.text_line(right)
        } else {
            self.text(left);
            self.text(" ");
            self.text_line(right)
        }
    }

    // === Paper control ===

    /// Print and feed `lines` lines (ESC d n)
    pub fn feed_paper(&mut self, lines: u8) -> &mut Self {
        self.buf.put_slice(&command::feed(lines));
        self
    }

    /// Cut the paper
    pub fn cut_paper(&mut self, mode: CutMode) -> &mut Self {
        self.buf.put_slice(&mode.command());
        self
    }

    // === Raw ===

    /// Append literal command bytes
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.put_slice(bytes);
        self
    }

    // === Build ===

    /// Snapshot the accumulated byte stream. The buffer is not reset, so
    /// further operations keep appending to the same job.
    pub fn build(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }

    /// Empty the buffer for reuse
    pub fn clear(&mut self) -> &mut Self {
        self.buf.clear();
        self
    }

    /// Number of bytes accumulated so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been appended yet
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initialize_prefix() {
        let mut b = EscPosBuilder::new();
        b.initialize();
        assert_eq!(&b.build()[..], &[0x1B, 0x40, 0x1B, 0x74, 0x0D]);
    }

    #[test]
    fn test_text_line() {
        let mut b = EscPosBuilder::new();
        b.text_line("A");
        assert_eq!(&b.build()[..], &[0x41, 0x0A]);
    }

    #[test]
    fn test_bold_text_line() {
        let mut b = EscPosBuilder::new();
        b.bold_text_line("A");
        assert_eq!(
            &b.build()[..],
            &[0x1B, 0x45, 0x01, 0x41, 0x1B, 0x45, 0x00, 0x0A]
        );
    }

    #[test]
    fn test_underline_text_line() {
        let mut b = EscPosBuilder::new();
        b.underline_text_line("A");
        assert_eq!(
            &b.build()[..],
            &[0x1B, 0x2D, 0x01, 0x41, 0x1B, 0x2D, 0x00, 0x0A]
        );
    }

    #[test]
    fn test_double_text_line() {
        let mut b = EscPosBuilder::new();
        b.double_text_line("A");
        assert_eq!(
            &b.build()[..],
            &[0x1B, 0x21, 0x30, 0x41, 0x1B, 0x21, 0x00, 0x0A]
        );
    }

    #[test]
    fn test_alignment() {
        let mut b = EscPosBuilder::new();
        b.align_left().align_center().align_right();
        assert_eq!(
            &b.build()[..],
            &[0x1B, 0x61, 0x00, 0x1B, 0x61, 0x01, 0x1B, 0x61, 0x02]
        );
    }

    #[test]
    fn test_newlines() {
        let mut b = EscPosBuilder::new();
        b.newlines(3);
        assert_eq!(&b.build()[..], &[0x0A, 0x0A, 0x0A]);

        b.clear();
        b.newlines(0);
        assert!(b.is_empty());
    }

    #[test]
    fn test_horizontal_line() {
        let mut b = EscPosBuilder::new();
        b.horizontal_line('-', 4);
        assert_eq!(&b.build()[..], b"----\n");
    }

    #[test]
    fn test_feed_paper() {
        let mut b = EscPosBuilder::new();
        b.feed_paper(3);
        assert_eq!(&b.build()[..], &[0x1B, 0x64, 0x03]);
    }

    #[test]
    fn test_cut_paper() {
        let mut b = EscPosBuilder::new();
        b.cut_paper(CutMode::Full);
        assert_eq!(&b.build()[..], &[0x1D, 0x56, 0x00]);

        b.clear();
        b.cut_paper(CutMode::Partial);
        assert_eq!(&b.build()[..], &[0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_two_column_pads_to_width() {
        let mut b = EscPosBuilder::new();
        b.two_column_text("Tarih:", "01/01/2024", 32);

        let data = b.build();
        // One line of exactly 32 visible characters plus the line feed
        assert_eq!(data.len(), 33);
        assert_eq!(data[data.len() - 1], 0x0A);
        assert_eq!(&data[..], b"Tarih:                01/01/2024\n");
    }

    #[test]
    fn test_two_column_overflow_collapses() {
        let mut b = EscPosBuilder::new();
        b.two_column_text("AAAAAAAAAAAAAAAAAAAA", "BBBBBBBBBBBB", 32);
        // 20 + 12 == 32: exact fit still takes the collapsed branch
        assert_eq!(&b.build()[..], b"AAAAAAAAAAAAAAAAAAAA BBBBBBBBBBBB\n");
    }

    #[test]
    fn test_two_column_width_counts_chars_not_bytes() {
        let mut b = EscPosBuilder::new();
        b.two_column_text("Fiş No:", "2024-001", 32);

        let data = b.build();
        // "Fiş No:" is 7 columns even though ş is a high byte
        assert_eq!(data.len(), 33);
    }

    #[test]
    fn test_build_does_not_reset() {
        let mut b = EscPosBuilder::new();
        b.text("A");
        let first = b.build();
        b.text("B");
        let second = b.build();

        assert_eq!(&first[..], b"A");
        assert_eq!(&second[..], b"AB");
    }

    #[test]
    fn test_clear() {
        let mut b = EscPosBuilder::new();
        b.initialize().text_line("x");
        assert!(!b.is_empty());

        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn test_raw_passthrough() {
        let mut b = EscPosBuilder::new();
        b.raw(&[0x1B, 0x70, 0x00, 25, 250]);
        assert_eq!(&b.build()[..], &[0x1B, 0x70, 0x00, 25, 250]);
    }

    #[test]
    fn test_turkish_text_goes_through_code_page() {
        let mut b = EscPosBuilder::new();
        b.text("Ş");
        assert_eq!(&b.build()[..], &[0xDE]);
    }
}
