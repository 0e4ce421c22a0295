//! Bounded line buffer assembling printable bytes into one command line.

use heapless::String;

/// ASCII space, the first printable character (0x20).
pub const ASCII_SPACE: u8 = 0x20;
/// ASCII tilde, the last printable character (0x7E).
pub const ASCII_TILDE: u8 = 0x7E;

/// Outcome of offering one byte to a [`LineBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    /// The byte was appended.
    Stored,
    /// The byte was printable but the buffer is full, so it was discarded.
    Dropped,
    /// The byte is not printable and was discarded.
    Ignored,
}

/// Returns `true` for printable ASCII (`0x20..=0x7E`).
#[inline]
pub fn is_printable(byte: u8) -> bool {
    (ASCII_SPACE..=ASCII_TILDE).contains(&byte)
}

/// Fixed-capacity buffer holding the line currently being assembled.
///
/// Only printable ASCII is ever stored, so the contents are always valid
/// UTF-8 and can be handed out as `&str` without checks. Once `N` bytes are
/// stored, further printable bytes are dropped until [`clear`](Self::clear)
/// is called: an over-long line is truncated, never rejected.
///
/// # Examples
///
/// ```rust
/// use serialcmd::command::{LineBuffer, Push};
///
/// let mut line: LineBuffer<4> = LineBuffer::new();
/// for &byte in b"GO\r" {
///     line.push(byte);
/// }
/// assert_eq!(line.as_str(), "GO");
///
/// for &byte in b"TO" {
///     line.push(byte);
/// }
/// assert_eq!(line.push(b'X'), Push::Dropped);
/// assert_eq!(line.as_str(), "GOTO");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBuffer<const N: usize> {
    line: String<N>,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty line buffer.
    pub const fn new() -> Self {
        Self { line: String::new() }
    }

    /// Offer one byte to the buffer.
    pub fn push(&mut self, byte: u8) -> Push {
        if !is_printable(byte) {
            return Push::Ignored;
        }
        match self.line.push(char::from(byte)) {
            Ok(()) => Push::Stored,
            Err(()) => Push::Dropped,
        }
    }

    /// Logically empty the buffer.
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// The line assembled so far.
    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }

    /// Number of bytes stored.
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// `true` when no byte has been stored since the last clear.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// `true` when further printable bytes will be dropped.
    pub fn is_full(&self) -> bool {
        self.line.len() == N
    }

    /// Maximum number of bytes the buffer holds.
    pub const fn capacity(&self) -> usize {
        N
    }
}
