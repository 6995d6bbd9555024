//! Two-state scanner for the layout text format.
//!
//! ```text
//! LAYOUT = LAYER*
//! LAYER  = KEY (SEP KEY)*          rows * cols keys
//! SEP    = ',' | LINEBREAK         a line break may only close a row
//! KEY    = DIGIT+                  at most 19 digits, value <= 65535
//! ```
//!
//! Spaces, tabs, carriage returns and line feeds outside a number are
//! insignificant. The scanner only tokenizes; row/column bookkeeping is
//! done by [`Cursor`](super::cursor::Cursor).

use super::error::ParseErrorKind;
use crate::constants::MAX_DIGITS;

/// Digit accumulator with a fixed upper bound on its length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberBuffer {
    digits: String,
}

impl NumberBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            digits: String::new(),
        }
    }

    /// Returns true if appending one more digit would exceed the bound.
    #[must_use]
    pub fn would_overflow(&self) -> bool {
        self.digits.len() >= MAX_DIGITS
    }

    /// Appends an ASCII digit.
    ///
    /// # Errors
    ///
    /// Returns `NumberTooLong` if the buffer is already full.
    pub fn push(&mut self, digit: u8) -> Result<(), ParseErrorKind> {
        debug_assert!(digit.is_ascii_digit());
        if self.would_overflow() {
            return Err(ParseErrorKind::NumberTooLong { limit: MAX_DIGITS });
        }
        self.digits.push(char::from(digit));
        Ok(())
    }

    /// Returns true if no digits have been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The accumulated digits as a key code.
    ///
    /// # Errors
    ///
    /// Returns `KeyCodeOutOfRange` if the value exceeds 16 bits.
    pub fn value(&self) -> Result<u16, ParseErrorKind> {
        let out_of_range = || ParseErrorKind::KeyCodeOutOfRange {
            digits: self.digits.clone(),
        };
        // 19 decimal digits always fit in a u64
        let wide: u64 = self.digits.parse().map_err(|_| out_of_range())?;
        u16::try_from(wide).map_err(|_| out_of_range())
    }
}

/// Scanner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Between numbers
    Whitespace,
    /// Inside a number
    Digits(NumberBuffer),
}

/// What closed a key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `,`
    Comma,
    /// `\n` or `\r`
    LineBreak,
    /// The source ran out while a number was pending
    EndOfInput,
}

/// A completed key code token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// Parsed key code
    pub value: u16,
    /// The separator that ended it
    pub terminator: Terminator,
}

/// Result of feeding one byte to the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to continue in
    pub state: ScanState,
    /// False if the byte must be fed again in the new state
    pub consumed: bool,
    /// Key code completed by this byte, if any
    pub key: Option<Key>,
}

impl Transition {
    const fn consume(state: ScanState) -> Self {
        Self {
            state,
            consumed: true,
            key: None,
        }
    }

    const fn emit(key: Key) -> Self {
        Self {
            state: ScanState::Whitespace,
            consumed: true,
            key: Some(key),
        }
    }
}

const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

const fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\r' | b'\n')
}

/// Feeds one byte to the scanner.
///
/// A digit seen between numbers switches to [`ScanState::Digits`] without
/// consuming the byte, so the caller must feed it again.
///
/// # Errors
///
/// Fails on a byte that is invalid in the current state, on a number that
/// is too long, or on a key code that does not fit in 16 bits.
pub fn step(state: ScanState, byte: u8) -> Result<Transition, ParseErrorKind> {
    match state {
        ScanState::Whitespace => {
            if is_whitespace(byte) {
                Ok(Transition::consume(ScanState::Whitespace))
            } else if byte.is_ascii_digit() {
                Ok(Transition {
                    state: ScanState::Digits(NumberBuffer::new()),
                    consumed: false,
                    key: None,
                })
            } else {
                Err(ParseErrorKind::UnexpectedCharacter {
                    byte,
                    in_number: false,
                })
            }
        }
        ScanState::Digits(mut buffer) => {
            if byte.is_ascii_digit() {
                buffer.push(byte)?;
                Ok(Transition::consume(ScanState::Digits(buffer)))
            } else if byte == b',' {
                Ok(Transition::emit(Key {
                    value: buffer.value()?,
                    terminator: Terminator::Comma,
                }))
            } else if is_line_break(byte) {
                Ok(Transition::emit(Key {
                    value: buffer.value()?,
                    terminator: Terminator::LineBreak,
                }))
            } else {
                Err(ParseErrorKind::UnexpectedCharacter {
                    byte,
                    in_number: true,
                })
            }
        }
    }
}

/// Flushes the scanner at end of input, emitting a pending number if any.
///
/// # Errors
///
/// Fails if the pending number does not fit in 16 bits.
pub fn finish(state: ScanState) -> Result<Option<Key>, ParseErrorKind> {
    match state {
        ScanState::Digits(buffer) if !buffer.is_empty() => Ok(Some(Key {
            value: buffer.value()?,
            terminator: Terminator::EndOfInput,
        })),
        _ => Ok(None),
    }
}
