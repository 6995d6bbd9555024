//! Structured parse diagnostics.

use std::fmt;

/// Kinds of layout parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The underlying reader failed
    Read {
        /// Error message reported by the reader
        message: String,
    },
    /// A key code ran past the digit limit (usually a missing comma)
    NumberTooLong {
        /// Maximum number of digits per key code
        limit: usize,
    },
    /// A byte that is not valid in the current scanner state
    UnexpectedCharacter {
        /// The offending byte
        byte: u8,
        /// Whether the scanner was inside a number
        in_number: bool,
    },
    /// A key code that does not fit in 16 bits
    KeyCodeOutOfRange {
        /// The digits as written
        digits: String,
    },
    /// A line break before the last column of a row
    PrematureLineBreak {
        /// Keys found in the row
        found: usize,
        /// Keys expected per row
        expected: usize,
        /// Keys written on the line the break ended
        on_line: usize,
    },
    /// A new layer was started with the layout already at capacity
    TooManyLayers {
        /// Maximum number of layers
        limit: usize,
    },
    /// Input ended in the middle of a layer
    InsufficientEntries {
        /// Keys found in the incomplete layer
        found: usize,
        /// Keys expected per layer
        expected: usize,
    },
}

impl ParseErrorKind {
    /// Stable machine-readable name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::NumberTooLong { .. } => "number_too_long",
            Self::UnexpectedCharacter { .. } => "unexpected_character",
            Self::KeyCodeOutOfRange { .. } => "key_code_out_of_range",
            Self::PrematureLineBreak { .. } => "premature_line_break",
            Self::TooManyLayers { .. } => "too_many_layers",
            Self::InsufficientEntries { .. } => "insufficient_entries",
        }
    }

    /// Returns true for violations of the row/column/layer structure.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::PrematureLineBreak { .. }
                | Self::TooManyLayers { .. }
                | Self::InsufficientEntries { .. }
        )
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { message } => write!(f, "Failed to read layout: {message}"),
            Self::NumberTooLong { limit } => write!(
                f,
                "Key code longer than {limit} digits, comma missing?"
            ),
            Self::UnexpectedCharacter { byte, in_number } => {
                let context = if *in_number {
                    "while parsing digits"
                } else {
                    "while skipping whitespace"
                };
                write!(
                    f,
                    "Unexpected character {} {context}",
                    DisplayByte(*byte)
                )
            }
            Self::KeyCodeOutOfRange { digits } => {
                write!(f, "Key code {digits} does not fit in 16 bits (max 65535)")
            }
            Self::PrematureLineBreak {
                found,
                expected,
                on_line,
            } if on_line > found => write!(
                f,
                "Invalid number of keys on line, actually {on_line}, expected {expected} per row \
                 ({found} ran over into the next row)"
            ),
            Self::PrematureLineBreak {
                found, expected, ..
            } => write!(
                f,
                "Invalid number of keys in row, actually {found}, expected {expected}"
            ),
            Self::TooManyLayers { limit } => {
                write!(f, "Too many layers, the controller holds at most {limit}")
            }
            Self::InsufficientEntries { found, expected } => write!(
                f,
                "Not enough key entries for layer, actually {found}, expected {expected}"
            ),
        }
    }
}

/// Renders a byte as a quoted character when printable, hex otherwise.
struct DisplayByte(u8);

impl fmt::Display for DisplayByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "'{}'", char::from(self.0))
        } else {
            write!(f, "0x{:02X}", self.0)
        }
    }
}

/// A parse failure with the location of the offending byte.
///
/// `layer`, `row` and `key` are 1-based; `key` is the index within the row.
/// `offset` is the 0-based byte offset into the source, or the source
/// length when the failure was detected at end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,
    /// Layer number (1-based)
    pub layer: usize,
    /// Row number within the layer (1-based)
    pub row: usize,
    /// Key number within the row (1-based)
    pub key: usize,
    /// Byte offset in the source
    pub offset: u64,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at layer {}, row {}, key {} (byte position={})",
            self.kind, self.layer, self.row, self.key, self.offset
        )
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_location() {
        let err = ParseError {
            kind: ParseErrorKind::PrematureLineBreak {
                found: 3,
                expected: 4,
                on_line: 3,
            },
            layer: 1,
            row: 2,
            key: 3,
            offset: 12,
        };
        assert_eq!(
            err.to_string(),
            "Invalid number of keys in row, actually 3, expected 4 at layer 1, row 2, key 3 (byte position=12)"
        );
    }

    #[test]
    fn test_overlong_line_names_keys_on_line() {
        let kind = ParseErrorKind::PrematureLineBreak {
            found: 1,
            expected: 4,
            on_line: 5,
        };
        assert_eq!(
            kind.to_string(),
            "Invalid number of keys on line, actually 5, expected 4 per row \
             (1 ran over into the next row)"
        );
    }

    #[test]
    fn test_unexpected_character_rendering() {
        let printable = ParseErrorKind::UnexpectedCharacter {
            byte: b'x',
            in_number: true,
        };
        assert_eq!(
            printable.to_string(),
            "Unexpected character 'x' while parsing digits"
        );

        let control = ParseErrorKind::UnexpectedCharacter {
            byte: 0x1b,
            in_number: false,
        };
        assert_eq!(
            control.to_string(),
            "Unexpected character 0x1B while skipping whitespace"
        );
    }

    #[test]
    fn test_kind_classification() {
        assert!(ParseErrorKind::InsufficientEntries {
            found: 1,
            expected: 2
        }
        .is_structural());
        assert!(!ParseErrorKind::NumberTooLong { limit: 19 }.is_structural());
        assert_eq!(
            ParseErrorKind::NumberTooLong { limit: 19 }.name(),
            "number_too_long"
        );
    }
}
