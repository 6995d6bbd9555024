//! Lazy byte source over any reader.

use std::io::{self, BufReader, Bytes, Read};

/// Pulls one byte at a time from a reader, tagging each with its offset.
///
/// The sequence is finite and cannot be restarted. Once the reader is
/// exhausted, `offset()` equals the total number of bytes read.
pub struct ByteSource<R> {
    bytes: Bytes<BufReader<R>>,
    offset: u64,
}

impl<R: Read> ByteSource<R> {
    /// Wraps a reader in a buffered byte source.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            offset: 0,
        }
    }

    /// Number of bytes produced so far.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

impl<R: Read> Iterator for ByteSource<R> {
    type Item = io::Result<(u64, u8)>;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = match self.bytes.next()? {
            Ok(byte) => byte,
            Err(e) => return Some(Err(e)),
        };
        let offset = self.offset;
        self.offset += 1;
        Some(Ok((offset, byte)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_carry_offsets() {
        let mut source = ByteSource::new("1,\n".as_bytes());
        let items: Vec<(u64, u8)> = source.by_ref().map(Result::unwrap).collect();
        assert_eq!(items, vec![(0, b'1'), (1, b','), (2, b'\n')]);
        assert_eq!(source.offset(), 3);
        assert!(source.next().is_none());
    }

    #[test]
    fn test_read_errors_are_surfaced() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device unplugged"))
            }
        }

        let mut source = ByteSource::new(Failing);
        let err = source.next().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "device unplugged");
    }
}
