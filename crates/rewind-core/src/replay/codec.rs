//! Byte-level decoding for replay files.
//!
//! Replay headers are built from two primitives:
//! - ULEB128 variable-length integers (7 value bits per byte, high bit = continue)
//! - Tagged strings: an indicator byte (`0x00` absent, `0x0b` present), then a
//!   ULEB128 byte length and that many UTF-8 bytes when present.

use encoding_rs::UTF_8;
use tracing::debug;

use crate::error::{Error, Result};

/// Indicator byte for an absent string.
pub const STRING_ABSENT: u8 = 0x00;

/// Indicator byte for a present string.
pub const STRING_PRESENT: u8 = 0x0b;

/// A position-tracking reader over replay bytes.
///
/// # Example
///
/// ```
/// use rewind_core::replay::ByteBuffer;
///
/// let data = [0x0b, 0x03, b'a', b'b', b'c'];
/// let mut buf = ByteBuffer::new(&data);
///
/// let value = buf.read_tagged_string().unwrap();
/// assert_eq!(value.as_deref(), Some("abc"));
/// assert_eq!(buf.position(), 5);
/// ```
pub struct ByteBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Creates a reader starting at `offset`.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, pos: offset }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Skips the specified number of bytes.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedBuffer` if skipping would go beyond the buffer end.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_bytes(count).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    /// Reads a signed 32-bit integer (little-endian).
    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads `count` bytes and advances the position.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::TruncatedBuffer {
                offset: self.pos,
                len: self.data.len(),
            })?;

        let result = &self.data[self.pos..end];
        self.pos = end;
        Ok(result)
    }

    /// Reads an unsigned LEB128 integer.
    ///
    /// Groups past the 64th bit are discarded.
    pub fn read_uleb128(&mut self) -> Result<u64> {
        let mut value: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let byte = self.read_u8()?;
            let group = u64::from(byte & 0x7f);
            value |= group.checked_shl(shift).unwrap_or(0);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift = shift.saturating_add(7);
        }
    }

    /// Reads a tagged string. `None` means the indicator marked it absent.
    pub fn read_tagged_string(&mut self) -> Result<Option<String>> {
        let indicator_offset = self.pos;
        match self.read_u8()? {
            STRING_ABSENT => Ok(None),
            STRING_PRESENT => {
                let declared = self.read_uleb128()?;
                let len = usize::try_from(declared).map_err(|_| Error::TruncatedBuffer {
                    offset: self.pos,
                    len: self.data.len(),
                })?;
                let bytes = self.read_bytes(len)?;
                Ok(Some(decode_utf8(bytes)))
            }
            indicator => Err(Error::InvalidStringIndicator {
                indicator,
                offset: indicator_offset,
            }),
        }
    }
}

/// Decodes a ULEB128 integer at `offset`, returning the value and the offset after it.
pub fn decode_uleb128(buffer: &[u8], offset: usize) -> Result<(u64, usize)> {
    let mut buf = ByteBuffer::at(buffer, offset);
    let value = buf.read_uleb128()?;
    Ok((value, buf.position()))
}

/// Decodes a tagged string at `offset`, returning it and the offset after it.
pub fn decode_tagged_string(buffer: &[u8], offset: usize) -> Result<(Option<String>, usize)> {
    let mut buf = ByteBuffer::at(buffer, offset);
    let value = buf.read_tagged_string()?;
    Ok((value, buf.position()))
}

/// Appends `value` as ULEB128.
pub fn encode_uleb128(mut value: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Appends a tagged string; `None` writes the absent indicator only.
pub fn encode_tagged_string(value: Option<&str>, out: &mut Vec<u8>) {
    match value {
        None => out.push(STRING_ABSENT),
        Some(s) => {
            out.push(STRING_PRESENT);
            encode_uleb128(s.len() as u64, out);
            out.extend_from_slice(s.as_bytes());
        }
    }
}

/// Decodes UTF-8 text, replacing malformed sequences.
pub fn decode_utf8(bytes: &[u8]) -> String {
    let (decoded, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if had_errors {
        debug!(
            "UTF-8 decoding had errors for bytes: {:?}",
            &bytes[..bytes.len().min(20)]
        );
    }
    decoded.into_owned()
}
