//! Bounds-checked field extraction over raw card bytes.
//!
//! The card stores multi-byte integers low byte first. These helpers
//! assemble them with explicit bounds checks so a truncated buffer
//! surfaces as [`DecodeError::OutOfRange`] instead of a panic, and
//! render opaque byte ranges as hex for diagnostics.

use super::errors::DecodeError;

/// Read a single byte at `offset`.
///
/// # Errors
/// Returns [`DecodeError::OutOfRange`] if `offset` is past the end of
/// the buffer.
#[must_use = "handle the result"]
#[expect(clippy::indexing_slicing, reason = "bounds are checked above the access")]
pub const fn read_u8(buf: &[u8], offset: usize) -> Result<u8, DecodeError> {
    if offset >= buf.len() {
        return Err(DecodeError::OutOfRange {
            offset,
            len: buf.len(),
        });
    }
    Ok(buf[offset])
}

/// Read a 16-bit unsigned integer stored low byte first at `offset`.
///
/// # Errors
/// Returns [`DecodeError::OutOfRange`] if fewer than two bytes remain
/// at `offset`.
#[must_use = "handle the result"]
#[expect(clippy::indexing_slicing, reason = "bounds are checked above the access")]
#[expect(
    clippy::little_endian_bytes,
    reason = "card fields are stored low byte first"
)]
pub const fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    if offset.saturating_add(1) >= buf.len() {
        return Err(DecodeError::OutOfRange {
            offset,
            len: buf.len(),
        });
    }
    Ok(u16::from_le_bytes([buf[offset], buf[offset + 1]]))
}

/// Read a 24-bit unsigned integer stored low byte first at `offset`.
///
/// # Errors
/// Returns [`DecodeError::OutOfRange`] if fewer than three bytes remain
/// at `offset`.
#[must_use = "handle the result"]
#[expect(clippy::indexing_slicing, reason = "bounds are checked above the access")]
#[expect(
    clippy::little_endian_bytes,
    reason = "card fields are stored low byte first"
)]
pub const fn read_u24_le(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    if offset.saturating_add(2) >= buf.len() {
        return Err(DecodeError::OutOfRange {
            offset,
            len: buf.len(),
        });
    }
    Ok(u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        0,
    ]))
}

/// Render bytes as two-digit uppercase hex, space separated, in buffer
/// order.
#[must_use]
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
