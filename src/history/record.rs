//! One stored transaction and its 16-byte block layout.
//!
//! Block layout, offsets in bytes:
//!
//! | bytes | field |
//! |-------|-------|
//! | 0–3   | fixed header, opaque |
//! | 4–5   | minutes before the read instant, low byte first |
//! | 6–7   | transaction type code, opaque |
//! | 8     | origin station code |
//! | 10    | destination station code |
//! | 11–13 | balance in Taka, low byte first |
//! | 14–15 | trailing bytes, opaque |
//!
//! Byte 9 is unused, and the destination code sits at index 10, the
//! same index the envelope uses for its first status flag. Every card
//! observed in service lays records out this way, so the decoder keeps
//! the layout bit-compatible rather than second-guessing it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BLOCK_LEN,
    errors::DecodeError,
    wire::{hex_string, read_u8, read_u16_le, read_u24_le},
};
use crate::{station::station_name, timestamp::decode_minutes_ago};

/// A single decoded transaction.
///
/// Produced once per block by [`parse_block`] and never mutated; the
/// opaque fields are kept as hex strings for diagnostics and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Hex rendering of the opaque four-byte block header.
    pub fixed_header: String,
    /// Absolute transaction time, `yyyy-MM-dd HH:mm` in UTC.
    pub timestamp: String,
    /// Hex rendering of the opaque two-byte transaction type code.
    pub transaction_type: String,
    /// On-card code of the origin station.
    pub from_station_code: u8,
    /// Name of the origin station.
    pub from_station: String,
    /// On-card code of the destination station.
    pub to_station_code: u8,
    /// Name of the destination station.
    pub to_station: String,
    /// Balance after the transaction, in Taka.
    pub balance: u32,
    /// Hex rendering of the opaque trailing two bytes.
    pub trailing: String,
}

/// Parse one 16-byte block into a [`TransactionRecord`].
///
/// `now` is the scan instant the minute offset is anchored to. There
/// is no partial output: the result is a complete record or an error.
///
/// # Errors
/// Returns [`DecodeError::InvalidBlockSize`] unless `block` is exactly
/// [`BLOCK_LEN`] bytes.
#[must_use = "handle the result"]
#[expect(clippy::indexing_slicing, reason = "length is checked above the slices")]
pub fn parse_block(block: &[u8], now: DateTime<Utc>) -> Result<TransactionRecord, DecodeError> {
    if block.len() != BLOCK_LEN {
        return Err(DecodeError::InvalidBlockSize(block.len()));
    }
    let minutes = read_u16_le(block, 4)?;
    let from_station_code = read_u8(block, 8)?;
    let to_station_code = read_u8(block, 10)?;
    let balance = read_u24_le(block, 11)?;
    Ok(TransactionRecord {
        fixed_header: hex_string(&block[0..4]),
        timestamp: decode_minutes_ago(minutes, now),
        transaction_type: hex_string(&block[6..8]),
        from_station_code,
        from_station: station_name(from_station_code),
        to_station_code,
        to_station: station_name(to_station_code),
        balance,
        trailing: hex_string(&block[14..16]),
    })
}
