//! Envelope validation and block iteration for a full read response.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::{
    BLOCK_COUNT_OFFSET,
    BLOCK_LEN,
    HEADER_LEN,
    STATUS_FLAG1_OFFSET,
    STATUS_FLAG2_OFFSET,
    errors::DecodeError,
    record::{TransactionRecord, parse_block},
    wire::{hex_string, read_u8},
};

/// Decode a full read response into transaction records.
///
/// Validates the envelope (length, status flags, block count against
/// the payload), then parses each 16-byte block in physical order.
/// `now` is the scan instant; see [`crate::timestamp`] for why it must
/// be the time of the scan that produced `response`.
///
/// The contract is strict all-or-nothing: if any block fails, the
/// whole parse fails and no records are returned, so a caller can
/// never mistake a truncated tail for a complete history.
///
/// # Errors
/// Returns [`DecodeError::ResponseTooShort`] when the envelope is
/// truncated, [`DecodeError::CardStatus`] when either status flag is
/// non-zero, [`DecodeError::IncompleteBlockData`] when the declared
/// block count exceeds the payload, and any block-level error
/// unchanged.
#[must_use = "handle the result"]
#[expect(clippy::indexing_slicing, reason = "bounds are validated before each slice")]
pub fn parse_history(
    response: &[u8],
    now: DateTime<Utc>,
) -> Result<Vec<TransactionRecord>, DecodeError> {
    trace!(payload = %hex_string(response), "raw read response");
    if response.len() < HEADER_LEN {
        return Err(DecodeError::ResponseTooShort(response.len()));
    }
    let flag1 = read_u8(response, STATUS_FLAG1_OFFSET)?;
    let flag2 = read_u8(response, STATUS_FLAG2_OFFSET)?;
    if flag1 != 0 || flag2 != 0 {
        return Err(DecodeError::CardStatus { flag1, flag2 });
    }
    let block_count = usize::from(read_u8(response, BLOCK_COUNT_OFFSET)?);
    let block_data = &response[HEADER_LEN..];
    let declared = block_count * BLOCK_LEN;
    if block_data.len() < declared {
        return Err(DecodeError::IncompleteBlockData {
            declared,
            available: block_data.len(),
        });
    }
    debug!(blocks = block_count, "decoding transaction history");
    let mut records = Vec::with_capacity(block_count);
    for i in 0..block_count {
        let start = i * BLOCK_LEN;
        records.push(parse_block(&block_data[start..start + BLOCK_LEN], now)?);
    }
    debug!(records = records.len(), "transaction history decoded");
    Ok(records)
}
