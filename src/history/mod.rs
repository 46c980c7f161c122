//! Decoding of the card read response into transaction records.
//!
//! A read response is a fixed 13-byte envelope followed by zero or more
//! 16-byte blocks, one block per stored transaction. The envelope
//! carries two card status flags and the block count; the blocks carry
//! the transaction fields. [`parse_history`] validates the envelope and
//! drives [`parse_block`] over each block in physical order.

pub mod errors;
pub mod record;
pub mod response;
pub mod wire;

pub use errors::DecodeError;
pub use record::{TransactionRecord, parse_block};
pub use response::parse_history;

/// Length of one transaction block in bytes.
pub const BLOCK_LEN: usize = 16;
/// Length of the response envelope preceding the block payload.
pub const HEADER_LEN: usize = 13;
/// Envelope offset of the first card status flag.
pub const STATUS_FLAG1_OFFSET: usize = 10;
/// Envelope offset of the second card status flag.
pub const STATUS_FLAG2_OFFSET: usize = 11;
/// Envelope offset of the stored block count.
pub const BLOCK_COUNT_OFFSET: usize = 12;

/// Balance reported by the first record of a decoded history.
///
/// [`parse_history`] preserves physical block order, and the card
/// places the balance to display in its first stored block. Returns
/// `None` for an empty history.
#[must_use]
pub const fn latest_balance(records: &[TransactionRecord]) -> Option<u32> {
    match records {
        [first, ..] => Some(first.balance),
        [] => None,
    }
}
