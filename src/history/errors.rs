//! Error types for read-response decoding.

use thiserror::Error;

/// Errors that can occur while decoding a read response.
///
/// Every variant carries the context a caller needs to decide whether
/// to prompt a re-scan: the offending offset, the declared versus
/// actual lengths, or the card's status flags. Decoding is
/// all-or-nothing, so any of these means zero records were produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A field read would pass the end of the buffer; the block or
    /// response is truncated or corrupt.
    #[error("read at offset {offset} out of range for {len}-byte buffer")]
    OutOfRange {
        /// Offset the read started at.
        offset: usize,
        /// Length of the buffer that was read.
        len: usize,
    },
    /// A block slice is not exactly one block long.
    #[error("invalid block size {0}")]
    InvalidBlockSize(usize),
    /// The response ends before the 13-byte envelope does.
    #[error("response too short ({0} bytes)")]
    ResponseTooShort(usize),
    /// The card reported a non-zero status; a card or reader level
    /// failure rather than a malformed payload.
    #[error("card status error ({flag1:#04x}, {flag2:#04x})")]
    CardStatus {
        /// First status flag from the envelope.
        flag1: u8,
        /// Second status flag from the envelope.
        flag2: u8,
    },
    /// The envelope declares more blocks than the payload holds.
    #[error("incomplete block data: {declared} bytes declared, {available} available")]
    IncompleteBlockData {
        /// Payload bytes required by the declared block count.
        declared: usize,
        /// Payload bytes actually present.
        available: usize,
    },
}
