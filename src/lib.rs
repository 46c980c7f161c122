//! Core library for decoding Dhaka MRT Pass transaction history.
//!
//! The crate turns the raw read-response buffer delivered by a FeliCa
//! card read into an ordered sequence of [`history::TransactionRecord`]
//! values, or a typed [`history::DecodeError`]. Acquiring the buffer
//! (NFC plumbing) and rendering the records are the caller's concern;
//! this crate owns only the decoding pipeline: envelope validation,
//! per-block field extraction, station lookup, and timestamp
//! reconstruction.
//!
//! Decoding is synchronous and pure. The card stores transaction times
//! as minutes elapsed before the read instant, so callers capture the
//! scan time once and thread it through [`history::parse_history`]
//! explicitly; the decoder never reads the wall clock itself.

pub mod history;
pub mod station;
pub mod timestamp;
