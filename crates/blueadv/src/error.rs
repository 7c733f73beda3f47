//! Error types for the blueadv library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Errors raised while walking or decoding advertising data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An AD structure declares more bytes than the payload (or the scan cap) holds.
    #[error("AD structure at offset {offset} declares {declared} bytes but only {available} remain")]
    Truncated {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// A lookup was requested for a type code outside the AD type table.
    #[error("AD type {0:#04x} is not a defined advertising data type")]
    InvalidFieldType(u8),

    #[error("AD field of {len} bytes does not fit a {capacity} byte buffer")]
    FieldTooLong { len: usize, capacity: usize },

    #[error("advertisement filtered out (local name is {name_len} bytes)")]
    UninterestingAdvertisement { name_len: usize },
}

impl DecodeError {
    /// True for errors caused by the calling code rather than by the received data
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DecodeError::InvalidFieldType(_))
    }
}

/// Errors that can occur when framing HCI events
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HciError {
    #[error("Invalid HCI packet format")]
    InvalidPacketFormat,

    #[error("Unexpected HCI packet type: {0:#04x}")]
    UnexpectedPacketType(u8),

    #[error("Unexpected HCI event {event_code:#04x} (subevent {subevent:?})")]
    UnexpectedEvent { event_code: u8, subevent: Option<u8> },

    #[error("Advertising report {index} runs past the end of the event")]
    ReportTruncated { index: usize },
}

