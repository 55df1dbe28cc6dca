// Copyright (c) 2026 The Presentes Authors

//! Error types for strict encoding and for decoding BR Codes.
//!
//! The plain encoder never fails; these only surface from
//! [`PixPayload::try_encode`](crate::PixPayload::try_encode) and the
//! [`decode`](crate::decode) module.

use displaydoc::Display;
use thiserror::Error;

/// Errors produced while reading or strictly writing a BR Code.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum PixError {
    /// Payload ends in the middle of a field
    Truncated,

    /// Field {0} has a malformed length
    InvalidLength(String),

    /// Required field {0} is missing
    MissingField(&'static str),

    /// Payload does not end with a 6304 checksum field
    MissingChecksum,

    /// Checksum mismatch: payload carries {found}, computed {expected}
    ChecksumMismatch {
        /// Checksum computed over the payload
        expected: String,
        /// Checksum found at the end of the payload
        found: String,
    },

    /// Unsupported payload format indicator: {0}
    UnsupportedFormat(String),

    /// No merchant account template carries a PIX key
    NotPix,

    /// Field {id} is {len} characters, longer than a two-digit length allows
    FieldTooLong {
        /// Field identifier
        id: String,
        /// Length of the offending value in characters
        len: usize,
    },

    /// Field {id} contains '{ch}', which has no Latin-1 encoding
    NotLatin1 {
        /// Field identifier
        id: String,
        /// First offending character
        ch: char,
    },
}
