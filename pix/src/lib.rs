// Copyright (c) 2026 The Presentes Authors

//! PIX BR Code encoder.
//!
//! Produces the textual "Pix Copia e Cola" form of an EMV Merchant-Presented
//! QR code: a flat stream of `id | length | value` fields closed by a
//! CRC16/CCITT-FALSE checksum in field `63`.
//!
//! ```
//! use presentes_pix::encode_pix_payload;
//!
//! let code = encode_pix_payload("test@example.com", 100.50, "Gift Registry", "Sao Paulo");
//! assert!(code.starts_with("000201"));
//! assert!(code.ends_with("6304271D"));
//! ```
//!
//! The read side ([`decode`]) verifies the checksum and pulls the payee
//! fields back out, which is what the CLI uses to inspect a code before
//! sharing it.

#![deny(clippy::print_stdout)]
#![deny(missing_docs)]

pub mod constants;
pub mod crc;
pub mod decode;
pub mod error;
pub mod payload;
pub mod tlv;

pub use crate::crc::{crc16, crc16_hex, crc16_str};
pub use crate::decode::{decode, verify_checksum, DecodedPayload};
pub use crate::error::PixError;
pub use crate::payload::{encode_pix_payload, truncate_chars, PixPayload};
