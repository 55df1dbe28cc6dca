// Copyright (c) 2026 The Presentes Authors

//! CRC16/CCITT-FALSE as required by the EMV QR checksum field.
//!
//! Polynomial `0x1021`, initial value `0xFFFF`, no reflection and no final
//! XOR. The `crc` crate catalogues this parameter set as `CRC_16_IBM_3740`.
//!
//! BR Code text is checksummed one byte per character, in Latin-1. Characters
//! above `U+00FF` have no Latin-1 byte; they contribute their low eight bits,
//! which is what 16-bit masked arithmetic over UTF-16 code units yields.

use crc::{Crc, CRC_16_IBM_3740};

static CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Compute the checksum over raw bytes.
pub fn crc16(data: &[u8]) -> u16 {
    CCITT_FALSE.checksum(data)
}

/// Checksum of `s`, one byte per character.
pub fn crc16_str(s: &str) -> u16 {
    let mut digest = CCITT_FALSE.digest();
    for c in s.chars() {
        digest.update(&[latin1_byte(c)]);
    }
    digest.finalize()
}

/// Compute the checksum of `s` as four uppercase hex digits.
pub fn crc16_hex(s: &str) -> String {
    format!("{:04X}", crc16_str(s))
}

fn latin1_byte(c: char) -> u8 {
    (u32::from(c) & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit-at-a-time reference of the same polynomial.
    fn crc16_bitwise(data: &[u8]) -> u16 {
        let mut crc: u16 = 0xFFFF;
        for &byte in data {
            crc ^= u16::from(byte) << 8;
            for _ in 0..8 {
                crc = if crc & 0x8000 != 0 {
                    (crc << 1) ^ 0x1021
                } else {
                    crc << 1
                };
            }
        }
        crc
    }

    #[test]
    fn test_check_value() {
        assert_eq!(crc16(b"123456789"), 0x29B1);
        assert_eq!(crc16_hex("123456789"), "29B1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc16(&[]), 0xFFFF);
        assert_eq!(crc16_hex(""), "FFFF");
    }

    #[test]
    fn test_zero_padded() {
        assert_eq!(crc16_hex("A"), "B915");
        assert_eq!(crc16(b"HM"), 0x0003);
        assert_eq!(crc16_hex("HM"), "0003");
        assert_eq!(crc16_hex("GL"), "001C");
    }

    #[test]
    fn test_latin1_one_byte_per_char() {
        assert_eq!(crc16_hex("São"), "13AA");
        assert_eq!(crc16_str("São"), crc16(&[b'S', 0xE3, b'o']));
        assert_eq!(crc16_hex("ã"), "2CBD");
        assert_eq!(crc16_str("123456789"), 0x29B1);
    }

    #[test]
    fn test_above_latin1_uses_low_byte() {
        assert_eq!(crc16_hex("\u{0101}"), "F1D1");
        assert_eq!(crc16_str("\u{0101}"), crc16(&[0x01]));
    }

    #[test]
    fn test_matches_bitwise_reference() {
        let inputs: [&[u8]; 4] = [
            b"",
            b"6304",
            b"00020126380014BR.GOV.BCB.PIX0116test@example.com6304",
            &[0x00, 0xFF, 0x80, 0x7F],
        ];
        for input in inputs {
            assert_eq!(crc16(input), crc16_bitwise(input));
        }
    }
}
