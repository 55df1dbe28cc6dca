// Copyright (c) 2026 The Presentes Authors

//! Reading BR Codes back.
//!
//! Accepts codes from this crate and from other issuers: the merchant
//! account may sit in any template from `26` to `51`, the GUI is compared
//! case-insensitively, and unknown fields are skipped.

use serde::Serialize;

use crate::{
    constants::{
        id, CRC_FIELD_PREFIX, CRC_HEX_LEN, GUI_PIX, MERCHANT_ACCOUNT_TEMPLATES,
        PAYLOAD_FORMAT_INDICATOR,
    },
    crc::crc16_hex,
    error::PixError,
    tlv::{Field, Fields},
};

/// Payee and payment fields extracted from a BR Code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedPayload {
    /// PIX key of the payee
    pub pix_key: String,
    /// Amount as written in the code; `None` for open-value codes
    pub amount: Option<String>,
    /// Merchant name
    pub merchant_name: String,
    /// Merchant city
    pub merchant_city: String,
    /// ISO 4217 numeric currency code
    pub currency: Option<String>,
    /// Country code
    pub country: Option<String>,
    /// Reference label from the additional data template
    pub txid: Option<String>,
    /// Message to the payer
    pub description: Option<String>,
    /// Checksum carried by the code
    pub crc: String,
}

/// Check the trailing `6304XXXX` field against the rest of the payload.
pub fn verify_checksum(payload: &str) -> Result<(), PixError> {
    let split = payload
        .len()
        .checked_sub(CRC_HEX_LEN)
        .ok_or(PixError::MissingChecksum)?;
    let body = payload.get(..split).ok_or(PixError::MissingChecksum)?;
    let found = &payload[split..];

    if !body.ends_with(CRC_FIELD_PREFIX) {
        return Err(PixError::MissingChecksum);
    }

    let expected = crc16_hex(body);
    if found.to_ascii_uppercase() != expected {
        return Err(PixError::ChecksumMismatch {
            expected,
            found: found.to_string(),
        });
    }
    Ok(())
}

fn is_account_template(tag: &str) -> bool {
    tag.parse::<u8>()
        .map(|n| MERCHANT_ACCOUNT_TEMPLATES.contains(&n))
        .unwrap_or(false)
}

/// Read the PIX key and message from a merchant account template.
///
/// Returns `Ok(None)` when the template belongs to another arrangement.
fn read_account(value: &str) -> Result<Option<(String, Option<String>)>, PixError> {
    let mut gui = None;
    let mut key = None;
    let mut description = None;

    for field in Fields::parse(value) {
        let Field { id: tag, value } = field?;
        match tag {
            id::account::GUI => gui = Some(value),
            id::account::KEY => key = Some(value.to_string()),
            id::account::DESCRIPTION => description = Some(value.to_string()),
            _ => {}
        }
    }

    match gui {
        Some(gui) if gui.eq_ignore_ascii_case(GUI_PIX) => {
            let key = key.ok_or(PixError::MissingField("26/01"))?;
            Ok(Some((key, description)))
        }
        _ => Ok(None),
    }
}

fn read_txid(value: &str) -> Result<Option<String>, PixError> {
    for field in Fields::parse(value) {
        let field = field?;
        if field.id == id::additional::TXID {
            return Ok(Some(field.value.to_string()));
        }
    }
    Ok(None)
}

/// Verify and decode a BR Code.
pub fn decode(payload: &str) -> Result<DecodedPayload, PixError> {
    verify_checksum(payload)?;

    let mut fields = Fields::parse(payload);
    match fields.next() {
        Some(Ok(Field {
            id: id::PAYLOAD_FORMAT_INDICATOR,
            value,
        })) => {
            if value != PAYLOAD_FORMAT_INDICATOR {
                return Err(PixError::UnsupportedFormat(value.to_string()));
            }
        }
        Some(Err(err)) => return Err(err),
        _ => return Err(PixError::MissingField(id::PAYLOAD_FORMAT_INDICATOR)),
    }

    let mut decoded = DecodedPayload::default();
    let mut account = None;
    let mut name = None;
    let mut city = None;

    for field in fields {
        let Field { id: tag, value } = field?;
        match tag {
            id::TRANSACTION_CURRENCY => decoded.currency = Some(value.to_string()),
            id::TRANSACTION_AMOUNT => decoded.amount = Some(value.to_string()),
            id::COUNTRY_CODE => decoded.country = Some(value.to_string()),
            id::MERCHANT_NAME => name = Some(value.to_string()),
            id::MERCHANT_CITY => city = Some(value.to_string()),
            id::ADDITIONAL_DATA => decoded.txid = read_txid(value)?,
            id::CRC => decoded.crc = value.to_string(),
            _ if account.is_none() && is_account_template(tag) => account = read_account(value)?,
            _ => {}
        }
    }

    let (pix_key, description) = account.ok_or(PixError::NotPix)?;
    decoded.pix_key = pix_key;
    decoded.description = description;
    decoded.merchant_name = name.ok_or(PixError::MissingField(id::MERCHANT_NAME))?;
    decoded.merchant_city = city.ok_or(PixError::MissingField(id::MERCHANT_CITY))?;

    Ok(decoded)
}
