// Copyright (c) 2026 The Presentes Authors

//! BR Code assembly.
//!
//! Field order is fixed:
//!
//! ```text
//! 00 format indicator | 26 merchant account (00 GUI, 01 key[, 02 message])
//! 52 category | 53 currency | [54 amount] | 58 country | 59 name | 60 city
//! [62 additional data (05 txid)] | 6304 + CRC16
//! ```
//!
//! Name and city are cut to [`MAX_MERCHANT_NAME_LEN`] and
//! [`MAX_MERCHANT_CITY_LEN`] characters. Over-long names are common in
//! practice and banking apps accept the cut form, so this is a silent
//! policy rather than an error.

use crate::{
    constants::{
        id, COUNTRY_CODE, CRC_FIELD_PREFIX, CURRENCY_BRL, GUI_PIX, MAX_FIELD_LEN,
        MAX_MERCHANT_CITY_LEN, MAX_MERCHANT_NAME_LEN, MERCHANT_CATEGORY_CODE,
        PAYLOAD_FORMAT_INDICATOR,
    },
    crc::crc16_hex,
    error::PixError,
    tlv::write_field,
};

/// Encode a static PIX payment code.
///
/// `amount` is in reais. Amounts that are not finite and strictly positive
/// produce an open-value code with no field `54`, in which case the payer
/// types the amount in their banking app. Callers that require an amount
/// must check it before calling.
///
/// This function never fails and is deterministic for identical inputs.
pub fn encode_pix_payload(
    pix_key: &str,
    amount: f64,
    merchant_name: &str,
    merchant_city: &str,
) -> String {
    PixPayload::new(pix_key, merchant_name, merchant_city)
        .amount(amount)
        .encode()
}

/// Return at most the first `max` characters of `s`.
///
/// Counts `char`s, so a multi-byte character is never split.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Format an amount for field `54`, or `None` for an open-value code.
///
/// Exact halves of a cent (`0.125`, `10.625`) round up. `{:.2}` alone would
/// round them to even.
fn format_amount(amount: f64) -> Option<String> {
    if !(amount.is_finite() && amount > 0.0) {
        return None;
    }
    // A half-cent tie is representable only as an odd number of eighths
    let eighths = amount * 8.0;
    let tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    let amount = if tie { amount + 0.001 } else { amount };
    Some(format!("{:.2}", amount))
}

/// A BR Code under construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixPayload<'a> {
    key: &'a str,
    merchant_name: &'a str,
    merchant_city: &'a str,
    amount: Option<f64>,
    txid: Option<&'a str>,
    description: Option<&'a str>,
}

impl<'a> PixPayload<'a> {
    /// Start a payload for the given payee. The key is used verbatim.
    pub fn new(key: &'a str, merchant_name: &'a str, merchant_city: &'a str) -> Self {
        Self {
            key,
            merchant_name,
            merchant_city,
            amount: None,
            txid: None,
            description: None,
        }
    }

    /// Set the amount in reais.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the reference label carried in field `62`/`05`.
    pub fn txid(mut self, txid: &'a str) -> Self {
        self.txid = Some(txid);
        self
    }

    /// Set the message shown to the payer, carried in field `26`/`02`.
    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    /// Merchant name as it will be written.
    pub fn merchant_name(&self) -> &'a str {
        truncate_chars(self.merchant_name, MAX_MERCHANT_NAME_LEN)
    }

    /// Merchant city as it will be written.
    pub fn merchant_city(&self) -> &'a str {
        truncate_chars(self.merchant_city, MAX_MERCHANT_CITY_LEN)
    }

    fn merchant_account_info(&self) -> String {
        let mut info = String::new();
        write_field(&mut info, id::account::GUI, GUI_PIX);
        write_field(&mut info, id::account::KEY, self.key);
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            write_field(&mut info, id::account::DESCRIPTION, description);
        }
        info
    }

    fn additional_data(&self) -> Option<String> {
        self.txid.filter(|t| !t.is_empty()).map(|txid| {
            let mut data = String::new();
            write_field(&mut data, id::additional::TXID, txid);
            data
        })
    }

    /// Encode the payload, including the trailing checksum.
    ///
    /// Total: values too long for a two-digit length are written as-is.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(128);

        write_field(&mut out, id::PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT_INDICATOR);
        write_field(&mut out, id::MERCHANT_ACCOUNT_INFO, &self.merchant_account_info());
        write_field(&mut out, id::MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY_CODE);
        write_field(&mut out, id::TRANSACTION_CURRENCY, CURRENCY_BRL);
        if let Some(amount) = self.amount.and_then(format_amount) {
            write_field(&mut out, id::TRANSACTION_AMOUNT, &amount);
        }
        write_field(&mut out, id::COUNTRY_CODE, COUNTRY_CODE);
        write_field(&mut out, id::MERCHANT_NAME, self.merchant_name());
        write_field(&mut out, id::MERCHANT_CITY, self.merchant_city());
        if let Some(data) = self.additional_data() {
            write_field(&mut out, id::ADDITIONAL_DATA, &data);
        }

        out.push_str(CRC_FIELD_PREFIX);
        let crc = crc16_hex(&out);
        out.push_str(&crc);
        out
    }

    /// Encode the payload, rejecting values the format cannot carry.
    ///
    /// Fails on any value longer than 99 characters and on text outside
    /// Latin-1, whose checksum byte would be ambiguous.
    pub fn try_encode(&self) -> Result<String, PixError> {
        let account = self.merchant_account_info();
        let additional = self.additional_data();
        let amount = self.amount.and_then(format_amount);

        let mut values = vec![
            (id::account::KEY, self.key),
            (id::MERCHANT_ACCOUNT_INFO, account.as_str()),
            (id::MERCHANT_NAME, self.merchant_name()),
            (id::MERCHANT_CITY, self.merchant_city()),
        ];
        if let Some(description) = self.description {
            values.push((id::account::DESCRIPTION, description));
        }
        if let Some(txid) = self.txid {
            values.push((id::additional::TXID, txid));
        }
        if let Some(data) = &additional {
            values.push((id::ADDITIONAL_DATA, data.as_str()));
        }
        if let Some(amount) = &amount {
            values.push((id::TRANSACTION_AMOUNT, amount.as_str()));
        }

        for (tag, value) in values {
            if let Some(ch) = value.chars().find(|c| u32::from(*c) > 0xFF) {
                return Err(PixError::NotLatin1 {
                    id: tag.to_string(),
                    ch,
                });
            }
            let len = value.chars().count();
            if len > MAX_FIELD_LEN {
                return Err(PixError::FieldTooLong {
                    id: tag.to_string(),
                    len,
                });
            }
        }

        Ok(self.encode())
    }
}
