// Copyright (c) 2026 The Presentes Authors

//! Fixed BR Code protocol values.
//!
//! These are protocol constants, not configuration.

/// Field identifiers used in a PIX BR Code.
pub mod id {
    /// Payload Format Indicator
    pub const PAYLOAD_FORMAT_INDICATOR: &str = "00";
    /// Merchant Account Information template used for PIX
    pub const MERCHANT_ACCOUNT_INFO: &str = "26";
    /// Merchant Category Code
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    /// Transaction Currency
    pub const TRANSACTION_CURRENCY: &str = "53";
    /// Transaction Amount
    pub const TRANSACTION_AMOUNT: &str = "54";
    /// Country Code
    pub const COUNTRY_CODE: &str = "58";
    /// Merchant Name
    pub const MERCHANT_NAME: &str = "59";
    /// Merchant City
    pub const MERCHANT_CITY: &str = "60";
    /// Additional Data Field Template
    pub const ADDITIONAL_DATA: &str = "62";
    /// CRC16 checksum
    pub const CRC: &str = "63";

    /// Sub-fields of the Merchant Account Information template.
    pub mod account {
        /// Globally Unique Identifier of the arrangement
        pub const GUI: &str = "00";
        /// PIX key
        pub const KEY: &str = "01";
        /// Free-text message shown to the payer
        pub const DESCRIPTION: &str = "02";
    }

    /// Sub-fields of the Additional Data Field Template.
    pub mod additional {
        /// Reference label, carried as the PIX transaction id
        pub const TXID: &str = "05";
    }
}

/// Payload format version; always "01".
pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";

/// Arrangement identifier for PIX inside the merchant account template.
pub const GUI_PIX: &str = "BR.GOV.BCB.PIX";

/// Merchant Category Code placeholder; PIX does not use MCCs.
pub const MERCHANT_CATEGORY_CODE: &str = "0000";

/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";

/// ISO 3166-1 alpha-2 country code.
pub const COUNTRY_CODE: &str = "BR";

/// Merchant names longer than this are cut, not rejected.
pub const MAX_MERCHANT_NAME_LEN: usize = 25;

/// Merchant cities longer than this are cut, not rejected.
pub const MAX_MERCHANT_CITY_LEN: usize = 15;

/// Largest value a two-digit length can describe.
pub const MAX_FIELD_LEN: usize = 99;

/// Tag and fixed length of the checksum field.
pub const CRC_FIELD_PREFIX: &str = "6304";

/// Hex digits in the checksum value.
pub const CRC_HEX_LEN: usize = 4;

/// Template ids that may carry merchant account information.
pub const MERCHANT_ACCOUNT_TEMPLATES: core::ops::RangeInclusive<u8> = 26..=51;
