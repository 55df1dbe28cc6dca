// Copyright (c) 2026 The Presentes Authors

//! Text TLV fields: a two-digit id, a two-digit decimal length, then the
//! value itself.
//!
//! Lengths count characters, not UTF-8 bytes: a BR Code is Latin-1 text, so
//! `São` is three long.

use crate::error::PixError;

/// Append one `id | length | value` field to `out`.
///
/// The length is the value's character count, zero-padded to two digits.
/// Values over 99 characters are written with a wider length and will not parse
/// back; [`PixPayload::try_encode`](crate::PixPayload::try_encode) rejects
/// them up front.
pub fn write_field(out: &mut String, id: &str, value: &str) {
    out.push_str(id);
    out.push_str(&format!("{:02}", value.chars().count()));
    out.push_str(value);
}

/// Build a single field as an owned string.
pub fn field(id: &str, value: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2 + value.len());
    write_field(&mut out, id, value);
    out
}

/// Split `s` after its first `n` characters.
fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    s.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .nth(n)
        .map(|end| s.split_at(end))
}

/// One parsed field, borrowing from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Two-digit field id
    pub id: &'a str,
    /// Field value
    pub value: &'a str,
}

/// Iterator over the fields of a TLV stream.
///
/// Yields an error and stops at the first malformed field.
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    /// Start parsing `s` from its first field.
    pub fn parse(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn next_field(&mut self) -> Result<Field<'a>, PixError> {
        let (id, rest) = split_chars(self.rest, 2).ok_or(PixError::Truncated)?;
        let (len_digits, rest) = split_chars(rest, 2).ok_or(PixError::Truncated)?;

        if !len_digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PixError::InvalidLength(id.to_string()));
        }
        let len: usize = len_digits
            .parse()
            .map_err(|_| PixError::InvalidLength(id.to_string()))?;

        let (value, rest) = split_chars(rest, len).ok_or(PixError::Truncated)?;
        self.rest = rest;

        Ok(Field { id, value })
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<Field<'a>, PixError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let field = self.next_field();
        if field.is_err() {
            self.rest = "";
        }
        Some(field)
    }
}
