// Copyright (c) 2026 The Presentes Authors

//! Parsing contribution amounts typed by guests.
//!
//! The encoder treats a non-positive amount as "let the payer choose", so
//! anything the guest typed must be checked here before it reaches it.

use anyhow::{bail, Context, Result};

/// Largest amount that fits the 13-character amount field ("9999999999.99").
pub const MAX_AMOUNT: f64 = 9_999_999_999.99;

/// Parse an amount in reais.
///
/// Accepts `100`, `100.50`, `100,50` and thousands grouped with dots as in
/// `1.000,50` or `1.000.000`. At most two decimals. A lone `1.000` could be
/// one real or a thousand, so it is refused. The result is finite, positive
/// and no larger than [`MAX_AMOUNT`].
pub fn parse_amount(s: &str) -> Result<f64> {
    let s = s.trim();

    if is_ambiguous(s) {
        bail!(
            "Ambiguous amount '{}'. Use a comma for cents, e.g. '1.000,00' or '1,00'.",
            s
        );
    }

    let normalized = normalize(s)
        .with_context(|| format!("Invalid amount '{}'. Please enter a number.", s))?;
    let amount: f64 = normalized
        .parse()
        .with_context(|| format!("Invalid amount '{}'. Please enter a number.", s))?;

    if !amount.is_finite() {
        bail!("Invalid amount '{}'", s);
    }
    if amount <= 0.0 {
        bail!("Amount must be positive");
    }
    if amount > MAX_AMOUNT {
        bail!("Amount too large. Maximum is R$ {:.2}", MAX_AMOUNT);
    }

    Ok(amount)
}

/// Rewrite a typed amount as `digits[.cents]`, or `None` if it is ambiguous.
fn normalize(s: &str) -> Option<String> {
    // ',' is always decimal. '.' is decimal only when followed by one or two
    // digits and nothing before it is grouped.
    let (whole, cents) = match s.rsplit_once(',') {
        Some((whole, cents)) => (whole, Some(cents)),
        None => match s.rsplit_once('.') {
            Some((whole, cents)) if cents.len() <= 2 && !whole.contains('.') => {
                (whole, Some(cents))
            }
            _ => (s, None),
        },
    };

    if let Some(cents) = cents {
        if !(1..=2).contains(&cents.len()) || !all_digits(cents) {
            return None;
        }
    }

    let digits = if whole.contains('.') {
        let mut groups = whole.split('.');
        let head = groups.next()?;
        if head.len() > 3 || !all_digits(head) {
            return None;
        }
        let mut digits = head.to_string();
        for group in groups {
            if group.len() != 3 || !all_digits(group) {
                return None;
            }
            digits.push_str(group);
        }
        digits
    } else if all_digits(whole) {
        whole.to_string()
    } else {
        return None;
    };

    Some(match cents {
        Some(cents) => format!("{}.{}", digits, cents),
        None => digits,
    })
}

/// One dot followed by exactly three digits, and no comma.
fn is_ambiguous(s: &str) -> bool {
    !s.contains(',')
        && s.matches('.').count() == 1
        && s.rsplit_once('.')
            .is_some_and(|(whole, frac)| frac.len() == 3 && all_digits(whole) && all_digits(frac))
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("100.50").unwrap(), 100.5);
        assert_eq!(parse_amount(" 0.01 ").unwrap(), 0.01);
    }

    #[test]
    fn test_parse_brazilian_format() {
        assert_eq!(parse_amount("100,50").unwrap(), 100.5);
        assert_eq!(parse_amount("1.000,50").unwrap(), 1000.5);
        assert_eq!(parse_amount("9.999,99").unwrap(), 9999.99);
    }

    #[test]
    fn test_reject_non_positive() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("0,00").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn test_reject_garbage() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_thousands_grouping() {
        assert_eq!(parse_amount("1.000,00").unwrap(), 1000.0);
        assert_eq!(parse_amount("1.000.000").unwrap(), 1_000_000.0);
        assert_eq!(parse_amount("12.345,6").unwrap(), 12345.6);
        assert_eq!(parse_amount("1.00").unwrap(), 1.0);
        assert_eq!(parse_amount("1.5").unwrap(), 1.5);
    }

    #[test]
    fn test_reject_mixed_conventions() {
        assert!(parse_amount("1,000.50").is_err());
        assert!(parse_amount("1,000").is_err());
        assert!(parse_amount("1.5.00").is_err());
        assert!(parse_amount("1.0000,50").is_err());
        assert!(parse_amount("1000.000,50").is_err());
    }

    #[test]
    fn test_reject_ambiguous_single_group() {
        let err = parse_amount("1.000").unwrap_err();
        assert!(err.to_string().contains("Ambiguous amount '1.000'"));
        assert!(parse_amount("10.005").is_err());
        assert!(parse_amount("250.000").is_err());
    }

    #[test]
    fn test_reject_more_than_two_decimals() {
        assert!(parse_amount("10.0050").is_err());
        assert!(parse_amount("10,005").is_err());
        assert!(parse_amount("1.000,505").is_err());
    }

    #[test]
    fn test_reject_other_number_syntax() {
        assert!(parse_amount("1e3").is_err());
        assert!(parse_amount("+5").is_err());
        assert!(parse_amount(".50").is_err());
        assert!(parse_amount("5.").is_err());
        assert!(parse_amount("5,").is_err());
        assert!(parse_amount("R$ 5").is_err());
    }

    #[test]
    fn test_reject_too_large() {
        assert!(parse_amount("10000000000").is_err());
        assert!(parse_amount("9999999999.99").is_ok());
    }
}
