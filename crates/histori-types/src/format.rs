// SPDX-FileCopyrightText: 2025 Histori Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Display helpers for raw token amounts
//!
//! The API returns amounts as raw decimal strings scaled by the token's
//! `decimals`. These helpers render them for humans without ever routing the
//! value through a float, so amounts beyond `u128` still format exactly.

/// Scale a raw integer amount down by `decimals` and render it with exactly
/// `precision` fractional digits.
///
/// The fractional part is truncated, not rounded. Returns `None` when `raw`
/// is not a plain unsigned decimal string.
///
/// ```
/// use histori_types::format::pretty_balance;
///
/// assert_eq!(pretty_balance("771696194828", 8, 2), Some("7716.96".to_string()));
/// assert_eq!(pretty_balance("5", 3, 4), Some("0.0050".to_string()));
/// ```
pub fn pretty_balance(raw: &str, decimals: usize, precision: usize) -> Option<String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = raw.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let padded = if digits.len() <= decimals {
        format!("{digits:0>width$}", width = decimals + 1)
    } else {
        digits.to_string()
    };

    let split = padded.len() - decimals;
    let whole = &padded[..split];
    let mut fraction = padded[split..].to_string();

    if precision == 0 {
        return Some(whole.to_string());
    }

    fraction.truncate(precision);
    let fraction = format!("{fraction:0<precision$}");
    Some(format!("{whole}.{fraction}"))
}

/// Parse a raw decimal amount string into an integer.
///
/// Returns `None` for anything that is not an unsigned decimal number or that
/// exceeds `u128`.
pub fn parse_raw_amount(input: &str) -> Option<u128> {
    input.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_and_truncates() {
        assert_eq!(pretty_balance("771696194828", 8, 2), Some("7716.96".to_string()));
        assert_eq!(pretty_balance("123456789", 6, 4), Some("123.4567".to_string()));
    }

    #[test]
    fn pads_small_amounts() {
        assert_eq!(pretty_balance("5", 3, 4), Some("0.0050".to_string()));
        assert_eq!(pretty_balance("0", 18, 2), Some("0.00".to_string()));
    }

    #[test]
    fn zero_precision_drops_the_point() {
        assert_eq!(pretty_balance("123456789", 6, 0), Some("123".to_string()));
    }

    #[test]
    fn handles_amounts_beyond_u128() {
        // 51 digits, scaled by 18
        let raw = "123456789012345678901234567890123456789012345678901";
        let rendered = pretty_balance(raw, 18, 2).unwrap();
        assert_eq!(rendered, "123456789012345678901234567890123.45");
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!(pretty_balance("12.5", 2, 2), None);
        assert_eq!(pretty_balance("-5", 2, 2), None);
        assert_eq!(pretty_balance("", 2, 2), None);
        assert_eq!(pretty_balance("0x10", 2, 2), None);
    }

    #[test]
    fn parse_raw_amount_bounds() {
        assert_eq!(parse_raw_amount("42"), Some(42));
        assert_eq!(parse_raw_amount("not-a-number"), None);
        // one past u128::MAX
        assert_eq!(
            parse_raw_amount("340282366920938463463374607431768211456"),
            None
        );
    }
}
