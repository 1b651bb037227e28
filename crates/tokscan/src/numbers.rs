//! Span-to-value numeric parsing.
//!
//! All functions take a complete token span: the scanner's lookahead contract
//! guarantees the span is bounded by a real delimiter or true end of stream,
//! so "ends in `1e`" is genuinely malformed here and never an artifact of a
//! buffer running dry. Each parser returns the value together with the number
//! of bytes consumed; callers wanting a full-token parse check `consumed`
//! against the span length.
//!
//! Grammar: integer = `'-'? digit+`; float =
//! `'-'? digit+ ('.' digit+)? (('e'|'E') ('-'|'+')? digit+)?`. The decimal
//! separator is always the ASCII `.`; no locale handling.

use bstr::BString;

use crate::error::TokenError;

/// Parses an unsigned decimal integer prefix of `span`.
///
/// Accumulates `value * 10 + digit` with overflow checks and stops at the
/// first non-digit byte.
///
/// # Errors
///
/// [`TokenError::NoDigits`] if the span does not start with a digit,
/// [`TokenError::Overflow`] if the value does not fit a `u64`.
pub fn parse_u64(span: &[u8]) -> Result<(u64, usize), TokenError> {
    let mut value: u64 = 0;
    let mut idx = 0;
    while idx < span.len() && span[idx].is_ascii_digit() {
        let digit = u64::from(span[idx] - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TokenError::Overflow(BString::from(span)))?;
        idx += 1;
    }
    if idx == 0 {
        return Err(TokenError::NoDigits(BString::from(span)));
    }
    Ok((value, idx))
}

/// Parses a signed decimal integer prefix of `span`.
///
/// An optional leading `-` sets the sign; digits accumulate as a negative
/// magnitude so `i64::MIN` parses without overflow. `-0` yields `0`: the
/// integer type has no signed zero (floats keep theirs, see [`parse_f64`]).
///
/// # Errors
///
/// [`TokenError::NoDigits`] if no digit follows the optional sign,
/// [`TokenError::Overflow`] if the value does not fit an `i64`.
pub fn parse_i64(span: &[u8]) -> Result<(i64, usize), TokenError> {
    let negative = span.first() == Some(&b'-');
    let digits = if negative { &span[1..] } else { span };

    let mut value: i64 = 0;
    let mut idx = 0;
    while idx < digits.len() && digits[idx].is_ascii_digit() {
        let digit = i64::from(digits[idx] - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(digit))
            .ok_or_else(|| TokenError::Overflow(BString::from(span)))?;
        idx += 1;
    }
    if idx == 0 {
        // Bare `-` or a non-numeric first byte.
        return Err(TokenError::NoDigits(BString::from(span)));
    }
    if !negative {
        value = value
            .checked_neg()
            .ok_or_else(|| TokenError::Overflow(BString::from(span)))?;
    }
    Ok((value, idx + usize::from(negative)))
}

/// Parses a floating-point prefix of `span`.
///
/// The grammar (sign, integer digits, optional fraction, optional exponent)
/// is scanned by hand to establish the consumed length and reject incomplete
/// shapes; the numeric conversion itself is delegated to [`str::parse`] so
/// results are correctly rounded. `-0` yields IEEE-754 negative zero.
///
/// # Errors
///
/// [`TokenError::NoDigits`] if no digit follows the optional sign,
/// [`TokenError::EmptyFraction`] for a decimal point with no digits after it,
/// [`TokenError::EmptyExponent`] for `e`/`E` (and optional sign) with no
/// digits after it.
pub fn parse_f64(span: &[u8]) -> Result<(f64, usize), TokenError> {
    let mut idx = 0;
    if span.first() == Some(&b'-') {
        idx += 1;
    }

    let int_start = idx;
    while idx < span.len() && span[idx].is_ascii_digit() {
        idx += 1;
    }
    if idx == int_start {
        return Err(TokenError::NoDigits(BString::from(span)));
    }

    if idx < span.len() && span[idx] == b'.' {
        idx += 1;
        let frac_start = idx;
        while idx < span.len() && span[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == frac_start {
            return Err(TokenError::EmptyFraction(BString::from(span)));
        }
    }

    if idx < span.len() && matches!(span[idx], b'e' | b'E') {
        idx += 1;
        if idx < span.len() && matches!(span[idx], b'+' | b'-') {
            idx += 1;
        }
        let exp_start = idx;
        while idx < span.len() && span[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == exp_start {
            return Err(TokenError::EmptyExponent(BString::from(span)));
        }
    }

    // The scanned prefix is all ASCII and matches Rust's own float grammar.
    let text = std::str::from_utf8(&span[..idx]).expect("scanned numeric prefix is ASCII");
    let value: f64 = text.parse().expect("scanned prefix matches float grammar");
    Ok((value, idx))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn u64_basic() {
        assert_eq!(parse_u64(b"42"), Ok((42, 2)));
        assert_eq!(parse_u64(b"0"), Ok((0, 1)));
        assert_eq!(parse_u64(b"18446744073709551615"), Ok((u64::MAX, 20)));
    }

    #[test]
    fn u64_stops_at_first_non_digit() {
        assert_eq!(parse_u64(b"12a"), Ok((12, 2)));
        assert_eq!(parse_u64(b"7."), Ok((7, 1)));
    }

    #[test]
    fn i64_signs_and_extremes() {
        assert_eq!(parse_i64(b"-5"), Ok((-5, 2)));
        assert_eq!(parse_i64(b"9223372036854775807"), Ok((i64::MAX, 19)));
        assert_eq!(parse_i64(b"-9223372036854775808"), Ok((i64::MIN, 20)));
    }

    #[test]
    fn minus_zero_is_plain_zero_for_integers() {
        assert_eq!(parse_i64(b"-0"), Ok((0, 2)));
    }

    #[rstest]
    #[case(b"" as &[u8])]
    #[case(b"-")]
    #[case(b"--5")]
    #[case(b"a12")]
    #[case(b".5")]
    fn i64_rejects_digitless_tokens(#[case] span: &[u8]) {
        assert!(matches!(parse_i64(span), Err(TokenError::NoDigits(_))));
    }

    #[rstest]
    #[case(b"9223372036854775808" as &[u8])]
    #[case(b"-9223372036854775809")]
    #[case(b"99999999999999999999")]
    fn i64_detects_overflow(#[case] span: &[u8]) {
        assert!(matches!(parse_i64(span), Err(TokenError::Overflow(_))));
    }

    #[test]
    fn f64_shapes() {
        assert_eq!(parse_f64(b"3.25"), Ok((3.25, 4)));
        assert_eq!(parse_f64(b"-1.5e3"), Ok((-1500.0, 6)));
        assert_eq!(parse_f64(b"2E-2"), Ok((0.02, 4)));
        assert_eq!(parse_f64(b"10"), Ok((10.0, 2)));
    }

    #[test]
    fn f64_consumed_stops_at_trailing_garbage() {
        let (value, consumed) = parse_f64(b"1.5x").unwrap();
        assert_eq!((value, consumed), (1.5, 3));
    }

    #[test]
    fn f64_preserves_negative_zero() {
        let (value, _) = parse_f64(b"-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
        let (value, _) = parse_f64(b"-0.0").unwrap();
        assert!(value.is_sign_negative());
    }

    #[rstest]
    #[case(b"1." as &[u8], TokenError::EmptyFraction(BString::from(b"1." as &[u8])))]
    #[case(b"1e", TokenError::EmptyExponent(BString::from(b"1e" as &[u8])))]
    #[case(b"1e+", TokenError::EmptyExponent(BString::from(b"1e+" as &[u8])))]
    #[case(b"2.5E-", TokenError::EmptyExponent(BString::from(b"2.5E-" as &[u8])))]
    fn f64_rejects_incomplete_tokens(#[case] span: &[u8], #[case] expected: TokenError) {
        assert_eq!(parse_f64(span), Err(expected));
    }

    #[test]
    fn f64_rounds_correctly() {
        // Exercise the str::parse delegation rather than naive accumulation.
        let (value, _) = parse_f64(b"0.1").unwrap();
        assert_eq!(value, 0.1f64);
        let (value, _) = parse_f64(b"1.7976931348623157e308").unwrap();
        assert_eq!(value, f64::MAX);
    }
}
