//! Overflow-safe parsing of submitted text into numbers and booleans.
//!
//! Every parser takes the raw text (`None` when the key was absent) and a
//! default that is returned whenever the text cannot be interpreted. Parsers
//! never panic and never surface an error value: "not a number" is an
//! ordinary outcome for user input, so it is reported as the default.
//!
//! # Integers
//!
//! [`parse_int`] and [`parse_long`] accumulate base-10 digits into a
//! negative accumulator, which can represent the type's `MIN` without
//! overflowing. Only a leading `-` is accepted as a sign.
//!
//! ```
//! use request_form::numeric::{parse_int, parse_long};
//!
//! assert_eq!(parse_int(Some("-2147483648"), None), Some(i32::MIN));
//! assert_eq!(parse_int(Some("2147483648"), Some(-1)), Some(-1));
//! assert_eq!(parse_long(Some("+7"), None), None);
//! assert_eq!(parse_long(Some("3.0"), Some(0)), Some(0));
//! ```

/// Generates a strict signed base-10 parser for one integer type.
macro_rules! signed_parser {
    ($(#[$meta:meta])* $name:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $name(text: Option<&str>, default: Option<$ty>) -> Option<$ty> {
            let Some(text) = text else {
                return default;
            };

            let bytes = text.as_bytes();
            let (negative, digits) = match bytes.split_first() {
                None => return default,
                Some((b'-', rest)) => (true, rest),
                Some(_) => (false, bytes),
            };
            if digits.is_empty() {
                return default;
            }

            // Accumulate negatively: |MIN| > MAX, so MIN stays representable.
            let cap = <$ty>::MIN / 10;
            let mut acc: $ty = 0;
            for &byte in digits {
                if !byte.is_ascii_digit() {
                    return default;
                }
                let digit = <$ty>::from(byte - b'0');
                if acc < cap {
                    return default;
                }
                acc *= 10;
                if acc < <$ty>::MIN + digit {
                    return default;
                }
                acc -= digit;
            }

            if negative {
                Some(acc)
            } else if acc == <$ty>::MIN {
                default
            } else {
                Some(-acc)
            }
        }
    };
}

signed_parser!(
    /// Parses `text` as an `i32`, returning `default` if it is absent, empty,
    /// a lone `-`, contains any non-digit, or overflows.
    parse_int,
    i32
);

signed_parser!(
    /// Parses `text` as an `i64`, returning `default` if it is absent, empty,
    /// a lone `-`, contains any non-digit, or overflows.
    parse_long,
    i64
);

/// Clamps `value` into `[min, max]`; an absent bound is the type's extreme.
///
/// An absent value stays absent. When `min > max` the upper bound wins, the
/// same as applying `max` after `min`.
pub fn bound_int(value: Option<i32>, min: Option<i32>, max: Option<i32>) -> Option<i32> {
    value.map(|v| {
        let v = if v < min.unwrap_or(i32::MIN) {
            min.unwrap_or(i32::MIN)
        } else {
            v
        };
        if v > max.unwrap_or(i32::MAX) {
            max.unwrap_or(i32::MAX)
        } else {
            v
        }
    })
}

/// Clamps `value` into `[min, max]`; an absent bound is the type's extreme.
pub fn bound_long(value: Option<i64>, min: Option<i64>, max: Option<i64>) -> Option<i64> {
    value.map(|v| {
        let v = if v < min.unwrap_or(i64::MIN) {
            min.unwrap_or(i64::MIN)
        } else {
            v
        };
        if v > max.unwrap_or(i64::MAX) {
            max.unwrap_or(i64::MAX)
        } else {
            v
        }
    })
}

/// Parses `text` as an `i32` and clamps the result (or the default) into
/// `[min, max]`.
pub fn parse_int_bounded(
    text: Option<&str>,
    default: Option<i32>,
    min: Option<i32>,
    max: Option<i32>,
) -> Option<i32> {
    bound_int(parse_int(text, default), min, max)
}

/// Parses `text` as an `i64` and clamps the result (or the default) into
/// `[min, max]`.
pub fn parse_long_bounded(
    text: Option<&str>,
    default: Option<i64>,
    min: Option<i64>,
    max: Option<i64>,
) -> Option<i64> {
    bound_long(parse_long(text, default), min, max)
}

/// Returns true if `text` is a strict base-10 integer that fits in an `i64`.
pub fn is_number(text: Option<&str>) -> bool {
    parse_long(text, None).is_some()
}

/// A floating literal after trimming and suffix removal.
enum FloatingLiteral<'a> {
    Decimal { negative: bool, digits: &'a str },
    NaN,
    Infinite { negative: bool },
}

fn floating_literal(text: &str) -> Option<FloatingLiteral<'_>> {
    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    match unsigned {
        "NaN" => return Some(FloatingLiteral::NaN),
        "Infinity" => return Some(FloatingLiteral::Infinite { negative }),
        _ => {}
    }

    let digits = unsigned
        .strip_suffix(|c: char| matches!(c, 'd' | 'D' | 'f' | 'F'))
        .unwrap_or(unsigned);
    let starts_with_sign = matches!(digits.as_bytes().first(), Some(b'+' | b'-'));
    let well_formed_chars = digits
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if digits.is_empty() || starts_with_sign || !well_formed_chars {
        return None;
    }

    Some(FloatingLiteral::Decimal { negative, digits })
}

/// Parses `text` as an `f64`.
///
/// Surrounding whitespace and control characters are ignored, a single
/// trailing `d`/`D`/`f`/`F` is accepted, and `NaN` / `Infinity` (optionally
/// signed) are the only words recognised.
///
/// ```
/// use request_form::numeric::parse_double;
///
/// assert_eq!(parse_double(Some(" 7.5d "), None), Some(7.5));
/// assert_eq!(parse_double(Some("-Infinity"), None), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_double(Some("inf"), Some(0.0)), Some(0.0));
/// ```
pub fn parse_double(text: Option<&str>, default: Option<f64>) -> Option<f64> {
    let Some(literal) = text.and_then(floating_literal) else {
        return default;
    };
    match literal {
        FloatingLiteral::NaN => Some(f64::NAN),
        FloatingLiteral::Infinite { negative: true } => Some(f64::NEG_INFINITY),
        FloatingLiteral::Infinite { negative: false } => Some(f64::INFINITY),
        FloatingLiteral::Decimal { negative, digits } => match digits.parse::<f64>() {
            Ok(v) if negative => Some(-v),
            Ok(v) => Some(v),
            Err(_) => default,
        },
    }
}

/// Parses `text` as an `f32`, with the same grammar as [`parse_double`].
pub fn parse_float(text: Option<&str>, default: Option<f32>) -> Option<f32> {
    let Some(literal) = text.and_then(floating_literal) else {
        return default;
    };
    match literal {
        FloatingLiteral::NaN => Some(f32::NAN),
        FloatingLiteral::Infinite { negative: true } => Some(f32::NEG_INFINITY),
        FloatingLiteral::Infinite { negative: false } => Some(f32::INFINITY),
        FloatingLiteral::Decimal { negative, digits } => match digits.parse::<f32>() {
            Ok(v) if negative => Some(-v),
            Ok(v) => Some(v),
            Err(_) => default,
        },
    }
}

/// Parses `text` as a floating number and truncates it toward zero.
///
/// Out-of-range values saturate at the `i32` extremes and `NaN` becomes 0.
/// Unlike [`parse_int`], `"7.9"` yields 7.
pub fn parse_int_permissive(text: Option<&str>, default: Option<i32>) -> Option<i32> {
    match parse_double(text, None) {
        Some(v) => Some(v as i32),
        None => default,
    }
}

/// Upper bound (exclusive, in bytes) on text the lenient boolean parser inspects.
const LENIENT_BOOLEAN_MAX_LEN: usize = 50;

/// Parses `text` as a boolean, leniently.
///
/// After trimming, `true`, `yes`, `1`, `y` and `on` are true and `false`,
/// `no`, `0`, `n` and `off` are false, ignoring ASCII case. Anything else,
/// including text of 50 bytes or more, yields `default`.
///
/// ```
/// use request_form::numeric::parse_boolean;
///
/// assert_eq!(parse_boolean(Some(" Yes "), None), Some(true));
/// assert_eq!(parse_boolean(Some("off"), None), Some(false));
/// assert_eq!(parse_boolean(Some("7.7"), None), None);
/// ```
pub fn parse_boolean(text: Option<&str>, default: Option<bool>) -> Option<bool> {
    let Some(text) = text else {
        return default;
    };
    if text.len() >= LENIENT_BOOLEAN_MAX_LEN {
        return default;
    }

    let word = text.trim_matches(|c: char| c <= ' ');
    let is = |candidates: &[&str]| candidates.iter().any(|c| word.eq_ignore_ascii_case(c));
    if is(&["true", "yes", "1", "y", "on"]) {
        Some(true)
    } else if is(&["false", "no", "0", "n", "off"]) {
        Some(false)
    } else {
        default
    }
}

/// Parses `text` as a boolean, accepting only exactly `"true"` or `"false"`.
pub fn parse_boolean_strict(text: Option<&str>, default: Option<bool>) -> Option<bool> {
    match text {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => default,
    }
}
