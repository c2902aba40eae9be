//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Strategy: an optional `-` followed by 1..=`max_digits` ASCII digits.
pub(crate) fn arb_signed_digits(max_digits: usize) -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(0u8..10, 1..=max_digits)).prop_map(
        |(negative, digits)| {
            let body: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
            if negative {
                format!("-{}", body)
            } else {
                body
            }
        },
    )
}

/// Strategy: a plausible field name.
pub(crate) fn arb_field_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").unwrap()
}

/// Strategy: a raw submitted value, biased toward number-like text.
pub(crate) fn arb_raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_signed_digits(12),
        any::<f64>().prop_map(|v| v.to_string()),
        prop::string::string_regex("[ -~]{0,12}").unwrap(),
    ]
}
