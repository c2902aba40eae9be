//! Integration property tests for request-form.
//!
//! These tests check cross-module invariants through the public API:
//! numeric parsing against the standard library, validator decisions
//! against their bounds, and result aggregation.

use proptest::prelude::*;
use request_form::numeric::{bound_int, parse_boolean, parse_int, parse_long};
use request_form::{
    CombinedResult, ErrorKind, MapValues, NumberField, Outcome, RequestForm, TextField,
    ValidationResult,
};

// Strategy: an optional minus sign followed by up to 20 digits
fn arb_decimal_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?[0-9]{1,20}").unwrap()
}

// Strategy: a validation result with zero to three errors
fn arb_result() -> impl Strategy<Value = ValidationResult> {
    prop::collection::vec("[a-z]{1,6}", 0..3).prop_map(|fields| {
        let mut result = ValidationResult::new();
        for field in fields {
            let message = format!("{} is invalid.", field);
            result.add_error(&field, ErrorKind::Custom, message);
        }
        result
    })
}

proptest! {
    /// Property: strict long parsing agrees with the standard library on decimal text
    #[test]
    fn proptest_parse_long_matches_std(text in arb_decimal_text()) {
        prop_assert_eq!(parse_long(Some(&text), None), text.parse::<i64>().ok());
    }

    /// Property: strict int parsing agrees with the standard library on decimal text
    #[test]
    fn proptest_parse_int_matches_std(text in arb_decimal_text()) {
        prop_assert_eq!(parse_int(Some(&text), None), text.parse::<i32>().ok());
    }

    /// Property: every i64 survives formatting and strict parsing
    #[test]
    fn proptest_parse_long_accepts_every_long(value in any::<i64>()) {
        prop_assert_eq!(parse_long(Some(&value.to_string()), None), Some(value));
    }

    /// Property: text with a non-digit never parses strictly and yields the default
    #[test]
    fn proptest_parse_int_rejects_non_digits(
        text in "[0-9]{0,4}[^0-9-][0-9]{0,4}",
        default in any::<i32>()
    ) {
        prop_assert_eq!(parse_int(Some(&text), Some(default)), Some(default));
    }

    /// Property: clamping with ordered bounds lands inside them
    #[test]
    fn proptest_bound_int_within_ordered_bounds(
        value in any::<i32>(),
        a in any::<i32>(),
        b in any::<i32>()
    ) {
        let (min, max) = (a.min(b), a.max(b));
        let bounded = bound_int(Some(value), Some(min), Some(max));
        prop_assert!(bounded.is_some_and(|v| v >= min && v <= max));
        if value >= min && value <= max {
            prop_assert_eq!(bounded, Some(value));
        }
    }

    /// Property: lenient boolean parsing ignores case and surrounding whitespace
    #[test]
    fn proptest_lenient_boolean_ignores_case(
        word in prop_oneof![Just("true"), Just("yes"), Just("on"), Just("false"), Just("no"), Just("off")],
        upper in prop::collection::vec(any::<bool>(), 5),
        pad in "[ \t]{0,3}"
    ) {
        let mixed: String = word
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
            .collect();
        let text = format!("{}{}{}", pad, mixed, pad);
        prop_assert_eq!(parse_boolean(Some(&text), None), parse_boolean(Some(word), None));
        prop_assert!(parse_boolean(Some(word), None).is_some());
    }

    /// Property: a bounded long field passes exactly when the value lies in the spanned interval
    #[test]
    fn proptest_number_range_uses_spanned_interval(
        value in -1000i64..1000,
        a in -1000i64..1000,
        b in -1000i64..1000
    ) {
        let mut form = RequestForm::new();
        let field: NumberField<i64> = NumberField::new(&mut form, "n");
        field.set_range(a, b);

        let result = form.process(&MapValues::new().with("n", value.to_string()));
        let inside = value >= a.min(b) && value <= a.max(b);
        prop_assert_eq!(result.passed(), inside);
        prop_assert_eq!(field.value(), Some(value));
    }

    /// Property: a length-bounded text field passes exactly when the character count fits
    #[test]
    fn proptest_text_length_counts_characters(
        text in "[a-zé☃]{1,12}",
        min in 0usize..8,
        extra in 0usize..8
    ) {
        let max = min + extra;
        let mut form = RequestForm::new();
        let field: TextField = TextField::new(&mut form, "t");
        field.set_min_length(min).set_max_length(max);

        let result = form.process(&MapValues::new().with("t", text.clone()));
        let length = text.chars().count();
        prop_assert_eq!(result.passed(), length >= min && length <= max);
        prop_assert_eq!(field.value(), Some(text));
    }

    /// Property: a combination passes only when every part passes
    #[test]
    fn proptest_combined_passed_is_conjunction(
        local in arb_result(),
        children in prop::collection::vec(arb_result(), 0..4)
    ) {
        let expected_passed = local.passed() && children.iter().all(ValidationResult::passed);
        let expected_failed = local.failed() && children.iter().any(ValidationResult::failed);
        let expected_count =
            local.errors().len() + children.iter().map(|c| c.errors().len()).sum::<usize>();

        let mut combined = CombinedResult::from_local(local);
        for child in children {
            combined.add_result(child);
        }

        prop_assert_eq!(combined.passed(), expected_passed);
        prop_assert_eq!(combined.failed(), expected_failed);
        prop_assert_eq!(combined.all_errors().len(), expected_count);
    }
}
