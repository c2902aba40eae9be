use super::{raw_value, FieldValidator};
use crate::error::ErrorKind;
use crate::field::{NumberType, TypedField};
use crate::result::ValidationResult;
use crate::values::ValueSource;

/// Fails when the raw input is not a well-formed number of the field's type.
///
/// Empty input is only checked when the field is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFieldValidator;

impl<T: NumberType> FieldValidator<T> for NumberFieldValidator {
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        let raw = raw_value(field, values);
        if raw.is_none() && !field.is_required() {
            return;
        }
        if !T::is_well_formed(raw) {
            result.add_error(
                field.name(),
                ErrorKind::Malformed,
                format!("{} is not a valid number.", field.name()),
            );
        }
    }
}

/// Fails when the raw input does not parse or falls outside the bounds.
///
/// When both bounds are set the check uses the interval they span, so the
/// order in which they were configured does not matter. A `min` above `max`
/// is swapped: `min = 20, max = 1.5` accepts 1.5 through 20.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberFieldRangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: NumberType> NumberFieldRangeValidator<T> {
    /// Creates a range check; an absent bound is unbounded.
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    fn message(&self, name: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{} must be between {} and {}.", name, min, max),
            (Some(min), None) => format!("{} must be above or equal to {}.", name, min),
            (None, Some(max)) => format!("{} must be below or equal to {}.", name, max),
            (None, None) => format!("{} is not a valid number.", name),
        }
    }
}

impl<T: NumberType> FieldValidator<T> for NumberFieldRangeValidator<T> {
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        let raw = values.get(field.name());
        if !T::is_within(raw, self.min, self.max) {
            result.add_error(field.name(), ErrorKind::OutOfRange, self.message(field.name()));
        }
    }
}
