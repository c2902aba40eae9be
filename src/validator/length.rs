use super::{raw_value, FieldValidator};
use crate::error::ErrorKind;
use crate::field::TypedField;
use crate::result::ValidationResult;
use crate::values::ValueSource;

/// Fails when the raw input's character count falls outside the bounds.
///
/// Empty input passes when the field is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthValidator {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthValidator {
    /// Creates a length check; an absent bound is unbounded.
    pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    fn message(&self, name: &str) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                format!("{} must be between {} and {} characters long.", name, min, max)
            }
            (Some(min), None) => format!("{} must be at least {} characters long.", name, min),
            (None, Some(max)) => format!("{} must be at most {} characters long.", name, max),
            (None, None) => format!("{} has an invalid length.", name),
        }
    }
}

impl<T> FieldValidator<T> for LengthValidator {
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

        let length = raw.map_or(0, |raw| raw.chars().count());
        let too_short = self.min.is_some_and(|min| length < min);
        let too_long = self.max.is_some_and(|max| length > max);
        if too_short || too_long {
            result.add_error(field.name(), ErrorKind::OutOfLength, self.message(field.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            LengthValidator::new(Some(2), Some(4)).message("pin"),
            "pin must be between 2 and 4 characters long."
        );
        assert_eq!(
            LengthValidator::new(Some(2), None).message("pin"),
            "pin must be at least 2 characters long."
        );
        assert_eq!(
            LengthValidator::new(None, Some(4)).message("pin"),
            "pin must be at most 4 characters long."
        );
    }
}
