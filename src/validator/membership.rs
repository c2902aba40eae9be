use std::collections::HashSet;

use super::FieldValidator;
use crate::error::ErrorKind;
use crate::field::{FieldValue, TypedField};
use crate::result::ValidationResult;
use crate::values::ValueSource;

/// Fails when the field's value, or any element of a list value, is not
/// among the permitted strings.
///
/// An absent value, or an empty list, is only checked when the field is
/// required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFieldValidator {
    permitted: HashSet<String>,
}

impl SetFieldValidator {
    /// Creates a membership check over `permitted`.
    pub fn new<S: Into<String>>(permitted: impl IntoIterator<Item = S>) -> Self {
        Self {
            permitted: permitted.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `value` is permitted.
    pub fn permits(&self, value: &str) -> bool {
        self.permitted.contains(value)
    }
}

impl<T: FieldValue> FieldValidator<T> for SetFieldValidator {
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        let present = field
            .value_from(values)
            .filter(|value| !(T::MULTI_VALUED && value.is_blank()));
        let permitted = match present {
            Some(value) => value.to_strings().iter().all(|v| self.permits(v)),
            None => !field.is_required(),
        };
        if !permitted {
            result.add_error(
                field.name(),
                ErrorKind::NotPermitted,
                format!("{} must be a permitted value.", field.name()),
            );
        }
    }
}

/// Fails when the raw input holds more than one value for the field.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleValueValidator;

impl<T> FieldValidator<T> for SingleValueValidator {
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        let count = values.get_strings(field.name()).map_or(0, |v| v.len());
        if count > 1 {
            result.add_error(
                field.name(),
                ErrorKind::Multiplicity,
                format!("{} may not have more than one value.", field.name()),
            );
        }
    }
}
