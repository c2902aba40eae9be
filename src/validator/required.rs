use super::FieldValidator;
use crate::error::ErrorKind;
use crate::field::{FieldValue, TypedField};
use crate::result::ValidationResult;
use crate::values::ValueSource;

/// Fails when the field reads as absent, as an empty string or as an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldValidator;

impl<T: FieldValue> FieldValidator<T> for RequiredFieldValidator {
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        let present = field
            .value_from(values)
            .is_some_and(|value| !value.is_blank());
        if !present {
            result.add_error(
                field.name(),
                ErrorKind::Required,
                format!("{} is required.", field.name()),
            );
        }
    }
}
