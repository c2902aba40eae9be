//! Validators and the standard field checks.
//!
//! A [`Validator`] inspects the raw input and records errors in a
//! [`ValidationResult`]; recording an error is its only effect. A
//! [`FieldValidator`] additionally receives the field it was attached to.
//! Closures with the matching signature implement both traits.

mod length;
mod membership;
mod number;
mod required;

pub use length::LengthValidator;
pub use membership::{SetFieldValidator, SingleValueValidator};
pub use number::{NumberFieldRangeValidator, NumberFieldValidator};
pub use required::RequiredFieldValidator;

use crate::field::{FieldKind, FieldValue, TypedField, WeakField};
use crate::result::ValidationResult;
use crate::values::ValueSource;

/// A check run against the raw input of a submission.
pub trait Validator {
    /// Records any problems with `values` in `result`.
    fn validate(&self, values: &dyn ValueSource, result: &mut ValidationResult);
}

impl<F> Validator for F
where
    F: Fn(&dyn ValueSource, &mut ValidationResult),
{
    fn validate(&self, values: &dyn ValueSource, result: &mut ValidationResult) {
        self(values, result)
    }
}

/// A check run against one field's raw input.
pub trait FieldValidator<T> {
    /// Records any problems with `field`'s input in `result`.
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    );
}

impl<T, F> FieldValidator<T> for F
where
    F: Fn(&dyn TypedField<T>, &dyn ValueSource, &mut ValidationResult),
{
    fn validate(
        &self,
        field: &dyn TypedField<T>,
        values: &dyn ValueSource,
        result: &mut ValidationResult,
    ) {
        self(field, values, result)
    }
}

/// A [`FieldValidator`] attached to a field through a weak reference.
pub(crate) struct BoundFieldValidator<T, K, V> {
    field: WeakField<T, K>,
    validator: V,
}

impl<T, K, V> BoundFieldValidator<T, K, V> {
    pub(crate) fn new(field: WeakField<T, K>, validator: V) -> Self {
        Self { field, validator }
    }
}

impl<T, K, V> Validator for BoundFieldValidator<T, K, V>
where
    T: FieldValue,
    K: FieldKind<T>,
    V: FieldValidator<T>,
{
    fn validate(&self, values: &dyn ValueSource, result: &mut ValidationResult) {
        match self.field.upgrade() {
            Some(field) => self.validator.validate(&field, values, result),
            None => tracing::warn!("Skipping validator whose field was dropped"),
        }
    }
}

/// The first raw value for `field`, treating an empty string as absent.
fn raw_value<'v, T>(field: &dyn TypedField<T>, values: &'v dyn ValueSource) -> Option<&'v str> {
    values.get(field.name()).filter(|raw| !raw.is_empty())
}
