//! The form: an ordered set of fields plus form-level validators.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::field::{Field, FieldKind, FieldValue, FormField};
use crate::result::ValidationResult;
use crate::validator::Validator;
use crate::values::{MapValues, ValueSource};
use crate::web::{Query, QueryValues};

/// A set of fields processed together against one submission.
///
/// Processing runs every validator against the raw input, then binds every
/// field, whether or not validation passed. Validators run in a fixed order:
/// each field's validators in declaration order (custom before standard),
/// then the form-level validators in the order they were added.
///
/// # Examples
///
/// ```
/// use request_form::{ErrorKind, Field, MapValues, NumberField, RequestForm};
///
/// let mut form = RequestForm::new();
/// let age: NumberField<i32> = NumberField::new(&mut form, "age");
/// age.set_required(true).set_min(18);
///
/// let password: Field<String> = Field::new(&mut form, "password");
/// let confirm: Field<String> = Field::new(&mut form, "confirm");
/// form.add_validator_fn(move |values, result| {
///     if password.value_from(values) != confirm.value_from(values) {
///         result.add_general_error(ErrorKind::Custom, "Passwords do not match.");
///     }
/// });
///
/// let input = MapValues::new()
///     .with("age", "16")
///     .with("password", "a")
///     .with("confirm", "b");
/// let result = form.process(&input);
///
/// assert_eq!(
///     result.messages(),
///     vec!["age must be above or equal to 18.", "Passwords do not match."]
/// );
/// assert_eq!(age.value(), Some(16));
/// ```
#[derive(Default)]
pub struct RequestForm {
    fields: Vec<Box<dyn FormField>>,
    validators: Vec<Rc<dyn Validator>>,
}

impl fmt::Debug for RequestForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestForm")
            .field("fields", &self.field_names())
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl RequestForm {
    /// Creates a form with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field.
    ///
    /// [`Field::new`] already does this; call it directly only to share a
    /// field with a second form.
    pub fn add_field<T: FieldValue, K: FieldKind<T>>(&mut self, field: &Field<T, K>) -> &mut Self {
        self.fields.push(Box::new(field.clone()));
        self
    }

    /// Appends a form-level validator.
    pub fn add_validator(&mut self, validator: impl Validator + 'static) -> &mut Self {
        self.validators.push(Rc::new(validator));
        self
    }

    /// Appends a form-level closure validator.
    pub fn add_validator_fn<F>(&mut self, validator: F) -> &mut Self
    where
        F: Fn(&dyn ValueSource, &mut ValidationResult) + 'static,
    {
        self.add_validator(validator)
    }

    /// The registered field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name()).collect()
    }

    /// Every validator in execution order.
    pub fn validators(&self) -> Vec<Rc<dyn Validator>> {
        let mut validators: Vec<Rc<dyn Validator>> = self
            .fields
            .iter()
            .flat_map(|field| field.validators())
            .collect();
        validators.extend(self.validators.iter().cloned());
        validators
    }

    /// Validates `values`, binds every field, and returns the result.
    pub fn process(&self, values: &dyn ValueSource) -> ValidationResult {
        let validators = self.validators();
        tracing::debug!(
            fields = self.fields.len(),
            validators = validators.len(),
            "Processing form"
        );

        let mut result = ValidationResult::new();
        for validator in &validators {
            validator.validate(values, &mut result);
        }
        self.set_values_from(values);

        tracing::debug!(
            passed = result.passed(),
            errors = result.errors().len(),
            "Processed form"
        );
        result
    }

    /// Processes a host framework's query.
    pub fn process_query<Q: Query + ?Sized>(&self, query: &Q) -> ValidationResult {
        self.process(&QueryValues::new(query))
    }

    /// Binds every field from `values` without validating.
    pub fn set_values_from(&self, values: &dyn ValueSource) {
        for field in &self.fields {
            field.bind(values);
        }
    }

    /// Binds every field from a host framework's query without validating.
    pub fn set_values_from_query<Q: Query + ?Sized>(&self, query: &Q) {
        self.set_values_from(&QueryValues::new(query));
    }

    /// Binds every field from a name-to-values map without validating.
    pub fn set_values_from_map(&self, values: HashMap<String, Vec<String>>) {
        self.set_values_from(&MapValues::from_map(values));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::field::NumberField;
    use crate::web::QueryParams;
    use std::cell::RefCell;

    #[test]
    fn field_names_in_declaration_order() {
        let mut form = RequestForm::new();
        let _b: Field<String> = Field::new(&mut form, "b");
        let _a: Field<i32> = Field::new(&mut form, "a");
        assert_eq!(form.field_names(), vec!["b", "a"]);
    }

    #[test]
    fn validators_run_fields_then_form() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut form = RequestForm::new();

        let first: Field<String> = Field::new(&mut form, "first");
        let second: Field<String> = Field::new(&mut form, "second");
        for (field, label) in [(&first, "first"), (&second, "second")] {
            let order = Rc::clone(&order);
            field.add_validator_fn(move |_, _| order.borrow_mut().push(label));
        }
        let form_order = Rc::clone(&order);
        form.add_validator_fn(move |_, _| form_order.borrow_mut().push("form"));

        assert_eq!(form.validators().len(), 3);
        let _ = form.process(&MapValues::new());
        assert_eq!(*order.borrow(), vec!["first", "second", "form"]);
    }

    #[test]
    fn binds_even_when_failing() {
        let mut form = RequestForm::new();
        let qty: NumberField<i64> = NumberField::new(&mut form, "qty");
        qty.set_range(0, 2);

        let result = form.process(&MapValues::new().with("qty", "4"));
        assert!(result.failed());
        assert_eq!(result.errors()[0].kind, ErrorKind::OutOfRange);
        assert_eq!(qty.value(), Some(4));
    }

    #[test]
    fn set_values_without_validating() {
        let mut form = RequestForm::new();
        let name: Field<String> = Field::new(&mut form, "name");
        name.set_required(true);

        form.set_values_from_map(HashMap::from([(
            "name".to_string(),
            vec!["Ada".to_string()],
        )]));
        assert_eq!(name.value().as_deref(), Some("Ada"));

        let params: QueryParams = [("name", "Grace")].into_iter().collect();
        form.set_values_from_query(&params);
        assert_eq!(name.value().as_deref(), Some("Grace"));
    }

    #[test]
    fn field_shared_with_second_form() {
        let mut first = RequestForm::new();
        let mut second = RequestForm::new();
        let shared: Field<i32> = Field::new(&mut first, "n");
        second.add_field(&shared);

        let _ = second.process(&MapValues::new().with("n", "5"));
        assert_eq!(shared.value(), Some(5));
        assert_eq!(first.field_names(), second.field_names());
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_field_name, arb_raw_value};
        use proptest::prelude::*;

        proptest! {
            /// Property: processing the same input twice yields the same errors and values
            #[test]
            fn proptest_process_is_idempotent(name in arb_field_name(), raw in arb_raw_value()) {
                let mut form = RequestForm::new();
                let number: NumberField<i64> = NumberField::new(&mut form, name.clone());
                number.set_range(-100, 100);

                let values = MapValues::new().with(name, raw);
                let first = form.process(&values);
                let first_value = number.value();
                let second = form.process(&values);

                prop_assert_eq!(first, second);
                prop_assert_eq!(first_value, number.value());
            }

            /// Property: an unconstrained text field always passes and binds the raw value
            #[test]
            fn proptest_plain_text_binds_raw(name in arb_field_name(), raw in arb_raw_value()) {
                let mut form = RequestForm::new();
                let text: Field<String> = Field::new(&mut form, name.clone());

                let result = form.process(&MapValues::new().with(name, raw.clone()));
                prop_assert!(result.passed());
                prop_assert_eq!(text.value(), Some(raw));
            }
        }
    }
}
