//! Typed, named fields bound from a [`ValueSource`].
//!
//! A [`Field`] is a cheap, cloneable handle. It registers with one
//! [`RequestForm`] at construction; the form later asks it for validators and
//! tells it when to bind. Configuration setters take `&self` and return
//! `&Self`, so a freshly built field can be configured in one chain:
//!
//! ```
//! use request_form::{Field, MapValues, RequestForm};
//!
//! let mut form = RequestForm::new();
//! let name: Field<String> = Field::new(&mut form, "name");
//! name.set_required(true).set_default_on_process("anonymous".to_string());
//!
//! let result = form.process(&MapValues::new());
//! assert!(result.failed());
//! assert_eq!(name.value().as_deref(), Some("anonymous"));
//! ```
//!
//! The kind parameter `K` selects the standard validators a field
//! contributes: [`Plain`] fields only check presence when required, while
//! [`NumberField`], [`TextField`] and [`SelectField`] add format, range,
//! length and membership checks.

mod number;
mod select;
mod text;

pub use number::{NumberKind, NumberType};
pub use select::{SelectKind, SelectOption};
pub use text::TextKind;

use std::cell::{Cell, RefCell};
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

use crate::access::ValueAccess;
use crate::form::RequestForm;
use crate::result::ValidationResult;
use crate::validator::{BoundFieldValidator, FieldValidator, RequiredFieldValidator, Validator};
use crate::values::{NamedEnum, ValueSource};

/// A value a field can hold.
///
/// Implementations describe how a value is rendered back to strings, which
/// is what membership checks and selected-option lookups compare against.
pub trait FieldValue: Clone + Debug + 'static {
    /// True for list types, whose elements are checked individually.
    const MULTI_VALUED: bool = false;

    /// The value rendered as one string per element.
    fn to_strings(&self) -> Vec<String>;

    /// True if the value counts as empty for a required check.
    fn is_blank(&self) -> bool {
        false
    }
}

/// A [`FieldValue`] with a default way to read itself from input.
///
/// [`Field::new`] uses this to choose the value-access function, so the
/// coercion is fixed by the field's type.
///
/// `i16` and `i8` read as `None` when the input does not fit the narrow
/// type; out-of-range numbers never wrap.
pub trait FieldType: FieldValue {
    /// Reads a value of this type through `access`.
    fn access(access: &ValueAccess<'_>) -> Option<Self>;
}

macro_rules! scalar_field_type {
    ($($ty:ty => |$access:ident| $read:expr;)*) => {
        $(
            impl FieldValue for $ty {
                fn to_strings(&self) -> Vec<String> {
                    vec![self.to_string()]
                }
            }

            impl FieldType for $ty {
                fn access($access: &ValueAccess<'_>) -> Option<Self> {
                    $read
                }
            }
        )*
    };
}

scalar_field_type! {
    i64 => |a| a.get_long();
    i32 => |a| a.get_int();
    i16 => |a| a.get_short();
    i8 => |a| a.get_byte();
    f64 => |a| a.get_double();
    f32 => |a| a.get_float();
    bool => |a| a.get_boolean_lenient();
}

impl FieldValue for String {
    fn to_strings(&self) -> Vec<String> {
        vec![self.clone()]
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FieldType for String {
    fn access(access: &ValueAccess<'_>) -> Option<Self> {
        access.get_string()
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const MULTI_VALUED: bool = true;

    fn to_strings(&self) -> Vec<String> {
        self.iter().flat_map(FieldValue::to_strings).collect()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FieldType for Vec<String> {
    fn access(access: &ValueAccess<'_>) -> Option<Self> {
        Some(access.get_strings_or(Vec::new()))
    }
}

impl FieldType for Vec<i32> {
    fn access(access: &ValueAccess<'_>) -> Option<Self> {
        Some(access.get_ints())
    }
}

impl FieldType for Vec<i64> {
    fn access(access: &ValueAccess<'_>) -> Option<Self> {
        Some(access.get_longs())
    }
}

impl<E: NamedEnum> FieldValue for E {
    fn to_strings(&self) -> Vec<String> {
        vec![self.name().to_string()]
    }
}

impl<E: NamedEnum> FieldType for E {
    fn access(access: &ValueAccess<'_>) -> Option<Self> {
        access.get_enum()
    }
}

/// Selects the standard validators a field contributes.
pub trait FieldKind<T: FieldValue>: Default + Debug + 'static {
    /// Builds the standard validators for `field`, in execution order.
    fn standard_validators(field: &Field<T, Self>) -> Vec<Rc<dyn Validator>>;
}

/// The kind of a field with no checks beyond the required flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plain;

impl<T: FieldValue> FieldKind<T> for Plain {
    fn standard_validators(field: &Field<T, Self>) -> Vec<Rc<dyn Validator>> {
        field.base_validators()
    }
}

/// A field holding a number, with optional bounds.
pub type NumberField<T> = Field<T, NumberKind<T>>;

/// A field holding text, with optional length bounds.
pub type TextField<T = String> = Field<T, TextKind>;

/// A field whose value must be one of a list of options.
pub type SelectField<T> = Field<T, SelectKind>;

type AccessFn<T> = Rc<dyn Fn(&ValueAccess<'_>) -> Option<T>>;

pub(crate) struct FieldCore<T, K> {
    name: String,
    required: Cell<bool>,
    access: RefCell<AccessFn<T>>,
    default_on_process: RefCell<Option<T>>,
    value: RefCell<Option<T>>,
    custom_validators: RefCell<Vec<Rc<dyn Validator>>>,
    kind: RefCell<K>,
}

/// A named, typed field.
///
/// Cloning a `Field` clones the handle; every clone sees the same
/// configuration and value.
pub struct Field<T, K = Plain> {
    core: Rc<FieldCore<T, K>>,
}

impl<T, K> Clone for Field<T, K> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T: Debug, K: Debug> Debug for Field<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.core.name)
            .field("required", &self.core.required.get())
            .field("value", &self.core.value.borrow())
            .field("kind", &self.core.kind.borrow())
            .finish()
    }
}

impl<T: FieldType, K: FieldKind<T>> Field<T, K> {
    /// Creates a field named `name` and registers it with `form`.
    ///
    /// The value-access function is the default for `T`.
    pub fn new(form: &mut RequestForm, name: impl Into<String>) -> Self {
        Self::with_value_access(form, name, T::access)
    }
}

impl<T: FieldValue, K: FieldKind<T>> Field<T, K> {
    /// Creates a field with an explicit value-access function and registers
    /// it with `form`.
    ///
    /// Use this for value types without a default coercion.
    pub fn with_value_access<F>(form: &mut RequestForm, name: impl Into<String>, access: F) -> Self
    where
        F: Fn(&ValueAccess<'_>) -> Option<T> + 'static,
    {
        let field = Self {
            core: Rc::new(FieldCore {
                name: name.into(),
                required: Cell::new(false),
                access: RefCell::new(Rc::new(access)),
                default_on_process: RefCell::new(None),
                value: RefCell::new(None),
                custom_validators: RefCell::new(Vec::new()),
                kind: RefCell::new(K::default()),
            }),
        };
        form.add_field(&field);
        field
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.core.name
    }

    /// Marks the field as required or optional.
    pub fn set_required(&self, required: bool) -> &Self {
        self.core.required.set(required);
        self
    }

    /// Returns true if the field is required.
    pub fn is_required(&self) -> bool {
        self.core.required.get()
    }

    /// Replaces the value-access function.
    pub fn set_value_access<F>(&self, access: F) -> &Self
    where
        F: Fn(&ValueAccess<'_>) -> Option<T> + 'static,
    {
        *self.core.access.borrow_mut() = Rc::new(access);
        self
    }

    /// Replaces the value-access function and sets the default-on-process.
    pub fn set_value_access_with_default<F>(&self, access: F, default: impl Into<Option<T>>) -> &Self
    where
        F: Fn(&ValueAccess<'_>) -> Option<T> + 'static,
    {
        self.set_value_access(access).set_default_on_process(default)
    }

    /// Sets the value bound when access yields nothing.
    pub fn set_default_on_process(&self, default: impl Into<Option<T>>) -> &Self {
        *self.core.default_on_process.borrow_mut() = default.into();
        self
    }

    /// The value bound when access yields nothing.
    pub fn default_on_process(&self) -> Option<T> {
        self.core.default_on_process.borrow().clone()
    }

    /// Sets the current value directly.
    pub fn set_value(&self, value: impl Into<Option<T>>) -> &Self {
        *self.core.value.borrow_mut() = value.into();
        self
    }

    /// Resets the current value to the default-on-process.
    pub fn set_value_to_default(&self) -> &Self {
        let default = self.default_on_process();
        self.set_value(default)
    }

    /// The current value.
    pub fn value(&self) -> Option<T> {
        self.core.value.borrow().clone()
    }

    /// Runs the value-access function against `values` without storing the result.
    pub fn value_from(&self, values: &dyn ValueSource) -> Option<T> {
        let access = Rc::clone(&self.core.access.borrow());
        access(&ValueAccess::new(values, &self.core.name))
    }

    /// Reads the value from `values`, falling back to the default-on-process,
    /// and stores it as the current value.
    ///
    /// An empty list counts as absent when a default is set; without one it
    /// binds as the empty list.
    pub fn bind(&self, values: &dyn ValueSource) {
        let read = self.value_from(values);
        let absent = match &read {
            None => true,
            Some(value) => T::MULTI_VALUED && value.is_blank(),
        };
        let default = if absent { self.default_on_process() } else { None };
        let defaulted = default.is_some();
        let value = default.or(read);
        tracing::trace!(
            field = %self.core.name,
            has_value = value.is_some(),
            defaulted,
            "Bound field"
        );
        *self.core.value.borrow_mut() = value;
    }

    /// Appends a validator that sees the raw input.
    pub fn add_validator(&self, validator: impl Validator + 'static) -> &Self {
        self.core
            .custom_validators
            .borrow_mut()
            .push(Rc::new(validator));
        self
    }

    /// Appends a closure validator that sees the raw input.
    pub fn add_validator_fn<F>(&self, validator: F) -> &Self
    where
        F: Fn(&dyn ValueSource, &mut ValidationResult) + 'static,
    {
        self.add_validator(validator)
    }

    /// Appends a validator bound to this field.
    pub fn add_field_validator(&self, validator: impl FieldValidator<T> + 'static) -> &Self {
        let bound = self.bind_validator(validator);
        self.core.custom_validators.borrow_mut().push(bound);
        self
    }

    /// Appends a closure validator bound to this field.
    ///
    /// ```
    /// use request_form::{ErrorKind, Field, MapValues, RequestForm};
    ///
    /// let mut form = RequestForm::new();
    /// let code: Field<String> = Field::new(&mut form, "code");
    /// code.add_field_validator_fn(|field, values, result| {
    ///     if field.value_from(values).is_some_and(|v| !v.starts_with('X')) {
    ///         result.add_error(field.name(), ErrorKind::Custom, "code must start with X.");
    ///     }
    /// });
    ///
    /// assert!(form.process(&MapValues::new().with("code", "Y1")).failed());
    /// assert!(form.process(&MapValues::new().with("code", "X1")).passed());
    /// ```
    pub fn add_field_validator_fn<F>(&self, validator: F) -> &Self
    where
        F: Fn(&dyn TypedField<T>, &dyn ValueSource, &mut ValidationResult) + 'static,
    {
        self.add_field_validator(validator)
    }

    /// Every validator, custom ones first, then the standard ones.
    pub fn validators(&self) -> Vec<Rc<dyn Validator>> {
        let mut validators = self.core.custom_validators.borrow().clone();
        validators.extend(self.standard_validators());
        validators
    }

    /// The validators implied by the field's kind and required flag.
    pub fn standard_validators(&self) -> Vec<Rc<dyn Validator>> {
        K::standard_validators(self)
    }

    /// The validators every kind starts with: a required check when the
    /// field is required.
    pub fn base_validators(&self) -> Vec<Rc<dyn Validator>> {
        if self.is_required() {
            vec![self.bind_validator(RequiredFieldValidator)]
        } else {
            Vec::new()
        }
    }

    /// Attaches `validator` to this field without registering it.
    ///
    /// The returned validator holds only a weak reference to the field.
    pub fn bind_validator<V>(&self, validator: V) -> Rc<dyn Validator>
    where
        V: FieldValidator<T> + 'static,
    {
        Rc::new(BoundFieldValidator::new(self.downgrade(), validator))
    }

    pub(crate) fn downgrade(&self) -> WeakField<T, K> {
        WeakField {
            core: Rc::downgrade(&self.core),
        }
    }

    pub(crate) fn kind(&self) -> std::cell::Ref<'_, K> {
        self.core.kind.borrow()
    }

    pub(crate) fn kind_mut(&self) -> std::cell::RefMut<'_, K> {
        self.core.kind.borrow_mut()
    }

    pub(crate) fn core(&self) -> &Rc<FieldCore<T, K>> {
        &self.core
    }
}

impl<T: FieldValue, K> FieldCore<T, K> {
    pub(crate) fn current_value(&self) -> Option<T> {
        self.value.borrow().clone()
    }
}

/// A non-owning reference to a field.
pub(crate) struct WeakField<T, K> {
    core: Weak<FieldCore<T, K>>,
}

impl<T, K> WeakField<T, K> {
    pub(crate) fn upgrade(&self) -> Option<Field<T, K>> {
        self.core.upgrade().map(|core| Field { core })
    }
}

/// The view of a field that field validators receive.
pub trait TypedField<T> {
    /// The field's name.
    fn name(&self) -> &str;

    /// Returns true if the field is required.
    fn is_required(&self) -> bool;

    /// The current value.
    fn value(&self) -> Option<T>;

    /// Runs the value-access function against `values`.
    fn value_from(&self, values: &dyn ValueSource) -> Option<T>;
}

impl<T: FieldValue, K: FieldKind<T>> TypedField<T> for Field<T, K> {
    fn name(&self) -> &str {
        Field::name(self)
    }

    fn is_required(&self) -> bool {
        Field::is_required(self)
    }

    fn value(&self) -> Option<T> {
        Field::value(self)
    }

    fn value_from(&self, values: &dyn ValueSource) -> Option<T> {
        Field::value_from(self, values)
    }
}

/// The type-erased view of a field a form holds.
pub(crate) trait FormField {
    fn name(&self) -> &str;
    fn validators(&self) -> Vec<Rc<dyn Validator>>;
    fn bind(&self, values: &dyn ValueSource);
}

impl<T: FieldValue, K: FieldKind<T>> FormField for Field<T, K> {
    fn name(&self) -> &str {
        Field::name(self)
    }

    fn validators(&self) -> Vec<Rc<dyn Validator>> {
        Field::validators(self)
    }

    fn bind(&self, values: &dyn ValueSource) {
        Field::bind(self, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::values::MapValues;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tier {
        Bronze,
        Gold,
    }

    impl NamedEnum for Tier {
        const VARIANTS: &'static [Self] = &[Tier::Bronze, Tier::Gold];

        fn name(self) -> &'static str {
            match self {
                Tier::Bronze => "BRONZE",
                Tier::Gold => "GOLD",
            }
        }
    }

    #[test]
    fn default_access_follows_type() {
        let mut form = RequestForm::new();
        let long: Field<i64> = Field::new(&mut form, "n");
        let int: Field<i32> = Field::new(&mut form, "n");
        let short: Field<i16> = Field::new(&mut form, "n");
        let float: Field<f32> = Field::new(&mut form, "n");
        let text: Field<String> = Field::new(&mut form, "n");
        let flag: Field<bool> = Field::new(&mut form, "n");
        let tier: Field<Tier> = Field::new(&mut form, "tier");

        let values = MapValues::new().with("n", "1").with("tier", "GOLD");
        form.set_values_from(&values);

        assert_eq!(long.value(), Some(1));
        assert_eq!(int.value(), Some(1));
        assert_eq!(short.value(), Some(1));
        assert_eq!(float.value(), Some(1.0));
        assert_eq!(text.value().as_deref(), Some("1"));
        assert_eq!(flag.value(), Some(true));
        assert_eq!(tier.value(), Some(Tier::Gold));
    }

    #[test]
    fn bind_falls_back_to_default() {
        let mut form = RequestForm::new();
        let field: Field<i32> = Field::new(&mut form, "n");
        field.set_default_on_process(5);

        field.bind(&MapValues::new().with("n", "abc"));
        assert_eq!(field.value(), Some(5));

        field.bind(&MapValues::new().with("n", "8"));
        assert_eq!(field.value(), Some(8));
    }

    #[test]
    fn empty_list_falls_back_to_default() {
        let mut form = RequestForm::new();
        let ids: Field<Vec<i64>> = Field::new(&mut form, "ids");

        ids.bind(&MapValues::new());
        assert_eq!(ids.value(), Some(Vec::new()));

        ids.set_default_on_process(vec![42_i64]);
        ids.bind(&MapValues::new());
        assert_eq!(ids.value(), Some(vec![42]));

        ids.bind(&MapValues::new().with_all("ids", ["7"]));
        assert_eq!(ids.value(), Some(vec![7]));
    }

    #[test]
    fn value_access_override() {
        let mut form = RequestForm::new();
        let field: Field<i32> = Field::new(&mut form, "n");
        field.set_value_access_with_default(|a| a.get_int_bounded(None, Some(0), Some(10)), -1);

        field.bind(&MapValues::new().with("n", "55"));
        assert_eq!(field.value(), Some(10));
        field.bind(&MapValues::new());
        assert_eq!(field.value(), Some(-1));
    }

    #[test]
    fn set_value_and_reset() {
        let mut form = RequestForm::new();
        let field: Field<String> = Field::new(&mut form, "s");
        field
            .set_default_on_process("d".to_string())
            .set_value("v".to_string());
        assert_eq!(field.value().as_deref(), Some("v"));

        field.set_value_to_default();
        assert_eq!(field.value().as_deref(), Some("d"));

        field.set_value(None);
        assert_eq!(field.value(), None);
    }

    #[test]
    fn custom_validators_run_before_standard() {
        let mut form = RequestForm::new();
        let field: Field<String> = Field::new(&mut form, "s");
        field.set_required(true).add_validator_fn(|_, result| {
            result.add_general_error(ErrorKind::Custom, "custom first");
        });

        let validators = field.validators();
        assert_eq!(validators.len(), 2);

        let mut result = ValidationResult::new();
        for validator in &validators {
            validator.validate(&MapValues::new(), &mut result);
        }
        assert_eq!(result.messages(), vec!["custom first", "s is required."]);
    }

    #[test]
    fn clones_share_state() {
        let mut form = RequestForm::new();
        let field: Field<i64> = Field::new(&mut form, "n");
        let other = field.clone();
        other.set_required(true).set_value(3_i64);
        assert!(field.is_required());
        assert_eq!(field.value(), Some(3));
    }

    #[test]
    fn list_values_render_each_element() {
        assert_eq!(vec![1i32, 2].to_strings(), vec!["1", "2"]);
        assert_eq!(Tier::Bronze.to_strings(), vec!["BRONZE"]);
        assert!(String::new().is_blank());
        assert!(Vec::<String>::new().is_blank());
        assert!(!vec![String::new()].is_blank());
        assert!(<Vec<i64> as FieldValue>::MULTI_VALUED);
        assert!(!<i64 as FieldValue>::MULTI_VALUED);
    }

    #[test]
    fn bound_validator_skips_dropped_field() {
        let validator = {
            let mut form = RequestForm::new();
            let field: Field<String> = Field::new(&mut form, "gone");
            field.bind_validator(RequiredFieldValidator)
        };

        let mut result = ValidationResult::new();
        validator.validate(&MapValues::new(), &mut result);
        assert!(result.passed());
    }
}
