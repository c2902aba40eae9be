//! Typed binding and validation of loosely-typed request input.
//!
//! This crate sits between raw key/value submissions (query strings, form
//! bodies) and strongly-typed application values:
//! - **Fields**: Named, typed declarations that bind themselves from input
//! - **Validators**: Composable checks that record errors without halting
//! - **Results**: Ordered error lists that can be combined across passes
//!
//! # Core Types
//!
//! - [`RequestForm`]: Ordered fields plus form-level validators
//! - [`Field<T>`]: A named value with a type-driven coercion
//! - [`NumberField<T>`], [`TextField<T>`], [`SelectField<T>`]: Fields with
//!   range, length and membership checks
//! - [`ValueSource`]: The input seen by validators and binding
//! - [`ValidationResult`], [`CombinedResult`]: Collected outcomes
//!
//! # Examples
//!
//! ```
//! use request_form::{Field, MapValues, NumberField, Outcome, RequestForm, SelectField};
//!
//! let mut form = RequestForm::new();
//! let quantity: NumberField<i64> = NumberField::new(&mut form, "quantity");
//! quantity.set_required(true).set_range(1, 10);
//!
//! let color: SelectField<String> = SelectField::new(&mut form, "color");
//! color.add_option_labeled("r", "Red").add_option_labeled("g", "Green");
//!
//! let newsletter: Field<bool> = Field::new(&mut form, "newsletter");
//!
//! let input = MapValues::new()
//!     .with("quantity", "3")
//!     .with("color", "g")
//!     .with("newsletter", "on");
//!
//! let result = form.process(&input);
//! assert!(result.ensure_passed().is_ok());
//! assert_eq!(quantity.value(), Some(3));
//! assert_eq!(color.value().as_deref(), Some("g"));
//! assert_eq!(newsletter.value(), Some(true));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod error;
mod field;
mod form;
mod result;
mod validator;
mod values;

pub mod helper;
pub mod numeric;
pub mod web;

#[cfg(test)]
mod test_utils;

pub use access::ValueAccess;
pub use error::{Error, ErrorKind, FieldError};
pub use field::{
    Field, FieldKind, FieldType, FieldValue, NumberField, NumberKind, NumberType, Plain,
    SelectField, SelectKind, SelectOption, TextField, TextKind, TypedField,
};
pub use form::RequestForm;
pub use result::{CombinedResult, Outcome, ValidationResult};
pub use validator::{
    FieldValidator, LengthValidator, NumberFieldRangeValidator, NumberFieldValidator,
    RequiredFieldValidator, SetFieldValidator, SingleValueValidator, Validator,
};
pub use values::{MapValues, NamedEnum, ValueSource, ValueSourceExt};
