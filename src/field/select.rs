use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use super::{Field, FieldCore, FieldKind, FieldValue};
use crate::validator::{SetFieldValidator, SingleValueValidator, Validator};

/// Something that can report which option values are currently selected.
pub(crate) trait SelectedValues {
    fn selected_values(&self) -> Vec<String>;
}

impl<T: FieldValue> SelectedValues for FieldCore<T, SelectKind> {
    fn selected_values(&self) -> Vec<String> {
        self.current_value()
            .map(|value| value.to_strings())
            .unwrap_or_default()
    }
}

/// One choice of a [`SelectField`](super::SelectField).
///
/// Once added to a field, an option holds a non-owning reference back to it
/// so it can answer [`is_selected`](Self::is_selected).
#[derive(Clone)]
pub struct SelectOption {
    value: String,
    label: String,
    data: HashMap<String, String>,
    select: Option<Weak<dyn SelectedValues>>,
}

impl fmt::Debug for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOption")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("data", &self.data)
            .field("attached", &self.select.is_some())
            .finish()
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.label == other.label && self.data == other.data
    }
}

impl SelectOption {
    /// Creates an option with a separate display label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            data: HashMap::new(),
            select: None,
        }
    }

    /// Creates an option whose label is its value.
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(value.clone(), value)
    }

    /// Attaches a metadata entry.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// The submitted value this option stands for.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Free-form metadata.
    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    /// Returns true if the owning field's current value includes this option.
    ///
    /// An option that was never added to a field, or whose field has been
    /// dropped, is not selected.
    pub fn is_selected(&self) -> bool {
        let Some(select) = &self.select else {
            return false;
        };
        match select.upgrade() {
            Some(select) => self.is_value_in(select.selected_values()),
            None => {
                tracing::warn!(option = %self.value, "Select option outlived its field");
                false
            }
        }
    }

    /// Returns true if this option's value is among `values`.
    pub fn is_value_in<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().any(|v| v.as_ref() == self.value)
    }
}

/// The kind of a [`SelectField`](super::SelectField): its options and the
/// multiple-values flag.
#[derive(Debug, Clone, Default)]
pub struct SelectKind {
    options: Vec<SelectOption>,
    allow_multiple: Option<bool>,
}

impl<T: FieldValue> FieldKind<T> for SelectKind {
    fn standard_validators(field: &Field<T, Self>) -> Vec<Rc<dyn Validator>> {
        let mut validators = field.base_validators();
        if !field.allows_multiple_values() {
            validators.push(field.bind_validator(SingleValueValidator));
        }

        let mut permitted: Vec<String> = field
            .kind()
            .options
            .iter()
            .map(|option| option.value.clone())
            .collect();
        if !field.is_required() {
            permitted.push(String::new());
        }
        validators.push(field.bind_validator(SetFieldValidator::new(permitted)));
        validators
    }
}

impl<T: FieldValue> Field<T, SelectKind> {
    /// Appends an option.
    pub fn add_option(&self, mut option: SelectOption) -> &Self {
        let weak = Rc::downgrade(self.core());
        let select: Weak<dyn SelectedValues> = weak;
        option.select = Some(select);
        self.kind_mut().options.push(option);
        self
    }

    /// Appends an option with a separate label.
    pub fn add_option_labeled(&self, value: impl Into<String>, label: impl Into<String>) -> &Self {
        self.add_option(SelectOption::new(value, label))
    }

    /// Appends an option labeled with its own value.
    pub fn add_option_value(&self, value: impl Into<String>) -> &Self {
        self.add_option(SelectOption::from_value(value))
    }

    /// Appends several options, in order.
    pub fn add_options(&self, options: impl IntoIterator<Item = SelectOption>) -> &Self {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Removes every option with the given value.
    pub fn remove_option(&self, value: &str) -> &Self {
        self.kind_mut().options.retain(|option| option.value != value);
        self
    }

    /// The options, in insertion order.
    pub fn options(&self) -> Vec<SelectOption> {
        self.kind().options.clone()
    }

    /// The current value rendered as option values.
    pub fn selected_values(&self) -> Vec<String> {
        self.core().selected_values()
    }

    /// Overrides whether more than one value may be submitted.
    pub fn set_allow_multiple_values(&self, allow: bool) -> &Self {
        self.kind_mut().allow_multiple = Some(allow);
        self
    }

    /// Returns true if more than one value may be submitted.
    ///
    /// Unless set explicitly, this is true exactly for list value types.
    pub fn allows_multiple_values(&self) -> bool {
        self.kind().allow_multiple.unwrap_or(T::MULTI_VALUED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::field::SelectField;
    use crate::form::RequestForm;
    use crate::values::MapValues;

    #[test]
    fn options_keep_insertion_order() {
        let mut form = RequestForm::new();
        let color: SelectField<String> = SelectField::new(&mut form, "color");
        color
            .add_option_labeled("r", "Red")
            .add_option_value("g")
            .add_options([SelectOption::new("b", "Blue").with_data("hex", "#00f")]);

        let values: Vec<String> = color.options().iter().map(|o| o.value().to_string()).collect();
        assert_eq!(values, vec!["r", "g", "b"]);
        assert_eq!(color.options()[1].label(), "g");
        assert_eq!(color.options()[2].data().get("hex").map(String::as_str), Some("#00f"));
    }

    #[test]
    fn selection_tracks_current_value() {
        let mut form = RequestForm::new();
        let color: SelectField<String> = SelectField::new(&mut form, "color");
        color.add_option_value("r").add_option_value("g");

        form.process(&MapValues::new().with("color", "g"));
        let options = color.options();
        assert!(!options[0].is_selected());
        assert!(options[1].is_selected());

        color.set_value("r".to_string());
        assert!(options[0].is_selected());
        assert_eq!(color.selected_values(), vec!["r"]);
    }

    #[test]
    fn detached_options_are_not_selected() {
        let option = SelectOption::from_value("x");
        assert!(!option.is_selected());

        let orphan = {
            let mut form = RequestForm::new();
            let field: SelectField<String> = SelectField::new(&mut form, "f");
            field.add_option_value("x").set_value("x".to_string());
            field.options().remove(0)
        };
        assert!(!orphan.is_selected());
        assert!(orphan.is_value_in(["x"]));
    }

    #[test]
    fn multiple_values_inferred_from_type() {
        let mut form = RequestForm::new();
        let single: SelectField<String> = SelectField::new(&mut form, "one");
        let multi: SelectField<Vec<String>> = SelectField::new(&mut form, "many");
        assert!(!single.allows_multiple_values());
        assert!(multi.allows_multiple_values());

        single.set_allow_multiple_values(true);
        assert!(single.allows_multiple_values());
    }

    #[test]
    fn single_value_enforced() {
        let mut form = RequestForm::new();
        let color: SelectField<String> = SelectField::new(&mut form, "color");
        color.add_option_value("r").add_option_value("g");

        let result = form.process(&MapValues::new().with("color", "r").with("color", "g"));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind, ErrorKind::Multiplicity);
        assert_eq!(result.messages(), vec!["color may not have more than one value."]);
    }

    #[test]
    fn empty_value_permitted_only_when_optional() {
        let mut form = RequestForm::new();
        let color: SelectField<String> = SelectField::new(&mut form, "color");
        color.add_option_value("r");

        assert!(form.process(&MapValues::new().with("color", "")).passed());

        color.set_required(true);
        let result = form.process(&MapValues::new().with("color", ""));
        assert!(result.failed());
        assert_eq!(
            result.messages(),
            vec!["color is required.", "color must be a permitted value."]
        );
    }

    #[test]
    fn remove_option_narrows_permitted_set() {
        let mut form = RequestForm::new();
        let color: SelectField<String> = SelectField::new(&mut form, "color");
        color.add_option_value("r").add_option_value("g").remove_option("g");

        assert_eq!(color.options().len(), 1);
        assert!(form.process(&MapValues::new().with("color", "g")).failed());
    }
}
