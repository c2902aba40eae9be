//! Helpers for populating select options and flattening values.

use std::collections::HashMap;

use crate::error::Error;
use crate::field::{FieldValue, SelectField, SelectOption};

/// Resource key prefix of the month options.
pub const MONTH_PREFIX: &str = "gfddmm";

/// A lookup of localized resource strings.
pub trait Resources {
    /// Returns the resource stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
}

impl Resources for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<R: Resources + ?Sized> Resources for &R {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Adds options read from `<prefix>-value` (comma separated) and
/// `<prefix>-display` (`#` separated).
///
/// Values and labels are paired by position; surplus entries on either side
/// are ignored.
///
/// # Errors
///
/// Returns [`Error::MissingResource`] if either key is absent, in which case
/// no options are added.
///
/// # Examples
///
/// ```
/// use request_form::helper::add_options_from_resources;
/// use request_form::{RequestForm, SelectField};
/// use std::collections::HashMap;
///
/// let resources = HashMap::from([
///     ("size-value".to_string(), "s,m,l".to_string()),
///     ("size-display".to_string(), "Small#Medium#Large".to_string()),
/// ]);
///
/// let mut form = RequestForm::new();
/// let size: SelectField<String> = SelectField::new(&mut form, "size");
/// add_options_from_resources(&size, &resources, "size").unwrap();
///
/// assert_eq!(size.options()[1].label(), "Medium");
/// ```
pub fn add_options_from_resources<T: FieldValue>(
    select: &SelectField<T>,
    resources: &dyn Resources,
    prefix: &str,
) -> Result<(), Error> {
    let lookup = |suffix: &str| {
        let key = format!("{}-{}", prefix, suffix);
        resources.get(&key).ok_or(Error::MissingResource(key))
    };
    let values = lookup("value")?;
    let labels = lookup("display")?;

    select.add_options(
        values
            .split(',')
            .zip(labels.split('#'))
            .map(|(value, label)| SelectOption::new(value, label)),
    );
    Ok(())
}

/// Adds the twelve month options from the month resources.
pub fn add_options_for_month<T: FieldValue>(
    select: &SelectField<T>,
    resources: &dyn Resources,
) -> Result<(), Error> {
    add_options_from_resources(select, resources, MONTH_PREFIX)
}

/// Adds one option per year from `current_year - negative_delta` to
/// `current_year + positive_delta`, in ascending order.
pub fn add_options_for_year<T: FieldValue>(
    select: &SelectField<T>,
    negative_delta: i32,
    positive_delta: i32,
    current_year: i32,
) {
    let first = current_year.saturating_sub(negative_delta);
    let last = current_year.saturating_add(positive_delta);
    select.add_options((first..=last).map(|year| SelectOption::from_value(year.to_string())));
}

/// Renders a value as strings: one per element for lists, none when absent.
pub fn value_to_list<T: FieldValue>(value: Option<&T>) -> Vec<String> {
    value.map(FieldValue::to_strings).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RequestForm;

    fn month_resources() -> HashMap<String, String> {
        HashMap::from([
            (
                "gfddmm-value".to_string(),
                "1,2,3,4,5,6,7,8,9,10,11,12".to_string(),
            ),
            (
                "gfddmm-display".to_string(),
                "Jan#Feb#Mar#Apr#May#Jun#Jul#Aug#Sep#Oct#Nov#Dec".to_string(),
            ),
        ])
    }

    #[test]
    fn months_from_resources() {
        let mut form = RequestForm::new();
        let month: SelectField<i32> = SelectField::new(&mut form, "month");
        add_options_for_month(&month, &month_resources()).unwrap();

        let options = month.options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0].value(), "1");
        assert_eq!(options[11].label(), "Dec");
    }

    #[test]
    fn mismatched_lengths_pair_to_shorter() {
        let resources = HashMap::from([
            ("p-value".to_string(), "a,b,c".to_string()),
            ("p-display".to_string(), "A#B".to_string()),
        ]);
        let mut form = RequestForm::new();
        let select: SelectField<String> = SelectField::new(&mut form, "p");
        add_options_from_resources(&select, &resources, "p").unwrap();
        assert_eq!(select.options().len(), 2);
    }

    #[test]
    fn missing_resource_is_an_error() {
        let resources = HashMap::from([("p-value".to_string(), "a".to_string())]);
        let mut form = RequestForm::new();
        let select: SelectField<String> = SelectField::new(&mut form, "p");

        let error = add_options_from_resources(&select, &resources, "p").unwrap_err();
        assert_eq!(error, Error::MissingResource("p-display".to_string()));
        assert!(select.options().is_empty());
    }

    #[test]
    fn years_around_current() {
        let mut form = RequestForm::new();
        let year: SelectField<i32> = SelectField::new(&mut form, "year");
        add_options_for_year(&year, 2, 1, 2024);

        let values: Vec<String> = year.options().iter().map(|o| o.value().to_string()).collect();
        assert_eq!(values, vec!["2022", "2023", "2024", "2025"]);
        assert_eq!(year.options()[0].label(), "2022");
    }

    #[test]
    fn values_flatten() {
        assert_eq!(value_to_list(Some(&vec![1i64, 2])), vec!["1", "2"]);
        assert_eq!(value_to_list(Some(&"x".to_string())), vec!["x"]);
        assert!(value_to_list::<bool>(None).is_empty());
    }
}
