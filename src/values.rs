//! Read-only sources of submitted key/value input.
//!
//! A [`ValueSource`] maps a field name to zero or more raw strings, the way an
//! HTTP query string or form body does. Scalar lookups see the first value;
//! a key with no values reads as absent.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::numeric::{parse_int, parse_long};

/// An enumeration that can be bound from its constant name.
///
/// Names are matched exactly and case-sensitively.
///
/// # Examples
///
/// ```
/// use request_form::NamedEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Plan {
///     Free,
///     Pro,
/// }
///
/// impl NamedEnum for Plan {
///     const VARIANTS: &'static [Self] = &[Plan::Free, Plan::Pro];
///
///     fn name(self) -> &'static str {
///         match self {
///             Plan::Free => "FREE",
///             Plan::Pro => "PRO",
///         }
///     }
/// }
///
/// assert_eq!(Plan::from_name("PRO"), Some(Plan::Pro));
/// assert_eq!(Plan::from_name("pro"), None);
/// ```
pub trait NamedEnum: Copy + Debug + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// The constant name of this variant.
    fn name(self) -> &'static str;

    /// Looks up the variant whose name is exactly `name`.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }
}

/// A read-only view of named, multi-valued input.
///
/// Implementors provide presence, first-value and all-values lookups; the
/// typed conveniences are derived from those.
pub trait ValueSource {
    /// Returns true if the source holds `name`.
    ///
    /// What counts as present is backend-defined: [`MapValues`] requires at
    /// least one value, while a query adapter reports any key it has seen.
    fn has(&self, name: &str) -> bool;

    /// Returns the first value for `name`, if any.
    fn get(&self, name: &str) -> Option<&str>;

    /// Returns every value for `name`, or `None` if there are none.
    fn get_strings(&self, name: &str) -> Option<Vec<String>>;

    /// Returns the first value for `name`, or `default`.
    fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Returns every value for `name`, or `default` if there are none.
    fn get_strings_or(&self, name: &str, default: Vec<String>) -> Vec<String> {
        self.get_strings(name).unwrap_or(default)
    }

    /// Parses every value for `name` as an `i32`; non-numeric values become 0.
    fn get_ints(&self, name: &str) -> Vec<i32> {
        self.get_strings(name)
            .unwrap_or_default()
            .iter()
            .map(|s| parse_int(Some(s), Some(0)).unwrap_or(0))
            .collect()
    }

    /// Parses every value for `name` as an `i64`; non-numeric values become 0.
    fn get_longs(&self, name: &str) -> Vec<i64> {
        self.get_strings(name)
            .unwrap_or_default()
            .iter()
            .map(|s| parse_long(Some(s), Some(0)).unwrap_or(0))
            .collect()
    }
}

/// Generic lookups available on every [`ValueSource`], including trait objects.
pub trait ValueSourceExt: ValueSource {
    /// Returns the enum variant named by the first value for `name`, or `default`.
    fn get_enum<E: NamedEnum>(&self, name: &str, default: Option<E>) -> Option<E> {
        self.get(name).and_then(E::from_name).or(default)
    }
}

impl<S: ValueSource + ?Sized> ValueSourceExt for S {}

/// A [`ValueSource`] backed by a map from name to values.
///
/// # Examples
///
/// ```
/// use request_form::{MapValues, ValueSource};
///
/// let values = MapValues::new()
///     .with("color", "red")
///     .with("color", "blue")
///     .with("size", "9");
///
/// assert_eq!(values.get("color"), Some("red"));
/// assert_eq!(values.get_strings("color").map(|v| v.len()), Some(2));
/// assert_eq!(values.get_ints("size"), vec![9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapValues {
    values: HashMap<String, Vec<String>>,
}

impl MapValues {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from an existing multi-map.
    pub fn from_map(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }

    /// Creates a source from name/value pairs; repeated names accumulate.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Appends a value for `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends several values for `name`.
    pub fn with_all<V: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.values
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Appends a value for `name` in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.values
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for MapValues {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

impl From<HashMap<String, Vec<String>>> for MapValues {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self::from_map(values)
    }
}

impl ValueSource for MapValues {
    fn has(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| !v.is_empty())
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    fn get_strings(&self, name: &str) -> Option<Vec<String>> {
        self.values
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
    }
}
