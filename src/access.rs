//! Typed access to a single field's raw input.
//!
//! [`ValueAccess`] is the one place where wire strings become typed values.
//! Each field's value-access function receives one bound to its own name.

use crate::numeric;
use crate::values::{NamedEnum, ValueSource, ValueSourceExt};

/// A typed view of one named entry in a [`ValueSource`].
///
/// # Examples
///
/// ```
/// use request_form::{MapValues, ValueAccess};
///
/// let values = MapValues::new().with("qty", "12").with("ok", "yes");
///
/// assert_eq!(ValueAccess::new(&values, "qty").get_int(), Some(12));
/// assert_eq!(ValueAccess::new(&values, "qty").get_int_bounded(None, Some(0), Some(10)), Some(10));
/// assert_eq!(ValueAccess::new(&values, "ok").get_boolean(), None);
/// assert_eq!(ValueAccess::new(&values, "ok").get_boolean_lenient(), Some(true));
/// ```
#[derive(Clone, Copy)]
pub struct ValueAccess<'a> {
    values: &'a dyn ValueSource,
    name: &'a str,
}

impl std::fmt::Debug for ValueAccess<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueAccess")
            .field("name", &self.name)
            .field("raw", &self.get_str())
            .finish()
    }
}

impl<'a> ValueAccess<'a> {
    /// Binds `name` within `values`.
    pub fn new(values: &'a dyn ValueSource, name: &'a str) -> Self {
        Self { values, name }
    }

    /// The name this access is bound to.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The underlying source.
    pub fn values(&self) -> &'a dyn ValueSource {
        self.values
    }

    /// Returns true if the source holds this name.
    pub fn has(&self) -> bool {
        self.values.has(self.name)
    }

    /// The first raw value, borrowed.
    pub fn get_str(&self) -> Option<&'a str> {
        self.values.get(self.name)
    }

    /// The first raw value.
    pub fn get_string(&self) -> Option<String> {
        self.get_str().map(str::to_owned)
    }

    /// The first raw value, or `default`.
    pub fn get_string_or(&self, default: impl Into<String>) -> String {
        self.get_string().unwrap_or_else(|| default.into())
    }

    /// Every raw value, or `None` if there are none.
    pub fn get_strings(&self) -> Option<Vec<String>> {
        self.values.get_strings(self.name)
    }

    /// Every raw value, or `default` if there are none.
    pub fn get_strings_or(&self, default: Vec<String>) -> Vec<String> {
        self.values.get_strings_or(self.name, default)
    }

    /// Every value parsed as `i32`; non-numeric values become 0.
    pub fn get_ints(&self) -> Vec<i32> {
        self.values.get_ints(self.name)
    }

    /// Every value parsed as `i32`, or `default` if there are none.
    pub fn get_ints_or(&self, default: Vec<i32>) -> Vec<i32> {
        let ints = self.get_ints();
        if ints.is_empty() {
            default
        } else {
            ints
        }
    }

    /// Every value parsed as `i64`; non-numeric values become 0.
    pub fn get_longs(&self) -> Vec<i64> {
        self.values.get_longs(self.name)
    }

    /// Every value parsed as `i64`, or `default` if there are none.
    pub fn get_longs_or(&self, default: Vec<i64>) -> Vec<i64> {
        let longs = self.get_longs();
        if longs.is_empty() {
            default
        } else {
            longs
        }
    }

    /// The first value as a strict `i32`.
    pub fn get_int(&self) -> Option<i32> {
        numeric::parse_int(self.get_str(), None)
    }

    /// The first value as a strict `i32`, or `default`.
    pub fn get_int_or(&self, default: i32) -> i32 {
        numeric::parse_int(self.get_str(), Some(default)).unwrap_or(default)
    }

    /// The first value as an `i32` clamped into `[min, max]`.
    pub fn get_int_bounded(
        &self,
        default: Option<i32>,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Option<i32> {
        numeric::parse_int_bounded(self.get_str(), default, min, max)
    }

    /// The first value as a strict `i64`.
    pub fn get_long(&self) -> Option<i64> {
        numeric::parse_long(self.get_str(), None)
    }

    /// The first value as a strict `i64`, or `default`.
    pub fn get_long_or(&self, default: i64) -> i64 {
        numeric::parse_long(self.get_str(), Some(default)).unwrap_or(default)
    }

    /// The first value as an `i64` clamped into `[min, max]`.
    pub fn get_long_bounded(
        &self,
        default: Option<i64>,
        min: Option<i64>,
        max: Option<i64>,
    ) -> Option<i64> {
        numeric::parse_long_bounded(self.get_str(), default, min, max)
    }

    /// The first value as an `i16`; `None` when it does not fit.
    pub fn get_short(&self) -> Option<i16> {
        self.get_int().and_then(|v| i16::try_from(v).ok())
    }

    /// The first value as an `i8`; `None` when it does not fit.
    pub fn get_byte(&self) -> Option<i8> {
        self.get_int().and_then(|v| i8::try_from(v).ok())
    }

    /// The first value as an `f64`.
    pub fn get_double(&self) -> Option<f64> {
        numeric::parse_double(self.get_str(), None)
    }

    /// The first value as an `f64`, or `default`.
    pub fn get_double_or(&self, default: f64) -> f64 {
        self.get_double().unwrap_or(default)
    }

    /// The first value parsed as an `f64` and narrowed to `f32`.
    pub fn get_float(&self) -> Option<f32> {
        self.get_double().map(|v| v as f32)
    }

    /// The first value as an `f32`, or `default`.
    pub fn get_float_or(&self, default: f32) -> f32 {
        self.get_float().unwrap_or(default)
    }

    /// The first value as a strict boolean (`"true"` or `"false"` only).
    pub fn get_boolean(&self) -> Option<bool> {
        numeric::parse_boolean_strict(self.get_str(), None)
    }

    /// The first value as a strict boolean, or `default`.
    pub fn get_boolean_or(&self, default: bool) -> bool {
        self.get_boolean().unwrap_or(default)
    }

    /// The first value as a lenient boolean (`yes`, `on`, `1`, ...).
    pub fn get_boolean_lenient(&self) -> Option<bool> {
        numeric::parse_boolean(self.get_str(), None)
    }

    /// The first value as a lenient boolean, or `default`.
    pub fn get_boolean_lenient_or(&self, default: bool) -> bool {
        self.get_boolean_lenient().unwrap_or(default)
    }

    /// The first value as an enum variant, matched by exact name.
    pub fn get_enum<E: NamedEnum>(&self) -> Option<E> {
        self.values.get_enum(self.name, None)
    }

    /// The first value as an enum variant, or `default`.
    pub fn get_enum_or<E: NamedEnum>(&self, default: E) -> E {
        self.get_enum().unwrap_or(default)
    }
}
