use std::fmt::Display;
use std::rc::Rc;

use super::{Field, FieldKind, FieldType};
use crate::numeric::{parse_double, parse_float, parse_int, parse_long};
use crate::validator::{NumberFieldRangeValidator, NumberFieldValidator, Validator};

/// A numeric type a [`NumberField`](super::NumberField) can hold.
///
/// Each type decides how raw text is judged well formed and how it is
/// compared against bounds. These do not always match the binding coercion:
/// an `i32` range check parses the text as a floating number.
pub trait NumberType: FieldType + Copy + PartialOrd + Display {
    /// Returns true if `text` is a valid number of this type.
    fn is_well_formed(text: Option<&str>) -> bool;

    /// Returns true if `text` parses and lies within the interval spanned by
    /// the bounds; an absent bound is unbounded.
    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool;
}

/// Checks `value` against the closed interval spanned by `min` and `max`.
fn within<V: PartialOrd + Copy>(value: V, min: Option<V>, max: Option<V>) -> bool {
    if value.partial_cmp(&value).is_none() {
        return false;
    }
    let (low, high) = match (min, max) {
        (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
        bounds => bounds,
    };
    low.map_or(true, |low| value >= low) && high.map_or(true, |high| value <= high)
}

impl NumberType for i64 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_long(text, None).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_long(text, None).is_some_and(|v| within(v, min, max))
    }
}

impl NumberType for i32 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_int(text, None).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_double(text, None)
            .is_some_and(|v| within(v, min.map(f64::from), max.map(f64::from)))
    }
}

impl NumberType for i16 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_short(text).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_short(text).is_some_and(|v| within(v, min, max))
    }
}

impl NumberType for i8 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_byte(text).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_byte(text).is_some_and(|v| within(v, min, max))
    }
}

impl NumberType for f64 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_double(text, None).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_double(text, None).is_some_and(|v| within(v, min, max))
    }
}

impl NumberType for f32 {
    fn is_well_formed(text: Option<&str>) -> bool {
        parse_float(text, None).is_some()
    }

    fn is_within(text: Option<&str>, min: Option<Self>, max: Option<Self>) -> bool {
        parse_double(text, None)
            .is_some_and(|v| within(v, min.map(f64::from), max.map(f64::from)))
    }
}

fn parse_short(text: Option<&str>) -> Option<i16> {
    parse_int(text, None).and_then(|v| i16::try_from(v).ok())
}

fn parse_byte(text: Option<&str>) -> Option<i8> {
    parse_int(text, None).and_then(|v| i8::try_from(v).ok())
}

/// The kind of a [`NumberField`](super::NumberField): optional inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberKind<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> Default for NumberKind<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T: NumberType> FieldKind<T> for NumberKind<T> {
    fn standard_validators(field: &Field<T, Self>) -> Vec<Rc<dyn Validator>> {
        let mut validators = field.base_validators();
        validators.push(field.bind_validator(NumberFieldValidator));

        let (min, max) = (field.min(), field.max());
        if min.is_some() || max.is_some() {
            validators.push(field.bind_validator(NumberFieldRangeValidator::new(min, max)));
        }
        validators
    }
}

impl<T: NumberType> Field<T, NumberKind<T>> {
    /// Sets the lower bound.
    pub fn set_min(&self, min: T) -> &Self {
        self.kind_mut().min = Some(min);
        self
    }

    /// The lower bound.
    pub fn min(&self) -> Option<T> {
        self.kind().min
    }

    /// Sets the upper bound.
    pub fn set_max(&self, max: T) -> &Self {
        self.kind_mut().max = Some(max);
        self
    }

    /// The upper bound.
    pub fn max(&self) -> Option<T> {
        self.kind().max
    }

    /// Sets both bounds.
    pub fn set_range(&self, min: T, max: T) -> &Self {
        self.set_min(min).set_max(max)
    }

    /// Removes both bounds.
    pub fn clear_range(&self) -> &Self {
        *self.kind_mut() = NumberKind::default();
        self
    }
}
