use std::rc::Rc;

use super::{Field, FieldKind, FieldValue};
use crate::validator::{LengthValidator, Validator};

/// The kind of a [`TextField`](super::TextField): optional length bounds,
/// counted in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextKind {
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl<T: FieldValue> FieldKind<T> for TextKind {
    fn standard_validators(field: &Field<T, Self>) -> Vec<Rc<dyn Validator>> {
        let mut validators = field.base_validators();
        let (min, max) = (field.min_length(), field.max_length());
        if min.is_some() || max.is_some() {
            validators.push(field.bind_validator(LengthValidator::new(min, max)));
        }
        validators
    }
}

impl<T: FieldValue> Field<T, TextKind> {
    /// Sets the minimum length.
    pub fn set_min_length(&self, min: usize) -> &Self {
        self.kind_mut().min_length = Some(min);
        self
    }

    /// The minimum length.
    pub fn min_length(&self) -> Option<usize> {
        self.kind().min_length
    }

    /// Sets the maximum length.
    pub fn set_max_length(&self, max: usize) -> &Self {
        self.kind_mut().max_length = Some(max);
        self
    }

    /// The maximum length.
    pub fn max_length(&self) -> Option<usize> {
        self.kind().max_length
    }
}
