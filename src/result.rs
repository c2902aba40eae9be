//! Collected validation outcomes.
//!
//! [`ValidationResult`] accumulates the errors of one processing pass.
//! [`CombinedResult`] folds several outcomes into one, for screens that
//! process more than one form.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, ErrorKind, FieldError};

/// The shared view of a validation outcome.
pub trait Outcome: fmt::Debug {
    /// True if validation found no errors.
    fn passed(&self) -> bool;

    /// True if validation found errors.
    fn failed(&self) -> bool;

    /// Every error, in the order it was recorded.
    fn all_errors(&self) -> Vec<FieldError>;

    /// Errored field names mapped to their latest message.
    fn all_errored_fields(&self) -> HashMap<String, String>;

    /// Converts a failed outcome into [`Error::Invalid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use request_form::{Error, Field, MapValues, Outcome, RequestForm};
    ///
    /// let mut form = RequestForm::new();
    /// let email: Field<String> = Field::new(&mut form, "email");
    /// email.set_required(true);
    ///
    /// let outcome = form.process(&MapValues::new()).ensure_passed();
    /// assert!(matches!(outcome, Err(Error::Invalid(errors)) if errors.len() == 1));
    /// ```
    fn ensure_passed(&self) -> Result<(), Error> {
        if self.passed() {
            Ok(())
        } else {
            Err(Error::Invalid(self.all_errors()))
        }
    }
}

/// The errors recorded during one processing pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
    errored_fields: HashMap<String, String>,
}

impl ValidationResult {
    /// Creates an empty, passing result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against the named field.
    pub fn add_error(&mut self, field: &str, kind: ErrorKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(field, %kind, "Validation error");
        self.errored_fields
            .insert(field.to_string(), message.clone());
        self.errors.push(FieldError::new(field, kind, message));
    }

    /// Records an error that is not tied to a field.
    pub fn add_general_error(&mut self, kind: ErrorKind, message: impl Into<String>) {
        tracing::debug!(%kind, "Validation error");
        self.errors.push(FieldError::general(kind, message));
    }

    /// Appends an already-built error.
    pub fn push(&mut self, error: FieldError) {
        if let Some(field) = &error.field {
            self.errored_fields
                .insert(field.clone(), error.message.clone());
        }
        self.errors.push(error);
    }

    /// The recorded errors, in order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The recorded messages, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Errored field names mapped to their latest message.
    pub fn errored_fields(&self) -> &HashMap<String, String> {
        &self.errored_fields
    }

    /// Returns true if any error names `field`.
    pub fn is_errored(&self, field: &str) -> bool {
        self.errored_fields.contains_key(field)
    }

    /// The errors recorded against `field`.
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// True if no errors were recorded.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    /// True if any error was recorded.
    pub fn failed(&self) -> bool {
        !self.passed()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "ValidationResult [passed]");
        }
        write!(f, "ValidationResult [failed")?;
        for error in &self.errors {
            write!(f, "; {}", error.message)?;
        }
        write!(f, "]")
    }
}

impl Outcome for ValidationResult {
    fn passed(&self) -> bool {
        ValidationResult::passed(self)
    }

    fn failed(&self) -> bool {
        ValidationResult::failed(self)
    }

    fn all_errors(&self) -> Vec<FieldError> {
        self.errors.clone()
    }

    fn all_errored_fields(&self) -> HashMap<String, String> {
        self.errored_fields.clone()
    }
}

/// A local result plus any number of child outcomes.
///
/// Errors read as the local ones followed by each child's, in registration
/// order. Errored fields overlay the same way, so a later child's message
/// wins for a shared field name.
///
/// `passed` requires every part to pass. `failed` requires the local result
/// to fail *and* at least one child to fail, so a combination whose only
/// failure is in a child reports neither passed nor failed.
///
/// # Examples
///
/// ```
/// use request_form::{CombinedResult, ErrorKind, Outcome, ValidationResult};
///
/// let mut child = ValidationResult::new();
/// child.add_error("zip", ErrorKind::Malformed, "zip is not a valid number.");
///
/// let mut combined = CombinedResult::new();
/// combined.add_result(child);
///
/// assert!(!combined.passed());
/// assert!(!combined.failed());
/// assert_eq!(combined.all_errors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CombinedResult {
    local: ValidationResult,
    children: Vec<Box<dyn Outcome>>,
}

impl CombinedResult {
    /// Creates a combination with an empty local result and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a combination around an existing local result.
    pub fn from_local(local: ValidationResult) -> Self {
        Self {
            local,
            children: Vec::new(),
        }
    }

    /// Registers a child outcome.
    pub fn add_result(&mut self, child: impl Outcome + 'static) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// The local result.
    pub fn local(&self) -> &ValidationResult {
        &self.local
    }

    /// The local result, for recording additional errors.
    pub fn local_mut(&mut self) -> &mut ValidationResult {
        &mut self.local
    }

    /// The number of registered children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Outcome for CombinedResult {
    fn passed(&self) -> bool {
        self.local.passed() && self.children.iter().all(|child| child.passed())
    }

    fn failed(&self) -> bool {
        self.local.failed() && self.children.iter().any(|child| child.failed())
    }

    fn all_errors(&self) -> Vec<FieldError> {
        let mut errors = self.local.all_errors();
        for child in &self.children {
            errors.extend(child.all_errors());
        }
        errors
    }

    fn all_errored_fields(&self) -> HashMap<String, String> {
        let mut fields = self.local.all_errored_fields();
        for child in &self.children {
            fields.extend(child.all_errored_fields());
        }
        fields
    }
}

impl fmt::Display for CombinedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "CombinedResult [passed]");
        }
        write!(f, "CombinedResult [failed")?;
        for error in self.all_errors() {
            write!(f, "; {}", error.message)?;
        }
        write!(f, "]")
    }
}
