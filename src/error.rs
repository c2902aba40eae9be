use std::fmt;

/// Errors that can occur in the request-form crate.
///
/// Validation failures are normally inspected through a
/// [`ValidationResult`](crate::ValidationResult); this type exists so callers
/// can turn a failed outcome into a `Result` and propagate it with `?`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A processed submission failed validation.
    Invalid(Vec<FieldError>),
    /// A resource key required to build select options was not found.
    MissingResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Invalid(errors) => {
                write!(f, "Validation failed")?;
                for (index, error) in errors.iter().enumerate() {
                    let separator = if index == 0 { ": " } else { "; " };
                    write!(f, "{}{}", separator, error.message)?;
                }
                Ok(())
            }
            Error::MissingResource(key) => write!(f, "Missing resource '{}'", key),
        }
    }
}

impl std::error::Error for Error {}

/// A single validation error registered against a submission.
///
/// Most errors name the field they concern. Form-level validators may also
/// register general errors that are not tied to any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the error concerns, if any
    pub field: Option<String>,
    /// The kind of validation failure
    pub kind: ErrorKind,
    /// Human-readable message describing the failure
    pub message: String,
}

impl FieldError {
    /// Creates an error attributed to the named field.
    pub fn new(field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            kind,
            message: message.into(),
        }
    }

    /// Creates an error that is not attributed to any field.
    pub fn general(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: None,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FieldError {}

/// The kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field was empty or absent
    Required,
    /// A value was present but not parseable as the field's type
    Malformed,
    /// A value was outside the configured numeric bounds
    OutOfRange,
    /// A value's length was outside the configured bounds
    OutOfLength,
    /// A value was not among the permitted options
    NotPermitted,
    /// More than one value was supplied where only one is allowed
    Multiplicity,
    /// Registered by a caller-supplied validator
    Custom,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Required => write!(f, "required"),
            ErrorKind::Malformed => write!(f, "malformed"),
            ErrorKind::OutOfRange => write!(f, "out of range"),
            ErrorKind::OutOfLength => write!(f, "out of length"),
            ErrorKind::NotPermitted => write!(f, "not permitted"),
            ErrorKind::Multiplicity => write!(f, "multiplicity"),
            ErrorKind::Custom => write!(f, "custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_display_joins_messages() {
        let error = Error::Invalid(vec![
            FieldError::new("age", ErrorKind::Required, "age is required."),
            FieldError::general(ErrorKind::Custom, "Passwords do not match."),
        ]);

        assert_eq!(
            error.to_string(),
            "Validation failed: age is required.; Passwords do not match."
        );
    }

    #[test]
    fn invalid_display_without_errors() {
        assert_eq!(Error::Invalid(Vec::new()).to_string(), "Validation failed");
    }

    #[test]
    fn missing_resource_display() {
        let error = Error::MissingResource("months-value".to_string());
        assert_eq!(error.to_string(), "Missing resource 'months-value'");
    }

    #[test]
    fn field_error_constructors() {
        let named = FieldError::new("qty", ErrorKind::OutOfRange, "too big");
        assert_eq!(named.field.as_deref(), Some("qty"));
        assert_eq!(named.to_string(), "too big");

        let general = FieldError::general(ErrorKind::Custom, "nope");
        assert!(general.field.is_none());
    }

    #[test]
    fn error_kinds_display() {
        assert_eq!(ErrorKind::Required.to_string(), "required");
        assert_eq!(ErrorKind::Malformed.to_string(), "malformed");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out of range");
        assert_eq!(ErrorKind::OutOfLength.to_string(), "out of length");
        assert_eq!(ErrorKind::NotPermitted.to_string(), "not permitted");
        assert_eq!(ErrorKind::Multiplicity.to_string(), "multiplicity");
        assert_eq!(ErrorKind::Custom.to_string(), "custom");
    }
}
