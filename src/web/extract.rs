//! The boundary trait for a host framework's query object.

/// Read access to a host framework's parsed query parameters.
///
/// Framework integrations implement this for their native query type and
/// hand it to [`RequestForm::process_query`](crate::RequestForm::process_query).
/// Presence is the host's notion: a key that appeared with no value still
/// counts as present.
///
/// # Examples
///
/// ```
/// use request_form::web::Query;
/// use std::collections::HashMap;
///
/// // Example framework-specific implementation
/// struct FrameworkQuery {
///     params: HashMap<String, Vec<String>>,
/// }
///
/// impl Query for FrameworkQuery {
///     fn has(&self, name: &str) -> bool {
///         self.params.contains_key(name)
///     }
///
///     fn get(&self, name: &str) -> Option<&str> {
///         self.params.get(name)?.first().map(String::as_str)
///     }
///
///     fn get_all(&self, name: &str) -> Vec<&str> {
///         self.params
///             .get(name)
///             .map(|values| values.iter().map(String::as_str).collect())
///             .unwrap_or_default()
///     }
/// }
/// ```
pub trait Query {
    /// Returns true if the query holds `name`, with or without values.
    fn has(&self, name: &str) -> bool;

    /// Returns the first value for `name`.
    fn get(&self, name: &str) -> Option<&str>;

    /// Returns every value for `name`, in order.
    fn get_all(&self, name: &str) -> Vec<&str>;
}

impl<Q: Query + ?Sized> Query for &Q {
    fn has(&self, name: &str) -> bool {
        (**self).has(name)
    }

    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }

    fn get_all(&self, name: &str) -> Vec<&str> {
        (**self).get_all(name)
    }
}
