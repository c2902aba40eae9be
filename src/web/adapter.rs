//! Adapter exposing a host query as a [`ValueSource`].

use crate::values::ValueSource;

use super::Query;

/// A [`ValueSource`] reading from a host framework's [`Query`].
///
/// Unlike [`MapValues`](crate::MapValues), presence follows the host: a key
/// submitted with no value (`?flag`) is reported by `has`.
///
/// # Examples
///
/// ```
/// use request_form::web::{QueryParams, QueryValues};
/// use request_form::ValueSource;
///
/// let mut params = QueryParams::new();
/// params.append("id", "7");
/// params.append("id", "8");
///
/// let values = QueryValues::new(&params);
/// assert_eq!(values.get("id"), Some("7"));
/// assert_eq!(values.get_longs("id"), vec![7, 8]);
/// ```
#[derive(Debug)]
pub struct QueryValues<'q, Q: ?Sized> {
    query: &'q Q,
}

impl<Q: ?Sized> Clone for QueryValues<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized> Copy for QueryValues<'_, Q> {}

impl<'q, Q: Query + ?Sized> QueryValues<'q, Q> {
    /// Wraps `query`.
    pub fn new(query: &'q Q) -> Self {
        Self { query }
    }

    /// The wrapped query.
    pub fn query(&self) -> &'q Q {
        self.query
    }
}

impl<Q: Query + ?Sized> ValueSource for QueryValues<'_, Q> {
    fn has(&self, name: &str) -> bool {
        self.query.has(name)
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.query.get(name)
    }

    fn get_strings(&self, name: &str) -> Option<Vec<String>> {
        let all = self.query.get_all(name);
        if all.is_empty() {
            None
        } else {
            Some(all.into_iter().map(str::to_owned).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::QueryParams;

    #[test]
    fn presence_follows_host() {
        let mut params = QueryParams::new();
        params.append("blank", "");
        let values = QueryValues::new(&params);

        assert!(values.has("blank"));
        assert_eq!(values.get("blank"), Some(""));
        assert!(!values.has("missing"));
        assert_eq!(values.get_strings("missing"), None);
    }

    #[test]
    fn works_through_trait_object() {
        let params: QueryParams = [("x", "1")].into_iter().collect();
        let query: &dyn Query = &params;
        let values = QueryValues::new(query);
        assert_eq!(values.get_ints("x"), vec![1]);
        assert_eq!(values.query().get("x"), Some("1"));
    }
}
