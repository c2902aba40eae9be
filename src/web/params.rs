//! An ordered name/value parameter list.

use super::Query;

/// Query parameters kept in submission order, with repeated names allowed.
///
/// Mirrors the operations of a browser's `URLSearchParams`. It serves as the
/// in-crate host query for tests and for callers that assemble parameters by
/// hand; it does not parse query strings.
///
/// # Examples
///
/// ```
/// use request_form::web::QueryParams;
///
/// let mut params = QueryParams::new();
/// params.append("tag", "a");
/// params.append("tag", "b");
/// params.set("page", "2");
///
/// assert_eq!(params.get("tag"), Some("a"));
/// assert_eq!(params.get_all("tag"), vec!["a", "b"]);
/// assert_eq!(params.keys(), vec!["tag", "page"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value for `name` after any existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Removes every value for `name`.
    pub fn delete(&mut self, name: &str) {
        self.entries.retain(|(n, _)| n != name);
    }

    /// Replaces every value for `name` with `value`.
    ///
    /// The new value takes the position of the first existing one, or is
    /// appended when `name` was absent.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(first) => {
                self.entries[first].1 = value;
                let mut index = 0;
                self.entries.retain(|(n, _)| {
                    let keep = index <= first || *n != name;
                    index += 1;
                    keep
                });
            }
            None => self.entries.push((name, value)),
        }
    }

    /// The first value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `name`, in order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns true if `name` appears at least once.
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Distinct names in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for (name, _) in &self.entries {
            if !keys.contains(&name.as_str()) {
                keys.push(name);
            }
        }
        keys
    }

    /// Every name/value pair, in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// The number of pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}

impl Query for QueryParams {
    fn has(&self, name: &str) -> bool {
        QueryParams::has(self, name)
    }

    fn get(&self, name: &str) -> Option<&str> {
        QueryParams::get(self, name)
    }

    fn get_all(&self, name: &str) -> Vec<&str> {
        QueryParams::get_all(self, name)
    }
}
