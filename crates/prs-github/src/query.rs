//! Query-string construction.

use url::form_urlencoded;

/// Ordered set of query parameters.
///
/// Keys are unique. Setting an existing key replaces its value in place,
/// so insertion order of first appearance is what gets rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `key` to `value`, replacing any previous value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Builder-style [`QueryParams::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Apply every pair of `other` on top of `self`; `other` wins on collision.
    pub fn extend_from(&mut self, other: &Self) {
        for (key, value) in &other.pairs {
            self.set(key.clone(), value);
        }
    }

    /// Look up the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` has been set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k=v&k2=v2` with form-urlencoded keys and values.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// Append `params` to `path` as a query string.
#[must_use]
pub fn with_query(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", params.to_query_string())
    }
}

/// Percent-encode a single path segment, e.g. a label name.
#[must_use]
pub fn encode_path_segment(segment: &str) -> String {
    // byte_serialize already escapes a literal '+', so any '+' left is a space.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::new()
            .with("state", "open")
            .with("sort", "created");
        params.set("state", "closed");

        assert_eq!(params.to_query_string(), "state=closed&sort=created");
    }

    #[test]
    fn test_extend_from_overrides_and_appends() {
        let mut defaults = QueryParams::new()
            .with("state", "open")
            .with("sort", "created")
            .with("direction", "desc");
        let overrides = QueryParams::new()
            .with("state", "all")
            .with("creator", "x");
        defaults.extend_from(&overrides);

        assert_eq!(
            defaults.to_query_string(),
            "state=all&sort=created&direction=desc&creator=x"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let params = QueryParams::new().with("labels", "needs review&qa");
        assert_eq!(params.to_query_string(), "labels=needs+review%26qa");
    }

    #[test]
    fn test_with_query_skips_empty() {
        assert_eq!(with_query("/repos/a/b/pulls", &QueryParams::new()), "/repos/a/b/pulls");
        assert_eq!(
            with_query("/repos/a/b/pulls", &QueryParams::new().with("page", 2)),
            "/repos/a/b/pulls?page=2"
        );
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("bug"), "bug");
        assert_eq!(encode_path_segment("needs review"), "needs%20review");
        assert_eq!(encode_path_segment("c++/area"), "c%2B%2B%2Farea");
    }
}
