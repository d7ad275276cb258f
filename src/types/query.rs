//! Query parameters for `GET /streams`.

use std::collections::{BTreeMap, HashMap};

/// Ordered set of query parameters, sent verbatim on the collection request.
///
/// Insertion order is kept so the request URL is predictable. Values are
/// percent-encoded by the HTTP client, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamQuery {
    params: Vec<(String, String)>,
}

impl StreamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Repeating a name sends it twice.
    pub fn param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Parameters in the order they will be sent.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StreamQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for StreamQuery {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Iteration order of a `HashMap` is unspecified; parameters are sorted by
/// name so the resulting URL is stable.
impl From<HashMap<String, String>> for StreamQuery {
    fn from(map: HashMap<String, String>) -> Self {
        let sorted: BTreeMap<String, String> = map.into_iter().collect();
        sorted.into()
    }
}
