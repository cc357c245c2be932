//! [`QueryArgs`]: the ordered multi-valued parameter list sent as a query string.

use url::form_urlencoded;

/// Ordered list of query parameters. Keys may repeat; each repetition adds
/// another value under that key rather than replacing the earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryArgs {
    pairs: Vec<(String, String)>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds arguments from a flat sequence of alternating keys and values.
    ///
    /// With an odd number of elements the trailing key is kept with an empty
    /// value, so `["a"]` encodes as `a=`.
    pub fn from_flat<I, S>(flat: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Self::new();
        let mut flat = flat.into_iter();
        while let Some(key) = flat.next() {
            let key = key.into();
            match flat.next() {
                Some(value) => args.push(key, value),
                None => {
                    tracing::debug!("Unpaired trailing key {:?}, sending empty value", key);
                    args.push(key, String::new());
                }
            }
        }
        args
    }

    /// Appends a value under `key`, builder style.
    pub fn add(mut self, key: &str, value: &str) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Percent-encodes the arguments as `application/x-www-form-urlencoded`.
    ///
    /// Keys are emitted in lexicographic order; values of a repeated key stay
    /// in the order they were added.
    pub fn encode(&self) -> String {
        let mut sorted: Vec<&(String, String)> = self.pairs.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in sorted {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut args = Self::new();
        args.extend(iter);
        args
    }
}

impl<K, V> Extend<(K, V)> for QueryArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}
