//! The query multimap.

use crate::encoding;

/// An ordered multimap view of a query string.
///
/// Keys keep their insertion order and every key keeps the order of its
/// values; decoding `foo=bar&foo=foo` appends rather than overwrites. The
/// bag is a mutable builder owned by a single caller — a `Query` is never
/// shared with the [`Uri`] it came from, and mutating it never touches
/// that `Uri`.
///
/// [`Uri`]: crate::Uri
///
/// # Examples
///
/// ```
/// use lenient_uri::Query;
///
/// let mut query = Query::decode("q=go+language&lang=en");
/// assert_eq!(query.get("q"), "go language");
///
/// query.add("lang", "de").del("q");
/// assert_eq!(query.encode(), "lang=en&lang=de");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    items: Vec<(String, Vec<String>)>,
}

const NO_VALUES: &[String] = &[];

impl Query {
    /// Creates an empty query.
    #[inline]
    pub fn new() -> Query {
        Query::default()
    }

    /// Creates a query from `(key, values)` pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Query;
    ///
    /// let query = Query::from_pairs([("a", vec!["1", "2"]), ("b", vec![""])]);
    /// assert_eq!(query.encode(), "a=1&a=2&b");
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Query
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let mut query = Query::new();
        for (key, values) in pairs {
            query.set(key, values);
        }
        query
    }

    /// Decodes a raw query string.
    ///
    /// Splits on `&`, then each segment on its first `=`; both halves are
    /// form-decoded (`+` means space). A segment without `=` records the
    /// key with one empty value. Repeated keys append.
    ///
    /// There are no error conditions; malformed percent sequences pass
    /// through as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Query;
    ///
    /// let query = Query::decode("foo=bar&foo=foo&flag");
    /// assert_eq!(query.values("foo"), ["bar", "foo"]);
    /// assert_eq!(query.values("flag"), [""]);
    /// ```
    pub fn decode(raw: &str) -> Query {
        let mut query = Query::new();
        for part in raw.split('&') {
            match part.split_once('=') {
                Some((key, value)) => query.add(
                    encoding::form_decode(key),
                    encoding::form_decode(value),
                ),
                None => query.add(encoding::form_decode(part), ""),
            };
        }
        query
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }

    /// Returns the first value for `key`, or "" if the key is absent.
    ///
    /// An empty return is not a presence signal; use [`has`](Self::has)
    /// to tell a missing key from an empty value.
    pub fn get(&self, key: &str) -> &str {
        self.values(key).first().map_or("", String::as_str)
    }

    /// Returns every value recorded for `key`, in insertion order.
    pub fn values(&self, key: &str) -> &[String] {
        self.find(key)
            .map_or(NO_VALUES, |i| self.items[i].1.as_slice())
    }

    /// Returns `true` if `key` has at least one recorded value, counting
    /// a single empty value.
    pub fn has(&self, key: &str) -> bool {
        !self.values(key).is_empty()
    }

    /// Appends one value for `key`, preserving prior ones.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Query {
        let key = key.into();
        let value = value.into();
        match self.find(&key) {
            Some(i) => self.items[i].1.push(value),
            None => self.items.push((key, vec![value])),
        }
        self
    }

    /// Replaces the whole value sequence for `key`.
    ///
    /// A key already present keeps its position.
    pub fn set<V>(&mut self, key: impl Into<String>, values: V) -> &mut Query
    where
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let key = key.into();
        let values = values.into_iter().map(Into::into).collect();
        match self.find(&key) {
            Some(i) => self.items[i].1 = values,
            None => self.items.push((key, values)),
        }
        self
    }

    /// Removes `key` entirely.
    pub fn del(&mut self, key: &str) -> &mut Query {
        if let Some(i) = self.find(key) {
            self.items.remove(i);
        }
        self
    }

    /// Returns `true` if no keys are recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of recorded keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over `(key, value)` pairs, flattening repeated
    /// keys in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Query;
    ///
    /// let query = Query::decode("a=1&b=2&a=3");
    /// let pairs: Vec<_> = query.pairs().collect();
    /// assert_eq!(pairs, [("a", "1"), ("a", "3"), ("b", "2")]);
    /// ```
    pub fn pairs(&self) -> Pairs<'_> {
        Pairs {
            items: &self.items,
            key: 0,
            val: 0,
        }
    }

    /// Encodes the query back into a raw query string.
    ///
    /// Keys render in insertion order, values in order; an empty value
    /// renders the bare key without "="; segments join with `&`. Spaces
    /// come out as `+`, the exact inverse of [`decode`](Self::decode).
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Query;
    ///
    /// let mut query = Query::new();
    /// query.add("q", "go language").add("flag", "");
    /// assert_eq!(query.encode(), "q=go+language&flag");
    /// ```
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.pairs() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&encoding::form_encode(key));
            if !value.is_empty() {
                out.push('=');
                out.push_str(&encoding::form_encode(value));
            }
        }
        out
    }
}

/// An iterator over the `(key, value)` pairs of a [`Query`].
///
/// Created by [`Query::pairs`].
#[derive(Clone, Debug)]
pub struct Pairs<'a> {
    items: &'a [(String, Vec<String>)],
    key: usize,
    val: usize,
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (key, values) = self.items.get(self.key)?;
            match values.get(self.val) {
                Some(value) => {
                    self.val += 1;
                    return Some((key, value));
                }
                None => {
                    self.key += 1;
                    self.val = 0;
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a str, &'a str);
    type IntoIter = Pairs<'a>;

    #[inline]
    fn into_iter(self) -> Pairs<'a> {
        self.pairs()
    }
}
