use url::form_urlencoded;

/// Ordered collection of query parameters.
///
/// Pairs keep their relative order across a parse/render round trip, so an
/// address rewrite never reorders what the user had in the address bar.
/// Values are stored decoded and re-encoded on render, matching how the
/// address bar itself normalizes a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse the query-string portion of an address (without the `?`).
    pub fn parse(raw: &str) -> Self {
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// Render back to query-string form (without the `?`).
    pub fn render(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            )
            .finish()
    }

    /// Whether the parameter is present at all (flag semantics).
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Value of the first occurrence, if any. A bare flag reads as `""`.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set the first occurrence to `value`, or append when absent.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove every occurrence. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(k, _)| k != name);
        self.pairs.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
