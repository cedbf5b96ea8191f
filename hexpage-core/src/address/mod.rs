//! Page address decomposition and composition.
//!
//! An address is the path, query-parameter, and hash-fragment triple of the
//! page location. Parsing is total (any string decomposes), and rendering is
//! bit-exact for the forms the controller writes: `/rrggbb[?params][#hash]`.

mod query;
mod resolve;

use std::fmt;

use hexpage_model::CanonicalColor;

pub use query::QueryParams;

/// A decomposed page address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Path with its leading `/`.
    pub path: String,
    pub query: QueryParams,
    /// Hash fragment without the `#`.
    pub hash: Option<String>,
}

impl Address {
    /// The bare root address, `/`.
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: QueryParams::default(),
            hash: None,
        }
    }

    /// Decompose a relative address string. Never fails: missing pieces
    /// default to an empty query and no hash, and the path is normalized to
    /// carry a leading `/`.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, QueryParams::parse(query)),
            None => (rest, QueryParams::default()),
        };
        let path = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self { path, query, hash }
    }

    /// The canonical address for a color: `/` + six hex digits, the given
    /// query carried over, no hash.
    pub fn for_color(color: &CanonicalColor, query: QueryParams) -> Self {
        Self {
            path: format!("/{}", color.hex_digits()),
            query,
            hash: None,
        }
    }

    /// Path without its leading `/`.
    pub fn path_segment(&self) -> &str {
        self.path.strip_prefix('/').unwrap_or(&self.path)
    }

    /// Render to the textual form `path[?query][#hash]`.
    pub fn render(&self) -> String {
        let mut rendered = self.path.clone();
        if !self.query.is_empty() {
            rendered.push('?');
            rendered.push_str(&self.query.render());
        }
        if let Some(hash) = &self.hash {
            rendered.push('#');
            rendered.push_str(hash);
        }
        rendered
    }

    /// Copy with one query parameter set, everything else untouched.
    pub fn with_query_param(&self, name: &str, value: &str) -> Self {
        let mut address = self.clone();
        address.query.set(name, value);
        address
    }

    /// Copy with one query parameter removed, everything else untouched.
    pub fn without_query_param(&self, name: &str) -> Self {
        let mut address = self.clone();
        address.query.remove(name);
        address
    }

    /// Copy with the hash cleared, path and query untouched.
    pub fn without_hash(&self) -> Self {
        let mut address = self.clone();
        address.hash = None;
        address
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_address() {
        let address = Address::parse("/aabbcc?fullscreen&x=1#ff0000");
        assert_eq!(address.path, "/aabbcc");
        assert!(address.query.contains("fullscreen"));
        assert_eq!(address.query.value_of("x"), Some("1"));
        assert_eq!(address.hash.as_deref(), Some("ff0000"));
    }

    #[test]
    fn parse_is_total() {
        assert_eq!(Address::parse(""), Address::root());
        let address = Address::parse("#abc");
        assert_eq!(address.path, "/");
        assert_eq!(address.hash.as_deref(), Some("abc"));
        let address = Address::parse("aabbcc");
        assert_eq!(address.path, "/aabbcc");
    }

    #[test]
    fn renders_only_present_pieces() {
        assert_eq!(Address::root().render(), "/");
        assert_eq!(Address::parse("/abc?x=1").render(), "/abc?x=1");
        assert_eq!(Address::parse("/abc#fff").render(), "/abc#fff");
        assert_eq!(
            Address::parse("/abc?x=1#fff").render(),
            "/abc?x=1#fff"
        );
    }

    #[test]
    fn mutators_touch_only_their_piece() {
        let address = Address::parse("/aabbcc?a=1#fff");
        let with = address.with_query_param("download", "4k");
        assert_eq!(with.render(), "/aabbcc?a=1&download=4k#fff");
        let without = with.without_query_param("a");
        assert_eq!(without.render(), "/aabbcc?download=4k#fff");
        assert_eq!(without.without_hash().render(), "/aabbcc?download=4k");
    }

    #[test]
    fn for_color_builds_canonical_path() {
        let color = CanonicalColor::parse("#AaBbCc").unwrap();
        let address = Address::for_color(&color, QueryParams::parse("k=v"));
        assert_eq!(address.render(), "/aabbcc?k=v");
    }
}
