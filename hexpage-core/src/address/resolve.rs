use hexpage_model::CanonicalColor;

use super::Address;

impl Address {
    /// Resolve the color an address encodes, if any.
    ///
    /// Policy: the path is checked first, then the hash. Both historical
    /// variants of the tool exist (one prefers the path, one the hash); this
    /// implementation fixes path-first so the canonical `/rrggbb` form stays
    /// authoritative once a rewrite has happened. The losing candidate is
    /// never merged in.
    pub fn resolve_color(&self) -> Option<CanonicalColor> {
        if let Ok(color) = CanonicalColor::parse(self.path_segment()) {
            return Some(color);
        }
        self.hash
            .as_deref()
            .and_then(|hash| CanonicalColor::parse(hash).ok())
    }
}
