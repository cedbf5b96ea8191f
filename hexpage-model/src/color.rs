use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ModelError;

/// Exactly 3 or 6 hex digits, after an optional leading `#` was stripped.
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{3}$|^[0-9a-fA-F]{6}$").expect("valid hex pattern")
});

/// A validated RGB24 color in its single canonical form.
///
/// The only textual rendering is `#` followed by six lowercase hex digits.
/// Every constructor goes through normalization or takes explicit channel
/// bytes, so a `CanonicalColor` never holds a partially validated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalColor {
    rgb: [u8; 3],
}

impl CanonicalColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }

    /// Normalize raw user input into a canonical color.
    ///
    /// Accepts exactly 3 or 6 case-insensitive hex digits, with or without a
    /// single leading `#`. A 3-digit form expands by doubling each digit
    /// (`abc` becomes `aabbcc`). Anything else is rejected.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        if !HEX_PATTERN.is_match(digits) {
            return Err(ModelError::InvalidHex(raw.to_string()));
        }

        let expanded;
        let digits = if digits.len() == 3 {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        } else {
            digits
        };

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ModelError::InvalidHex(raw.to_string()))?;
        Ok(Self::from_rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }

    pub const fn channels(self) -> (u8, u8, u8) {
        (self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// The six hex digits without the leading `#`, as used in address paths.
    pub fn hex_digits(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.rgb[0], self.rgb[1], self.rgb[2])
    }

    /// Relative luminance on the 0..=1 scale.
    ///
    /// The 0.299/0.587/0.114 weighting must stay bit-compatible with the
    /// display layer's contrast styling, so do not swap in another formula.
    pub fn luminance(self) -> f64 {
        let (r, g, b) = self.channels();
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b))
            / 255.0
    }

    /// Whether UI chrome over this color needs dark (rather than light) ink.
    pub fn is_light(self) -> bool {
        self.luminance() > 0.5
    }
}

impl Default for CanonicalColor {
    fn default() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex_digits())
    }
}

impl std::str::FromStr for CanonicalColor {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
