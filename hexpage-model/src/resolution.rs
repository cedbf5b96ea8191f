use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Custom resolution form: `WIDTHxHEIGHT`, both decimal.
static CUSTOM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)x(\d+)$").expect("valid resolution pattern"));

/// Upper bound on either side of a custom export resolution.
pub const MAX_EXPORT_DIMENSION: u32 = 16384;

/// Export pixel dimensions identified by a resolution token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const FULL_HD: Resolution = Resolution::new(1920, 1080);
    pub const QHD: Resolution = Resolution::new(2560, 1440);
    pub const UHD_4K: Resolution = Resolution::new(3840, 2160);
    pub const UHD_6K: Resolution = Resolution::new(6144, 3456);
    pub const UHD_8K: Resolution = Resolution::new(7680, 4320);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse a resolution token into concrete dimensions.
    ///
    /// Total by contract: named tokens map to their fixed dimensions, a
    /// `WIDTHxHEIGHT` pair is accepted when both sides are positive and at
    /// most [`MAX_EXPORT_DIMENSION`], and everything else — including an
    /// absent token — falls back to 1080p.
    pub fn parse(token: Option<&str>) -> Resolution {
        let Some(token) = token else {
            return Self::FULL_HD;
        };
        let token = token.trim().to_ascii_lowercase();
        match token.as_str() {
            "1080p" | "1080" => Self::FULL_HD,
            "1440p" | "1440" => Self::QHD,
            "4k" => Self::UHD_4K,
            "6k" => Self::UHD_6K,
            "8k" => Self::UHD_8K,
            other => Self::parse_custom(other).unwrap_or(Self::FULL_HD),
        }
    }

    fn parse_custom(token: &str) -> Option<Resolution> {
        let caps = CUSTOM_PATTERN.captures(token)?;
        let width: u32 = caps[1].parse().ok()?;
        let height: u32 = caps[2].parse().ok()?;
        let in_bounds = |side| (1..=MAX_EXPORT_DIMENSION).contains(&side);
        (in_bounds(width) && in_bounds(height))
            .then_some(Resolution::new(width, height))
    }

    /// Display label: the well-known name when one exists, `WxH` otherwise.
    pub fn label(&self) -> String {
        match *self {
            Self::FULL_HD => "1080p".to_string(),
            Self::QHD => "1440p".to_string(),
            Self::UHD_4K => "4K".to_string(),
            Self::UHD_6K => "6K".to_string(),
            Self::UHD_8K => "8K".to_string(),
            Self { width, height } => format!("{width}x{height}"),
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FULL_HD
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
