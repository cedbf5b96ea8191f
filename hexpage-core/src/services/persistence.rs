use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use hexpage_model::CanonicalColor;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Days a remembered color stays valid.
const RETENTION_DAYS: i64 = 365;

/// Last-used color memory.
///
/// Save failures are the caller's to log; a load never fails, it just comes
/// back empty when there is nothing usable.
pub trait ColorStore: Send + Sync {
    fn save(&self, color: &CanonicalColor) -> Result<()>;
    fn load(&self) -> Option<CanonicalColor>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredColor {
    color: CanonicalColor,
    saved_at: DateTime<Utc>,
}

/// JSON-file store under the platform config directory.
#[derive(Debug, Clone)]
pub struct FileColorStore {
    path: PathBuf,
}

impl FileColorStore {
    /// Default location: `<config_dir>/hexpage/last_color.json`. `None` when
    /// the platform exposes no config directory.
    pub fn new() -> Option<Self> {
        dirs::config_dir().map(|dir| Self {
            path: dir.join("hexpage").join("last_color.json"),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ColorStore for FileColorStore {
    fn save(&self, color: &CanonicalColor) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let document = StoredColor {
            color: *color,
            saved_at: Utc::now(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&document)?)?;
        Ok(())
    }

    fn load(&self) -> Option<CanonicalColor> {
        let content = fs::read_to_string(&self.path).ok()?;
        let document: StoredColor = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(err) => {
                warn!(%err, path = %self.path.display(), "discarding unreadable color store");
                return None;
            }
        };
        let age = Utc::now().signed_duration_since(document.saved_at);
        if age > Duration::days(RETENTION_DAYS) {
            debug!(color = %document.color, "stored color expired");
            return None;
        }
        Some(document.color)
    }
}
