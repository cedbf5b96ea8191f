use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// Text copy surface.
pub trait ClipboardSurface: Send + Sync {
    fn copy_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Primary clipboard with a legacy fallback, tried in order.
///
/// Mirrors the async-clipboard-then-execCommand chain of the original page:
/// the legacy path only runs when the primary surface reports failure, and
/// its result is the overall result.
pub struct FallbackClipboard {
    primary: Arc<dyn ClipboardSurface>,
    legacy: Arc<dyn ClipboardSurface>,
}

impl FallbackClipboard {
    pub fn new(
        primary: Arc<dyn ClipboardSurface>,
        legacy: Arc<dyn ClipboardSurface>,
    ) -> Self {
        Self { primary, legacy }
    }
}

impl ClipboardSurface for FallbackClipboard {
    fn copy_text(&self, text: &str) -> anyhow::Result<()> {
        match self.primary.copy_text(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                debug!(%err, "primary clipboard failed, trying legacy path");
                self.legacy.copy_text(text)
            }
        }
    }
}

impl fmt::Debug for FallbackClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackClipboard").finish_non_exhaustive()
    }
}
