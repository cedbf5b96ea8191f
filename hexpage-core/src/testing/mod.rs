//! Recording stubs for every collaborator surface.
//!
//! Interactions are captured behind mutexes so tests assert on what the
//! controller actually did; `failing`-style constructors flip a surface into
//! its error path.

use std::sync::{Arc, Mutex};

use anyhow::bail;
use hexpage_model::{CanonicalColor, Resolution};

use crate::controller::Services;
use crate::error::{CoreError, Result};
use crate::services::{
    ClipboardSurface, ColorStore, DisplaySurface, ExportSurface,
};

/// Display stub recording repaints, notices, and fullscreen traffic.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    applied: Mutex<Vec<(CanonicalColor, bool)>>,
    notices: Mutex<Vec<String>>,
    decorations: Mutex<Vec<bool>>,
    native_requests: Mutex<usize>,
    native_exits: Mutex<usize>,
    deny_native_fullscreen: bool,
}

impl RecordingDisplay {
    /// A display whose native fullscreen API always denies the request.
    pub fn denying_native_fullscreen() -> Self {
        Self {
            deny_native_fullscreen: true,
            ..Self::default()
        }
    }

    pub fn applied(&self) -> Vec<(CanonicalColor, bool)> {
        self.applied.lock().expect("lock poisoned").clone()
    }

    pub fn last_applied(&self) -> Option<(CanonicalColor, bool)> {
        self.applied().last().copied()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().expect("lock poisoned").clone()
    }

    pub fn decorations(&self) -> Vec<bool> {
        self.decorations.lock().expect("lock poisoned").clone()
    }

    pub fn native_requests(&self) -> usize {
        *self.native_requests.lock().expect("lock poisoned")
    }

    pub fn native_exits(&self) -> usize {
        *self.native_exits.lock().expect("lock poisoned")
    }
}

impl DisplaySurface for RecordingDisplay {
    fn apply_color(&self, color: &CanonicalColor, is_light: bool) {
        self.applied
            .lock()
            .expect("lock poisoned")
            .push((*color, is_light));
    }

    fn show_notice(&self, message: &str) {
        self.notices
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
    }

    fn set_fullscreen_decoration(&self, active: bool) {
        self.decorations.lock().expect("lock poisoned").push(active);
    }

    fn request_native_fullscreen(&self) -> anyhow::Result<()> {
        *self.native_requests.lock().expect("lock poisoned") += 1;
        if self.deny_native_fullscreen {
            bail!("fullscreen request denied");
        }
        Ok(())
    }

    fn exit_native_fullscreen(&self) -> anyhow::Result<()> {
        *self.native_exits.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

/// In-memory color store, optionally failing every save.
#[derive(Debug, Default)]
pub struct MemoryColorStore {
    color: Mutex<Option<CanonicalColor>>,
    saves: Mutex<usize>,
    fail_saves: bool,
}

impl MemoryColorStore {
    pub fn with_color(color: CanonicalColor) -> Self {
        Self {
            color: Mutex::new(Some(color)),
            ..Self::default()
        }
    }

    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<CanonicalColor> {
        *self.color.lock().expect("lock poisoned")
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().expect("lock poisoned")
    }
}

impl ColorStore for MemoryColorStore {
    fn save(&self, color: &CanonicalColor) -> Result<()> {
        *self.saves.lock().expect("lock poisoned") += 1;
        if self.fail_saves {
            return Err(CoreError::PlatformUnavailable(
                "store rejected write".to_string(),
            ));
        }
        *self.color.lock().expect("lock poisoned") = Some(*color);
        Ok(())
    }

    fn load(&self) -> Option<CanonicalColor> {
        self.stored()
    }
}

/// Export stub recording every request, optionally failing them all.
#[derive(Debug, Default)]
pub struct RecordingExporter {
    exports: Mutex<Vec<(CanonicalColor, Resolution)>>,
    fail: bool,
}

impl RecordingExporter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn exports(&self) -> Vec<(CanonicalColor, Resolution)> {
        self.exports.lock().expect("lock poisoned").clone()
    }
}

impl ExportSurface for RecordingExporter {
    fn export(
        &self,
        color: &CanonicalColor,
        resolution: &Resolution,
    ) -> Result<()> {
        self.exports
            .lock()
            .expect("lock poisoned")
            .push((*color, *resolution));
        if self.fail {
            return Err(CoreError::Encoding("stub export failure".to_string()));
        }
        Ok(())
    }
}

/// Clipboard stub recording copied text, optionally failing every copy.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    copied: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().expect("lock poisoned").clone()
    }
}

impl ClipboardSurface for RecordingClipboard {
    fn copy_text(&self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            bail!("clipboard unavailable");
        }
        self.copied
            .lock()
            .expect("lock poisoned")
            .push(text.to_string());
        Ok(())
    }
}

/// One bundle of all four stubs, kept around so a test can both hand the
/// controller its services and inspect the recordings afterwards.
#[derive(Debug, Default)]
pub struct TestServices {
    pub display: Arc<RecordingDisplay>,
    pub store: Arc<MemoryColorStore>,
    pub exporter: Arc<RecordingExporter>,
    pub clipboard: Arc<RecordingClipboard>,
}

impl TestServices {
    pub fn services(&self) -> Services {
        Services {
            display: self.display.clone(),
            store: self.store.clone(),
            exporter: self.exporter.clone(),
            clipboard: self.clipboard.clone(),
        }
    }
}
