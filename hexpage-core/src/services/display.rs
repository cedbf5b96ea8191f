use hexpage_model::CanonicalColor;

/// Rendering and platform surface the controller drives.
///
/// Implementations repaint the page, surface transient notices (toasts),
/// reflect the fullscreen flag into the chrome, and own the native
/// fullscreen API. Native calls are best-effort: a denial is reported as an
/// error and the controller ignores it.
pub trait DisplaySurface: Send + Sync {
    /// Repaint with the new color and its contrast classification.
    fn apply_color(&self, color: &CanonicalColor, is_light: bool);

    /// Show a transient user-visible notice.
    fn show_notice(&self, message: &str);

    /// Reflect the fullscreen flag into the page chrome.
    fn set_fullscreen_decoration(&self, active: bool);

    /// Ask the platform to enter fullscreen.
    fn request_native_fullscreen(&self) -> anyhow::Result<()>;

    /// Ask the platform to leave fullscreen.
    fn exit_native_fullscreen(&self) -> anyhow::Result<()>;
}
