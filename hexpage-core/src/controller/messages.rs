/// Messages handled by the color state controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Color edits
    SetColor(String), // raw input from picker, manual entry, or paste

    // Navigation events
    PopState,    // back/forward landed on another entry
    HashChanged, // the fragment changed in place

    // Share/export
    CopyRequested,
    DownloadRequested(Option<String>), // resolution token, default when absent

    // Fullscreen
    FullscreenToggled,
    FullscreenExitRequested, // Escape or the platform exit affordance
    NativeFullscreenChanged(bool),

    // Deferred query-parameter effects
    FullscreenFromQuery,
    DownloadFromQuery(Option<String>),
}

impl Message {
    /// Stable name for diagnostics and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Message::SetColor(_) => "Message::SetColor",
            Message::PopState => "Message::PopState",
            Message::HashChanged => "Message::HashChanged",
            Message::CopyRequested => "Message::CopyRequested",
            Message::DownloadRequested(_) => "Message::DownloadRequested",
            Message::FullscreenToggled => "Message::FullscreenToggled",
            Message::FullscreenExitRequested => {
                "Message::FullscreenExitRequested"
            }
            Message::NativeFullscreenChanged(_) => {
                "Message::NativeFullscreenChanged"
            }
            Message::FullscreenFromQuery => "Message::FullscreenFromQuery",
            Message::DownloadFromQuery(_) => "Message::DownloadFromQuery",
        }
    }
}
