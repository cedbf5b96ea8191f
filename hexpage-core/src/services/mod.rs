//! Collaborator seams the controller drives, plus the implementations that
//! exist outside a browser: a file-backed color store, PNG export, and a
//! clipboard fallback chain. Everything is reached through `Arc<dyn Trait>`
//! so embeddings and tests swap surfaces freely.

pub mod clipboard;
pub mod display;
pub mod export;
pub mod persistence;

pub use clipboard::{ClipboardSurface, FallbackClipboard};
pub use display::DisplaySurface;
pub use export::{
    DirectoryExporter, ExportSurface, PngExporter, encode_png,
    export_file_name,
};
pub use persistence::{ColorStore, FileColorStore};
