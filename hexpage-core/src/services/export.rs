use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use hexpage_model::{CanonicalColor, Resolution};
use image::{ImageFormat, Rgb, RgbImage};
use tracing::info;

use crate::error::Result;

/// Image export delivery.
///
/// The controller decides *what* to export (current color, parsed
/// resolution); the surface decides how the bytes reach the user.
pub trait ExportSurface: Send + Sync {
    fn export(&self, color: &CanonicalColor, resolution: &Resolution) -> Result<()>;
}

/// Encode a solid fill of `color` at `resolution` as PNG bytes.
pub fn encode_png(color: &CanonicalColor, resolution: &Resolution) -> Result<Vec<u8>> {
    let (r, g, b) = color.channels();
    let buffer = RgbImage::from_pixel(resolution.width, resolution.height, Rgb([r, g, b]));
    let mut bytes = Vec::new();
    buffer.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// In-memory exporter: encodes and hands the bytes to a callback.
pub struct PngExporter<F>
where
    F: Fn(&str, Vec<u8>) + Send + Sync,
{
    deliver: F,
}

impl<F> PngExporter<F>
where
    F: Fn(&str, Vec<u8>) + Send + Sync,
{
    /// `deliver` receives the suggested file name and the encoded bytes.
    pub fn new(deliver: F) -> Self {
        Self { deliver }
    }
}

impl<F> ExportSurface for PngExporter<F>
where
    F: Fn(&str, Vec<u8>) + Send + Sync,
{
    fn export(&self, color: &CanonicalColor, resolution: &Resolution) -> Result<()> {
        let bytes = encode_png(color, resolution)?;
        (self.deliver)(&export_file_name(color, resolution), bytes);
        Ok(())
    }
}

/// Exporter writing `hex-<rrggbb>-<label>.png` files into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    target: PathBuf,
}

impl DirectoryExporter {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn file_path(&self, color: &CanonicalColor, resolution: &Resolution) -> PathBuf {
        self.target.join(export_file_name(color, resolution))
    }
}

impl ExportSurface for DirectoryExporter {
    fn export(&self, color: &CanonicalColor, resolution: &Resolution) -> Result<()> {
        let bytes = encode_png(color, resolution)?;
        fs::create_dir_all(&self.target)?;
        let path = self.file_path(color, resolution);
        fs::write(&path, bytes)?;
        info!(path = %path.display(), "wrote color export");
        Ok(())
    }
}

/// Suggested download name, e.g. `hex-ff8800-4k.png`.
pub fn export_file_name(color: &CanonicalColor, resolution: &Resolution) -> String {
    format!(
        "hex-{}-{}.png",
        color.hex_digits(),
        resolution.label().to_lowercase()
    )
}
