//! Screenshot acquisition.
//!
//! The pipeline only needs decoded RGBA pixels; where they come from sits
//! behind [`ImageSource`] so a file on disk and an in-memory upload are
//! handled the same way.

use image::RgbaImage;
use std::path::PathBuf;

use crate::error::ImageAcquisitionError;

/// Something that can produce one screenshot.
pub trait ImageSource {
    fn acquire(&self) -> Result<RgbaImage, ImageAcquisitionError>;

    /// Human-readable origin, recorded in the report.
    fn describe(&self) -> String;
}

/// A screenshot file in any format the `image` crate can decode.
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&self) -> Result<RgbaImage, ImageAcquisitionError> {
        let bytes = std::fs::read(&self.path).map_err(|source| ImageAcquisitionError::Read {
            path: self.path.clone(),
            source,
        })?;
        decode(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Encoded image bytes already in memory (e.g. received over IPC).
pub struct BufferImageSource {
    bytes: Vec<u8>,
}

impl BufferImageSource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl ImageSource for BufferImageSource {
    fn acquire(&self) -> Result<RgbaImage, ImageAcquisitionError> {
        decode(&self.bytes)
    }

    fn describe(&self) -> String {
        format!("<buffer: {} bytes>", self.bytes.len())
    }
}

fn decode(bytes: &[u8]) -> Result<RgbaImage, ImageAcquisitionError> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageAcquisitionError::Empty { width, height });
    }

    crate::log(&format!("Acquired screenshot: {}x{}", width, height));
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_file_source_reads_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.png");
        std::fs::write(&path, png_bytes(40, 30)).unwrap();

        let source = FileImageSource::new(&path);
        let img = source.acquire().unwrap();

        assert_eq!(img.dimensions(), (40, 30));
        assert_eq!(img.get_pixel(5, 5), &Rgba([10, 200, 30, 255]));
        assert_eq!(source.describe(), path.display().to_string());
    }

    #[test]
    fn test_file_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = FileImageSource::new(dir.path().join("missing.png"));

        match source.acquire() {
            Err(ImageAcquisitionError::Read { path, .. }) => {
                assert!(path.ends_with("missing.png"));
            }
            other => panic!("expected read error, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn test_buffer_source() {
        let source = BufferImageSource::new(png_bytes(8, 8));
        assert_eq!(source.acquire().unwrap().dimensions(), (8, 8));
        assert!(source.describe().starts_with("<buffer:"));
    }

    #[test]
    fn test_buffer_source_garbage_fails_decode() {
        let source = BufferImageSource::new(b"definitely not an image".to_vec());
        assert!(matches!(
            source.acquire(),
            Err(ImageAcquisitionError::Decode(_))
        ));
    }
}
