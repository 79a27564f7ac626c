use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{ImageReader, RgbaImage};

use crate::canvas::Color;

/// Error returned by the `load_image*` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Source path, when decoding from a path.
    pub path: Option<PathBuf>,
    pub message: String,
}

impl DecodeError {
    fn new(path: Option<&Path>, err: impl fmt::Display) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(p) => write!(f, "failed to decode image '{}': {}", p.display(), self.message),
            None => write!(f, "failed to decode image: {}", self.message),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Immutable decoded image, 8-bit straight-alpha RGBA.
///
/// Clones share the pixel data; a `Bitmap` can be sent to and read from any thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    image: Arc<RgbaImage>,
}

impl Bitmap {
    /// Wraps raw RGBA8 rows. Returns `None` if `rgba.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, rgba).map(Self::from)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel at `(x, y)`, `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Self {
        Self { image: Arc::new(image) }
    }
}

/// Loads and decodes the image at `path`.
///
/// The format is sniffed from the content, falling back to the file extension.
pub fn load_image(path: impl AsRef<Path>) -> Result<Bitmap, DecodeError> {
    let path = path.as_ref();
    let err = |e: &dyn fmt::Display| DecodeError::new(Some(path), e);

    let image = ImageReader::open(path)
        .map_err(|e| err(&e))?
        .with_guessed_format()
        .map_err(|e| err(&e))?
        .decode()
        .map_err(|e| err(&e))?;

    log::debug!("decoded '{}' ({}x{})", path.display(), image.width(), image.height());
    Ok(Bitmap::from(image.into_rgba8()))
}

/// Decodes an already opened image file. The format is sniffed from the content.
pub fn load_image_file(file: File) -> Result<Bitmap, DecodeError> {
    let image = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| DecodeError::new(None, e))?
        .decode()
        .map_err(|e| DecodeError::new(None, e))?;

    Ok(Bitmap::from(image.into_rgba8()))
}

/// Decodes an encoded image held in memory.
pub fn load_image_bytes(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::new(None, e))?
        .decode()
        .map_err(|e| DecodeError::new(None, e))?;

    Ok(Bitmap::from(image.into_rgba8()))
}
