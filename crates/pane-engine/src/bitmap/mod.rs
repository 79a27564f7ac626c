//! Image decoding.
//!
//! Decodes a path, an open file, or in-memory bytes into an immutable RGBA
//! [`Bitmap`]. Every failure (missing file, unknown format, corrupt data) is
//! reported as a single [`DecodeError`]. Decoding is synchronous on the calling
//! thread.

mod decode;

pub use decode::{load_image, load_image_bytes, load_image_file, Bitmap, DecodeError};
