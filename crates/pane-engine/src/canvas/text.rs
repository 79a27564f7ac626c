use std::fmt;
use std::sync::Arc;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

/// Error returned by [`Font::from_bytes`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// A parsed TrueType/OpenType font used by [`Canvas::draw_text`](super::Canvas::draw_text).
///
/// Fonts are immutable after loading; clones share the parsed tables.
#[derive(Clone)]
pub struct Font {
    inner: Arc<fontdue::Font>,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.inner.name())
            .field("glyphs", &self.inner.glyph_count())
            .finish()
    }
}

/// Rasterized glyph coverage positioned relative to the text origin.
pub(crate) struct GlyphCoverage {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

impl Font {
    /// Parses a font from raw file bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        Ok(Self { inner: Arc::new(font) })
    }

    /// Size of the laid-out `text` at `px` pixels, as `(width, height)`.
    ///
    /// Width is the advance extent of the last glyph, so consecutive strings
    /// can be placed end to end.
    pub fn measure(&self, text: &str, px: f32) -> (f32, f32) {
        let layout = self.layout(text, px);
        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return (0.0, px * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = self.inner.metrics_indexed(g.key.glyph_index, px);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(px, f32::max);
        (w, h)
    }

    /// Rasterizes every visible glyph of `text`; positions are relative to the
    /// top-left corner of the line box.
    pub(crate) fn rasterize(&self, text: &str, px: f32) -> Vec<GlyphCoverage> {
        let layout = self.layout(text, px);
        layout
            .glyphs()
            .iter()
            .filter(|g| g.width > 0 && g.height > 0)
            .map(|g| {
                let (_, coverage) = self.inner.rasterize_config(g.key);
                GlyphCoverage {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: g.width,
                    height: g.height,
                    coverage,
                }
            })
            .collect()
    }

    fn layout(&self, text: &str, px: f32) -> Layout<()> {
        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[self.inner.as_ref()], &TextStyle::new(text, px, 0));
        layout
    }
}
