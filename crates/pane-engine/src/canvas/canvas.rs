use crate::bitmap::Bitmap;

use super::color::Color;
use super::text::Font;

/// CPU pixel buffer presented to the window after each `App::on_draw`.
///
/// Pixels are `0x00RRGGBB`, row-major, `width * height` long. Coordinates are
/// canvas-local physical pixels; everything drawn outside the bounds is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Resizes the buffer, keeping the overlapping top-left region.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == self.size() {
            return;
        }

        let mut pixels = vec![0; width as usize * height as usize];
        let copy_w = self.width.min(width) as usize;
        for y in 0..self.height.min(height) as usize {
            let src = y * self.width as usize;
            let dst = y * width as usize;
            pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }

        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Fills the whole canvas with `color`, ignoring its alpha.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    /// Reads back a pixel; the result is always opaque.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color::from_pixel(self.pixels[i]))
    }

    /// Composites `color` onto one pixel.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.blend(x, y, color, 255);
    }

    #[inline]
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.blend_over(self.pixels[i], coverage);
        }
    }

    /// Clips a rectangle to the canvas, returning `(x0, y0, x1, y1)` half-open.
    fn clip(&self, x: i32, y: i32, w: i32, h: i32) -> Option<(usize, usize, usize, usize)> {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Fills an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };

        let stride = self.width as usize;
        if color.a == 255 {
            let px = color.to_pixel();
            for row in y0..y1 {
                self.pixels[row * stride + x0..row * stride + x1].fill(px);
            }
        } else {
            for row in y0..y1 {
                for p in &mut self.pixels[row * stride + x0..row * stride + x1] {
                    *p = color.blend_over(*p, 255);
                }
            }
        }
    }

    /// Outlines a rectangle with a one pixel border.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        if h > 1 {
            self.fill_rect(x, y + h - 1, w, 1, color);
        }
        if h > 2 {
            self.fill_rect(x, y + 1, 1, h - 2, color);
            if w > 1 {
                self.fill_rect(x + w - 1, y + 1, 1, h - 2, color);
            }
        }
    }

    /// Draws a one pixel line from `(x0, y0)` to `(x1, y1)`, both ends included.
    ///
    /// The segment is clipped to the canvas first, so only visible pixels are
    /// stepped through regardless of how far off-canvas the endpoints lie.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let Some((mut x, mut y, x1, y1)) = self.clip_line(x0, y0, x1, y1) else {
            return;
        };

        // Bresenham, all octants. Clipped coordinates are canvas-sized, i64 leaves headroom.
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x as i32, y as i32, color, 255);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment against the pixel centers of the canvas.
    ///
    /// Returns the visible endpoints, or `None` when no part of the segment is visible.
    fn clip_line(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<(i64, i64, i64, i64)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let (fx, fy) = (f64::from(x0), f64::from(y0));
        let dx = f64::from(x1) - fx;
        let dy = f64::from(y1) - fy;
        let x_max = f64::from(self.width - 1);
        let y_max = f64::from(self.height - 1);

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-dx, fx), (dx, x_max - fx), (-dy, fy), (dy, y_max - fy)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let at = |t: f64| {
            let x = (fx + t * dx).round().clamp(0.0, x_max) as i64;
            let y = (fy + t * dy).round().clamp(0.0, y_max) as i64;
            (x, y)
        };
        let (ax, ay) = at(t0);
        let (bx, by) = at(t1);
        Some((ax, ay, bx, by))
    }

    /// Blits `bitmap` with its top-left corner at `(x, y)`, alpha-blended.
    pub fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        let (bw, bh) = bitmap.dimensions();
        let Some((x0, y0, x1, y1)) = self.clip(x, y, bw as i32, bh as i32) else {
            return;
        };

        let stride = self.width as usize;
        let raw = bitmap.as_raw();
        for row in y0..y1 {
            let src_y = (row as i64 - y as i64) as usize;
            for col in x0..x1 {
                let src_x = (col as i64 - x as i64) as usize;
                let s = (src_y * bw as usize + src_x) * 4;
                let color = Color::rgba(raw[s], raw[s + 1], raw[s + 2], raw[s + 3]);
                let d = &mut self.pixels[row * stride + col];
                *d = color.blend_over(*d, 255);
            }
        }
    }

    /// Draws `text` with the top-left of its line box at `(x, y)`.
    ///
    /// Returns the advance width so callers can continue on the same line.
    pub fn draw_text(&mut self, font: &Font, text: &str, x: i32, y: i32, px: f32, color: Color) -> f32 {
        for glyph in font.rasterize(text, px) {
            for gy in 0..glyph.height {
                for gx in 0..glyph.width {
                    let cov = glyph.coverage[gy * glyph.width + gx];
                    if cov == 0 {
                        continue;
                    }
                    self.blend(x + glyph.x + gx as i32, y + glyph.y + gy as i32, color, cov);
                }
            }
        }
        font.measure(text, px).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn count(canvas: &Canvas, color: Color) -> usize {
        canvas.pixels().iter().filter(|&&p| p == color.to_pixel()).count()
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn new_canvas_is_black_and_sized() {
        let c = Canvas::new(8, 4);
        assert_eq!(c.size(), (8, 4));
        assert_eq!(c.pixels().len(), 32);
        assert_eq!(count(&c, Color::BLACK), 32);
    }

    #[test]
    fn fill_rect_is_clipped_to_bounds() {
        let mut c = Canvas::new(10, 10);
        c.fill_rect(-5, 8, 8, 10, RED);

        // x in 0..3, y in 8..10
        assert_eq!(count(&c, RED), 6);
        assert_eq!(c.pixel(2, 9), Some(RED));
        assert_eq!(c.pixel(3, 9), Some(Color::BLACK));
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut c = Canvas::new(4, 4);
        c.fill_rect(10, 10, 5, 5, RED);
        c.fill_rect(0, 0, 0, 3, RED);
        assert_eq!(count(&c, RED), 0);
    }

    #[test]
    fn translucent_fill_blends() {
        let mut c = Canvas::new(1, 1);
        c.clear(Color::WHITE);
        c.fill_rect(0, 0, 1, 1, Color::BLACK.with_alpha(128));

        let p = c.pixel(0, 0).unwrap();
        assert!((126..=128).contains(&p.r));
    }

    #[test]
    fn stroke_rect_draws_border_only() {
        let mut c = Canvas::new(5, 5);
        c.stroke_rect(0, 0, 5, 5, RED);

        assert_eq!(count(&c, RED), 16);
        assert_eq!(c.pixel(2, 2), Some(Color::BLACK));
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn line_includes_both_endpoints() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(1, 1, 8, 5, RED);

        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(8, 5), Some(RED));
        assert_eq!(count(&c, RED), 8);
    }

    #[test]
    fn reversed_line_covers_same_extent() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(7, 9, 7, 0, RED);
        assert_eq!(count(&c, RED), 10);
    }

    #[test]
    fn extreme_endpoints_are_clipped_without_overflow() {
        let mut c = Canvas::new(8, 8);
        c.draw_line(-2_000_000_000, 0, 2_000_000_000, 0, RED);
        assert_eq!(count(&c, RED), 8);

        let mut c = Canvas::new(8, 8);
        c.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, RED);
        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(7, 7), Some(RED));
        assert_eq!(count(&c, RED), 8);
    }

    #[test]
    fn far_off_canvas_end_only_touches_visible_pixels() {
        let mut c = Canvas::new(8, 8);
        c.draw_line(0, 0, 400_000_000, 3, RED);
        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(7, 0), Some(RED));
        assert_eq!(count(&c, RED), 8);
    }

    #[test]
    fn line_entirely_outside_draws_nothing() {
        let mut c = Canvas::new(8, 8);
        c.draw_line(-10, -5, -1, -20, RED);
        c.draw_line(20, 0, 20, 7, RED);
        assert_eq!(count(&c, RED), 0);

        let mut empty = Canvas::new(0, 0);
        empty.draw_line(0, 0, 5, 5, RED);
        assert!(empty.pixels().is_empty());
    }

    // ── bitmaps ───────────────────────────────────────────────────────────

    #[test]
    fn bitmap_blit_respects_alpha_and_clipping() {
        // 2x2: opaque red, transparent, opaque red, opaque red
        let rgba = vec![
            255, 0, 0, 255, 0, 255, 0, 0,
            255, 0, 0, 255, 255, 0, 0, 255,
        ];
        let bmp = Bitmap::from_rgba(2, 2, rgba).unwrap();

        let mut c = Canvas::new(3, 3);
        c.draw_bitmap(&bmp, 1, 1);
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(c.pixel(2, 1), Some(Color::BLACK));
        assert_eq!(count(&c, RED), 3);

        let mut c = Canvas::new(3, 3);
        c.draw_bitmap(&bmp, -1, -1);
        assert_eq!(count(&c, RED), 1);
        assert_eq!(c.pixel(0, 0), Some(RED));
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn resize_keeps_top_left_region() {
        let mut c = Canvas::new(4, 4);
        c.put_pixel(1, 1, RED);
        c.put_pixel(3, 3, RED);

        c.resize(2, 6);
        assert_eq!(c.size(), (2, 6));
        assert_eq!(c.pixel(1, 1), Some(RED));
        assert_eq!(count(&c, RED), 1);
    }
}
