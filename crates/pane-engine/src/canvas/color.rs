/// Straight-alpha sRGB color, one byte per channel.
///
/// The presentation surface is opaque `0x00RRGGBB`; alpha only matters while
/// compositing onto the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Same color with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Packs into the surface format `0x00RRGGBB`, dropping alpha.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks a surface pixel; the result is opaque.
    #[inline]
    pub const fn from_pixel(px: u32) -> Self {
        Self::rgb((px >> 16) as u8, (px >> 8) as u8, px as u8)
    }

    /// Composites `self` over the surface pixel `dst` with an extra coverage
    /// factor in `0..=255` (glyph antialiasing), returning the new pixel.
    #[inline]
    pub fn blend_over(self, dst: u32, coverage: u8) -> u32 {
        let alpha = mul_u8(self.a, coverage);
        match alpha {
            0 => dst,
            255 => self.to_pixel(),
            _ => {
                let d = Self::from_pixel(dst);
                Self::rgb(
                    lerp_u8(d.r, self.r, alpha),
                    lerp_u8(d.g, self.g, alpha),
                    lerp_u8(d.b, self.b, alpha),
                )
                .to_pixel()
            }
        }
    }
}

/// `a * b / 255`, rounded.
#[inline]
fn mul_u8(a: u8, b: u8) -> u8 {
    let t = a as u32 * b as u32 + 128;
    ((t + (t >> 8)) >> 8) as u8
}

#[inline]
fn lerp_u8(from: u8, to: u8, t: u8) -> u8 {
    let inv = 255 - t as u32;
    ((from as u32 * inv + to as u32 * t as u32 + 127) / 255) as u8
}
