//! Color types and operations.
//!
//! Provides the color types the identicon pipeline works in:
//! - `Rgba`: f64 components (working space for the HSV conversion)
//! - `Rgba8`: u8 components (8-bit per channel, what lands in the buffer)
//! - `Hsv`: hue/saturation/value, each in [0, 1]
//!
//! and the seed-to-foreground derivation. The background is a fixed constant.

// ============================================================================
// Component order (for pixel format layer)
// ============================================================================

/// RGBA component order: R=0, G=1, B=2, A=3
pub struct OrderRgba;
impl OrderRgba {
    pub const R: usize = 0;
    pub const G: usize = 1;
    pub const B: usize = 2;
    pub const A: usize = 3;
    pub const N: usize = 4;
}

// ============================================================================
// Rgba (f64 precision color)
// ============================================================================

/// RGBA color with f64 components in range [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_SHIFT: u32 = 8;
    pub const BASE_SCALE: u32 = 1 << Self::BASE_SHIFT;
    pub const BASE_MASK: u32 = Self::BASE_SCALE - 1;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK as u8)
    }

    /// Convert from `Rgba` (f64) by scaling to [0, 255] and truncating.
    ///
    /// Values outside [0, 1] saturate at the channel bounds.
    pub fn from_rgba_trunc(c: &Rgba) -> Self {
        let scale = Self::BASE_MASK as f64;
        Self {
            r: (c.r * scale) as u8,
            g: (c.g * scale) as u8,
            b: (c.b * scale) as u8,
            a: (c.a * scale) as u8,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK as u8
    }

    /// Components in `OrderRgba` layout.
    pub fn to_array(&self) -> [u8; OrderRgba::N] {
        let mut out = [0u8; OrderRgba::N];
        out[OrderRgba::R] = self.r;
        out[OrderRgba::G] = self.g;
        out[OrderRgba::B] = self.b;
        out[OrderRgba::A] = self.a;
        out
    }

    pub fn from_slice(p: &[u8]) -> Self {
        Self {
            r: p[OrderRgba::R],
            g: p[OrderRgba::G],
            b: p[OrderRgba::B],
            a: p[OrderRgba::A],
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

/// Light neutral gray every identicon starts from.
pub const BACKGROUND: Rgba8 = Rgba8::new_opaque(240, 240, 240);

// ============================================================================
// Hsv
// ============================================================================

/// Hue/saturation/value color, each component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Six-sector HSV to RGB conversion. The result is fully opaque.
    pub fn to_rgba(&self) -> Rgba {
        let (s, v) = (self.s, self.v);
        if s == 0.0 {
            return Rgba::new_rgb(v, v, v);
        }

        let h = self.h * 6.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match (i as i64).rem_euclid(6) {
            0 => Rgba::new_rgb(v, t, p),
            1 => Rgba::new_rgb(q, v, p),
            2 => Rgba::new_rgb(p, v, t),
            3 => Rgba::new_rgb(p, q, v),
            4 => Rgba::new_rgb(t, p, v),
            _ => Rgba::new_rgb(v, p, q),
        }
    }
}

// ============================================================================
// Foreground derivation
// ============================================================================

/// Derive the HSV foreground for a seed.
///
/// Saturation and value share the same `seed % 1000` term; changing that
/// would recolor every existing identicon.
pub fn foreground_hsv(seed: u64) -> Hsv {
    let hue = (seed % 360) as f64 / 360.0;
    let saturation = 0.5 + (seed % 1000) as f64 / 2000.0;
    let brightness = 0.5 + (seed % 1000) as f64 / 2000.0;
    Hsv::new(hue, saturation, brightness)
}

/// Derive the opaque 8-bit foreground color for a seed.
pub fn derive_foreground(seed: u64) -> Rgba8 {
    Rgba8::from_rgba_trunc(&foreground_hsv(seed).to_rgba())
}

// ============================================================================
// Tests
// ============================================================================
