//! Rendering buffer: the owned pixel raster an identicon is drawn into.
//!
//! `PixelBuffer` stores packed RGBA8 pixels, top-down, with a stride of
//! exactly `width * 4` bytes. That layout is what PNG and BMP encoders
//! expect, so callers can hand `as_bytes()` or `into_raw()` straight to one.

use crate::color::{OrderRgba, Rgba8};

/// Bytes per pixel.
pub const BPP: usize = OrderRgba::N;

/// Owned RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Allocate a `width × height` buffer filled with `c`.
    ///
    /// # Panics
    ///
    /// Panics if the byte length of the buffer does not fit in `usize`.
    pub fn new(width: u32, height: u32, c: Rgba8) -> Self {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BPP))
            .unwrap_or_else(|| panic!("{}x{} buffer overflows usize", width, height));
        let mut buf = Self {
            data: vec![0u8; len],
            width,
            height,
        };
        buf.fill(c);
        buf
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes.
    pub fn stride(&self) -> usize {
        self.width as usize * BPP
    }

    /// Get an immutable slice for row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Get a mutable slice for row `y`.
    pub fn row_slice_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Pixel at (x, y), or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = x as usize * BPP;
        Some(Rgba8::from_slice(&self.row_slice(y)[off..off + BPP]))
    }

    /// Overwrite every pixel with `c`.
    pub fn fill(&mut self, c: Rgba8) {
        let px = c.to_array();
        for chunk in self.data.chunks_exact_mut(BPP) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data.chunks_exact(BPP).map(Rgba8::from_slice)
    }

    /// Packed RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Give up the buffer and return the packed RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

// ============================================================================
// Tests
// ============================================================================
