//! RGBA pixel format.
//!
//! Pixel format that reads and writes RGBA32 pixels (4 bytes per pixel) in a
//! [`PixelBuffer`]. Identicons are drawn with fully opaque colors and no
//! anti-aliasing, so the format only copies pixels; there is no blending.
//!
//! Provides the `PixelFormat` trait and `PixfmtRgba32` concrete implementation.

use crate::color::Rgba8;
use crate::rendering_buffer::{PixelBuffer, BPP};

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that can write colors into a rendering buffer.
///
/// Coordinates passed to the trait methods must already be inside the
/// buffer; clipping is the job of `RendererBase`.
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy (overwrite) a single pixel at (x, y) with color `c`.
    fn copy_pixel(&mut self, x: i32, y: i32, c: &Self::ColorType);

    /// Copy (overwrite) a horizontal line of `len` pixels with color `c`.
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);
}

// ============================================================================
// PixfmtRgba32 (RGBA, 8 bits per channel)
// ============================================================================

/// Pixel format for RGBA32 (4 bytes per pixel).
/// Component order: R=0, G=1, B=2, A=3 (standard RGBA).
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut PixelBuffer,
}

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: &'a mut PixelBuffer) -> Self {
        Self { rbuf }
    }
}

impl<'a> PixelFormat for PixfmtRgba32<'a> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn copy_pixel(&mut self, x: i32, y: i32, c: &Rgba8) {
        let row = self.rbuf.row_slice_mut(y as u32);
        let off = x as usize * BPP;
        row[off..off + BPP].copy_from_slice(&c.to_array());
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let px = c.to_array();
        let row = self.rbuf.row_slice_mut(y as u32);
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        for chunk in row[start..end].chunks_exact_mut(BPP) {
            chunk.copy_from_slice(&px);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
