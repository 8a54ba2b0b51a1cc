//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle covering the whole canvas.
//! Shape routines may run past the canvas edge (a circle in an even-sized
//! cell reaches one pixel beyond it, tall grids overflow the bottom margin);
//! those pixels are dropped here before they reach the pixel format.

use crate::basics::RectI;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase
// ============================================================================

/// Base renderer that clips all operations to the canvas before delegating
/// to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Create a new renderer wrapping the given pixel format.
    /// The clip box is the full buffer extent.
    pub fn new(ren: PF) -> Self {
        let w = i32::try_from(ren.width()).unwrap_or(i32::MAX);
        let h = i32::try_from(ren.height()).unwrap_or(i32::MAX);
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    /// Copy a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn copy_hline(&mut self, x1: i32, y: i32, x2: i32, c: &PF::ColorType) {
        self.copy_bar(x1, y, x2, y, c);
    }

    /// Copy a vertical line (clipped). y1, y2 are inclusive endpoints.
    pub fn copy_vline(&mut self, x: i32, y1: i32, y2: i32, c: &PF::ColorType) {
        let mut rc = RectI::new(x, y1, x, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            for y in rc.y1..=rc.y2 {
                self.ren.copy_pixel(x, y, c);
            }
        }
    }

    /// Fill a rectangle (clipped). Corners are inclusive.
    pub fn copy_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: &PF::ColorType) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            let len = (rc.x2 - rc.x1 + 1) as u32;
            for y in rc.y1..=rc.y2 {
                self.ren.copy_hline(rc.x1, y, len, c);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::PixelBuffer;

    const BLACK: Rgba8 = Rgba8::new_opaque(0, 0, 0);
    const RED: Rgba8 = Rgba8::new_opaque(255, 0, 0);

    fn draw(w: u32, h: u32, f: impl FnOnce(&mut RendererBase<PixfmtRgba32>)) -> PixelBuffer {
        let mut buf = PixelBuffer::new(w, h, BLACK);
        {
            let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
            f(&mut ren);
        }
        buf
    }

    fn count(buf: &PixelBuffer, c: Rgba8) -> usize {
        buf.pixels().filter(|&p| p == c).count()
    }

    #[test]
    fn test_copy_hline_clipped() {
        // Line extends beyond both edges
        let buf = draw(20, 10, |ren| ren.copy_hline(-5, 5, 25, &RED));
        assert_eq!(buf.pixel(0, 5), Some(RED));
        assert_eq!(buf.pixel(19, 5), Some(RED));
        assert_eq!(buf.pixel(10, 4), Some(BLACK));
        assert_eq!(count(&buf, RED), 20);
    }

    #[test]
    fn test_copy_hline_reversed_endpoints() {
        let buf = draw(20, 10, |ren| ren.copy_hline(8, 2, 4, &RED));
        assert_eq!(buf.pixel(4, 2), Some(RED));
        assert_eq!(buf.pixel(8, 2), Some(RED));
        assert_eq!(buf.pixel(9, 2), Some(BLACK));
        assert_eq!(count(&buf, RED), 5);
    }

    #[test]
    fn test_copy_hline_outside_rows_ignored() {
        let buf = draw(10, 10, |ren| {
            ren.copy_hline(0, -1, 9, &RED);
            ren.copy_hline(0, 10, 9, &RED);
            ren.copy_hline(10, 3, 20, &RED);
        });
        assert_eq!(count(&buf, RED), 0);
    }

    #[test]
    fn test_copy_vline_clipped() {
        let buf = draw(10, 10, |ren| ren.copy_vline(3, -4, 30, &RED));
        assert_eq!(buf.pixel(3, 0), Some(RED));
        assert_eq!(buf.pixel(3, 9), Some(RED));
        assert_eq!(buf.pixel(4, 5), Some(BLACK));
        assert_eq!(count(&buf, RED), 10);
    }

    #[test]
    fn test_copy_vline_outside_columns_ignored() {
        let buf = draw(10, 10, |ren| {
            ren.copy_vline(-1, 0, 9, &RED);
            ren.copy_vline(10, 0, 9, &RED);
        });
        assert_eq!(count(&buf, RED), 0);
    }

    #[test]
    fn test_copy_bar_clipped() {
        let buf = draw(10, 10, |ren| ren.copy_bar(7, 7, 12, 12, &RED));
        assert_eq!(buf.pixel(7, 7), Some(RED));
        assert_eq!(buf.pixel(9, 9), Some(RED));
        assert_eq!(buf.pixel(6, 7), Some(BLACK));
        assert_eq!(count(&buf, RED), 9);
    }

    /// Records writes without storing pixels, so it can report any extent.
    struct Recorder {
        width: u32,
        height: u32,
        spans: Vec<(i32, i32, u32)>,
    }

    impl PixelFormat for Recorder {
        type ColorType = Rgba8;

        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn copy_pixel(&mut self, x: i32, y: i32, _c: &Rgba8) {
            self.spans.push((x, y, 1));
        }
        fn copy_hline(&mut self, x: i32, y: i32, len: u32, _c: &Rgba8) {
            self.spans.push((x, y, len));
        }
    }

    #[test]
    fn test_clip_box_saturates_for_huge_extent() {
        let mut ren = RendererBase::new(Recorder {
            width: u32::MAX,
            height: u32::MAX,
            spans: Vec::new(),
        });
        ren.copy_hline(-3, 0, 2, &RED);
        ren.copy_vline(7, -1, 1, &RED);
        ren.copy_bar(-1, -1, -1, -1, &RED);
        assert_eq!(ren.ren.spans, vec![(0, 0, 3), (7, 0, 1), (7, 1, 1)]);
    }

    #[test]
    fn test_copy_bar_reversed_corners() {
        let buf = draw(10, 10, |ren| ren.copy_bar(4, 4, 2, 2, &RED));
        assert_eq!(count(&buf, RED), 9);
        assert_eq!(buf.pixel(2, 2), Some(RED));
    }
}
