//! The raster canvas and its fill primitives.
//!
//! A [`Canvas`] is a square RGBA surface, fully transparent on creation,
//! that shapes are painted onto in back-to-front order. Fills are
//! hard-edged (a pixel is either covered or not) and composite with
//! source-over blending, so partially transparent fills tint whatever was
//! painted underneath.

use image::{Pixel, Rgba, RgbaImage};

use crate::geometry::{Disc, RoundedRect};

/// A square RGBA raster surface.
///
/// Created per render call, mutated only by the fill methods, and
/// discarded after [`into_image`](Canvas::into_image).
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent canvas of `size` x `size` pixels.
    pub fn new(size: u32) -> Self {
        Self {
            data: RgbaImage::new(size, size),
        }
    }

    /// The side length of the canvas in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Fills a rounded rectangle, source-over blending `color` onto the
    /// covered pixels. Geometry outside the canvas is clipped.
    pub fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Rgba<u8>) {
        let w = self.data.width() as i32;
        let h = self.data.height() as i32;
        for y in rect.y0.max(0)..rect.y1.min(h) {
            for x in rect.x0.max(0)..rect.x1.min(w) {
                if rect.contains(x, y) {
                    self.data.get_pixel_mut(x as u32, y as u32).blend(&color);
                }
            }
        }
    }

    /// Fills a disc, source-over blending `color` onto the covered pixels.
    /// Geometry outside the canvas is clipped.
    pub fn fill_disc(&mut self, disc: &Disc, color: Rgba<u8>) {
        let w = self.data.width() as i32;
        let h = self.data.height() as i32;
        let x0 = (disc.cx - disc.radius).max(0);
        let x1 = (disc.cx + disc.radius + 1).min(w);
        let y0 = (disc.cy - disc.radius).max(0);
        let y1 = (disc.cy + disc.radius + 1).min(h);
        for y in y0..y1 {
            for x in x0..x1 {
                if disc.contains(x, y) {
                    self.data.get_pixel_mut(x as u32, y as u32).blend(&color);
                }
            }
        }
    }

    /// Reads back a pixel. Panics if out of bounds, like the underlying
    /// image buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.data.get_pixel(x, y)
    }

    /// Consumes the canvas and returns the finished image.
    pub fn into_image(self) -> RgbaImage {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn new_canvas_is_fully_transparent() {
        let canvas = Canvas::new(16);
        assert_eq!(canvas.size(), 16);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.pixel(x, y)[3], 0);
            }
        }
    }

    #[test]
    fn fill_rounded_rect_covers_interior_not_corners() {
        let mut canvas = Canvas::new(32);
        canvas.fill_rounded_rect(&RoundedRect::new(0, 0, 32, 32, 8), RED);
        assert_eq!(canvas.pixel(16, 16), RED);
        assert_eq!(canvas.pixel(16, 0), RED); // top edge midpoint
        assert_eq!(canvas.pixel(0, 0)[3], 0); // clipped corner
        assert_eq!(canvas.pixel(31, 31)[3], 0);
    }

    #[test]
    fn fill_disc_covers_center_not_bounding_box_corner() {
        let mut canvas = Canvas::new(32);
        canvas.fill_disc(&Disc::new(16, 16, 8), RED);
        assert_eq!(canvas.pixel(16, 16), RED);
        assert_eq!(canvas.pixel(24, 16), RED); // rim
        assert_eq!(canvas.pixel(23, 23)[3], 0);
    }

    #[test]
    fn fills_clip_to_canvas_bounds() {
        let mut canvas = Canvas::new(8);
        canvas.fill_rounded_rect(&RoundedRect::new(-10, -10, 100, 100, 0), RED);
        canvas.fill_disc(&Disc::new(0, 0, 50), RED);
        assert_eq!(canvas.pixel(0, 0), RED);
        assert_eq!(canvas.pixel(7, 7), RED);
    }

    #[test]
    fn translucent_fill_blends_over_opaque_base() {
        let mut canvas = Canvas::new(4);
        canvas.fill_rounded_rect(&RoundedRect::new(0, 0, 4, 4, 0), Rgba([0, 0, 255, 255]));
        canvas.fill_rounded_rect(&RoundedRect::new(0, 0, 4, 4, 0), Rgba([255, 255, 255, 128]));

        let px = canvas.pixel(2, 2);
        // Source-over on an opaque base stays opaque up to the blend's
        // integer rounding, and lands between the two source colors.
        assert!(px[3] >= 254, "alpha {}", px[3]);
        assert!(px[0] > 100 && px[0] < 160, "red channel {}", px[0]);
        assert!(px[2] > 100, "blue channel {}", px[2]);
    }

    #[test]
    fn translucent_fill_on_transparent_base_keeps_partial_alpha() {
        let mut canvas = Canvas::new(4);
        canvas.fill_disc(&Disc::new(2, 2, 2), Rgba([96, 165, 250, 200]));
        let px = canvas.pixel(2, 2);
        assert!(px[3] > 0 && px[3] < 255, "alpha {}", px[3]);
    }
}
