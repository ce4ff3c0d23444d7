//! Pixel-space shape descriptors for the icon renderer.
//!
//! Shapes are plain values computed fresh per render call: a design-space
//! constant (in the 1024-pixel reference frame) is multiplied by a [`Scale`]
//! and rounded to the nearest integer pixel, producing a [`RoundedRect`] or
//! [`Disc`] that the canvas can fill.

/// The reference design size, in pixels. All design-space constants are
/// expressed relative to a 1024x1024 canvas.
pub const REFERENCE_SIZE: f32 = 1024.0;

// ============================================================================
// Scale
// ============================================================================

/// The ratio of a target canvas size to the 1024-pixel reference design.
///
/// Applied uniformly to every coordinate and radius so the glyph is
/// visually self-similar at every resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates the scale factor for a target canvas of `size` pixels.
    pub fn for_size(size: u32) -> Self {
        Self(size as f32 / REFERENCE_SIZE)
    }

    /// Converts a design-space length to target pixels, rounding to the
    /// nearest integer.
    pub fn px(&self, design_units: f32) -> i32 {
        (design_units * self.0).round() as i32
    }
}

// ============================================================================
// RoundedRect
// ============================================================================

/// A filled rectangle with rounded corners, in target pixel coordinates.
///
/// Bounds are half-open: the rectangle covers pixels `x0..x1` by `y0..y1`.
/// The corner radius is clamped to half the shorter side, so a degenerate
/// radius can never produce invalid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub radius: i32,
}

impl RoundedRect {
    /// Creates a rounded rectangle from its corner bounds and radius.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> Self {
        Self { x0, y0, x1, y1, radius }
    }

    /// Creates a rounded rectangle from an origin plus width and height.
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32, radius: i32) -> Self {
        Self::new(x, y, x + width, y + height, radius)
    }

    /// Returns this rectangle shrunk by `margin` pixels on every side,
    /// with the given corner radius.
    pub fn inset(&self, margin: i32, radius: i32) -> Self {
        Self::new(
            self.x0 + margin,
            self.y0 + margin,
            self.x1 - margin,
            self.y1 - margin,
            radius,
        )
    }

    /// Width in pixels.
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Height in pixels.
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// The effective corner radius after clamping to half the shorter side.
    fn effective_radius(&self) -> i32 {
        self.radius.min(self.width() / 2).min(self.height() / 2).max(0)
    }

    /// Returns true if the pixel at (x, y) is covered by this shape.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        if x < self.x0 || x >= self.x1 || y < self.y0 || y >= self.y1 {
            return false;
        }

        let r = self.effective_radius();
        if r == 0 {
            return true;
        }

        // Corner circle centers in pixel-index space. A pixel outside the
        // straight edge bands is inside iff it falls within the corner disc.
        let cx0 = self.x0 + r;
        let cx1 = self.x1 - 1 - r;
        let cy0 = self.y0 + r;
        let cy1 = self.y1 - 1 - r;

        let dx = if x < cx0 {
            cx0 - x
        } else if x > cx1 {
            x - cx1
        } else {
            0
        };
        let dy = if y < cy0 {
            cy0 - y
        } else if y > cy1 {
            y - cy1
        } else {
            0
        };

        dx * dx + dy * dy <= r * r
    }
}

// ============================================================================
// Disc
// ============================================================================

/// A filled circle, in target pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl Disc {
    /// Creates a disc from its center and radius.
    pub fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// Returns true if the pixel at (x, y) is covered by this shape.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
