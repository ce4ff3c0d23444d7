//! The camera glyph renderer.
//!
//! Draws a fixed, hard-coded camera icon: a dark blue panel behind a white
//! camera body, a two-ring lens with a translucent highlight, a flash unit
//! with a light burst, a top knob, and a shutter button. Every coordinate
//! is a constant in the 1024-pixel reference design, scaled uniformly to
//! the target size, so the glyph is self-similar at every resolution.

use image::{Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::geometry::{Disc, RoundedRect, Scale};

/// Panel and lens inner fill.
const PANEL_BLUE: Rgba<u8> = Rgba([30, 64, 175, 255]);
/// Camera body, flash housing, and knob fill.
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Lens outer ring and shutter button fill.
const DARK_GRAY: Rgba<u8> = Rgba([55, 65, 81, 255]);
/// Lens highlight fill, partially transparent.
const HIGHLIGHT_BLUE: Rgba<u8> = Rgba([96, 165, 250, 200]);
/// Light burst bar fill, partially transparent.
const BURST_WHITE: Rgba<u8> = Rgba([255, 255, 255, 230]);

/// Renders the camera glyph at `size` x `size` pixels.
///
/// The returned image is RGBA with a fully transparent background.
/// Shapes are painted strictly back to front, so later shapes occlude
/// earlier ones where they overlap.
pub fn render(size: u32) -> RgbaImage {
    let scale = Scale::for_size(size);
    let mut canvas = Canvas::new(size);
    let center = (size / 2) as i32;

    // Background panel, centered horizontally in the lower part of the
    // canvas.
    let panel_w = scale.px(624.0);
    let panel = RoundedRect::from_origin_size(
        (size as i32 - panel_w) / 2,
        scale.px(300.0),
        panel_w,
        scale.px(424.0),
        scale.px(40.0),
    );
    canvas.fill_rounded_rect(&panel, PANEL_BLUE);

    // Camera body, inset from the panel by a fixed margin.
    let body = panel.inset(scale.px(20.0), scale.px(20.0));
    canvas.fill_rounded_rect(&body, WHITE);

    // Lens: outer ring, then the inner disc in the panel color, producing
    // a ring appearance.
    canvas.fill_disc(&Disc::new(center, center, scale.px(120.0)), DARK_GRAY);
    canvas.fill_disc(&Disc::new(center, center, scale.px(80.0)), PANEL_BLUE);

    // Lens highlight, offset up and left from center.
    let highlight = Disc::new(
        center - scale.px(32.0),
        center - scale.px(32.0),
        scale.px(20.0),
    );
    canvas.fill_disc(&highlight, HIGHLIGHT_BLUE);

    // Flash housing, left of the lens on the top deck.
    let flash = RoundedRect::from_origin_size(
        center - scale.px(162.0),
        scale.px(200.0),
        scale.px(80.0),
        scale.px(60.0),
        scale.px(10.0),
    );
    canvas.fill_rounded_rect(&flash, WHITE);

    // Light burst: one vertical and one horizontal bar crossing the flash
    // housing's center and extending past its bounds.
    let flash_cx = (flash.x0 + flash.x1) / 2;
    let flash_cy = (flash.y0 + flash.y1) / 2;
    let reach = scale.px(50.0);
    let half_width = scale.px(10.0);
    let burst_radius = scale.px(5.0);

    let vertical = RoundedRect::new(
        flash_cx - half_width,
        flash.y0 - reach,
        flash_cx + half_width,
        flash.y1 + reach,
        burst_radius,
    );
    canvas.fill_rounded_rect(&vertical, BURST_WHITE);

    let reach = scale.px(30.0);
    let horizontal = RoundedRect::new(
        flash.x0 - reach,
        flash_cy - half_width,
        flash.x1 + reach,
        flash_cy + half_width,
        burst_radius,
    );
    canvas.fill_rounded_rect(&horizontal, BURST_WHITE);

    // Top knob at the far left of the deck.
    let knob = RoundedRect::from_origin_size(
        center - scale.px(212.0),
        scale.px(200.0),
        scale.px(40.0),
        scale.px(60.0),
        scale.px(20.0),
    );
    canvas.fill_rounded_rect(&knob, WHITE);

    // Shutter button right of the lens.
    let shutter = Disc::new(center + scale.px(88.0), scale.px(200.0), scale.px(15.0));
    canvas.fill_disc(&shutter, DARK_GRAY);

    canvas.into_image()
}
