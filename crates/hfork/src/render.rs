//! Image rendering helpers used by the CLI.
//!
//! Curves live in the unit square with the y axis pointing up; images have
//! their origin top‑left. [`render_path_image`] maps one onto the other and
//! draws the path as a connected polyline.

use hilbertfork::Point;
use image::{Rgba, RgbaImage};

/// Colors used when rendering a curve.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Color for the curve strokes.
    pub foreground: Rgba<u8>,
    /// Background fill color.
    pub background: Rgba<u8>,
}

/// Stroke styling and placement options.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Blank border around the unit square, in pixels.
    pub margin: u32,
    /// Colors for foreground/background.
    pub palette: Palette,
}

/// Map a unit-square point to integer pixel coordinates.
fn to_pixel(p: Point, size: u32, margin: u32) -> (i64, i64) {
    let inner = f64::from(size.saturating_sub(margin.saturating_mul(2)).saturating_sub(1));
    let x = f64::from(margin) + p.x * inner;
    let y = f64::from(margin) + (1.0 - p.y) * inner;
    (x.round() as i64, y.round() as i64)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    if (0..w).contains(&x) && (0..h).contains(&y) {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, (cx, cy): (i64, i64), size: u32, col: Rgba<u8>) {
    let lo = (i64::from(size) - 1) / 2;
    let hi = i64::from(size) / 2;
    for y in cy - lo..=cy + hi {
        for x in cx - lo..=cx + hi {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a Bresenham line between two pixels, stamping `width`-sized squares.
fn draw_line(
    img: &mut RgbaImage,
    (mut x0, mut y0): (i64, i64),
    (x1, y1): (i64, i64),
    col: Rgba<u8>,
    width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, (x0, y0), width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw `path` as a connected polyline onto an existing image.
pub fn draw_path(img: &mut RgbaImage, path: &[Point], stroke: StrokeOptions) {
    let size = img.width().min(img.height());
    let width = stroke.line_width.max(1);
    let pixels: Vec<(i64, i64)> = path
        .iter()
        .map(|&p| to_pixel(p, size, stroke.margin))
        .collect();

    match pixels.as_slice() {
        [] => {}
        [only] => stamp_square(img, *only, width, stroke.palette.foreground),
        _ => {
            for w in pixels.windows(2) {
                draw_line(img, w[0], w[1], stroke.palette.foreground, width);
            }
        }
    }
}

/// Render a square `size×size` image of `path` on the background color.
pub fn render_path_image(size: u32, path: &[Point], stroke: StrokeOptions) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, stroke.palette.background);
    draw_path(&mut img, path, stroke);
    img
}
