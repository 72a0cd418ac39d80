//! Raster drawing primitives over an RGBA buffer.
//!
//! Bounding boxes are inclusive pixel coordinates, so `Rect::new(0, 0, 511, 511)`
//! covers a whole 512x512 canvas. Shapes are rasterized by sampling pixel centres.
//! Shape fills replace the destination pixel outright, alpha included; layers,
//! pasted images and text are composited source-over.

use anyhow::{Context, Result};
use image::{imageops, ImageFormat, Pixel, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

/// Tolerance for points lying exactly on a polygon edge
const EDGE_EPSILON: f32 = 1e-4;

/// Inclusive pixel bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Rect { x0, y0, x1, y1 }
    }

    /// Square box of the given radius around a centre point
    pub fn around(cx: i32, cy: i32, radius: i32) -> Self {
        Rect::new(cx - radius, cy - radius, cx + radius, cy + radius)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Rect::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    fn inset(&self, by: i32) -> Self {
        Rect::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }
}

pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            img: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Source-over blend of `color` scaled by `coverage` (0-255)
    pub fn blend(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: u8) {
        if x < 0 || y < 0 || x as u32 >= self.img.width() || y as u32 >= self.img.height() {
            return;
        }
        let alpha = (color[3] as u32 * coverage as u32 + 127) / 255;
        if alpha == 0 {
            return;
        }
        let src = Rgba([color[0], color[1], color[2], alpha as u8]);
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        if dst[3] == 0 {
            *dst = src;
        } else {
            dst.blend(&src);
        }
    }

    /// Replace every pixel in the rect whose centre satisfies `inside`
    fn fill_where(&mut self, bounds: Rect, color: Rgba<u8>, inside: impl Fn(f32, f32) -> bool) {
        let x_start = bounds.x0.max(0);
        let y_start = bounds.y0.max(0);
        let x_end = bounds.x1.min(self.img.width() as i32 - 1);
        let y_end = bounds.y1.min(self.img.height() as i32 - 1);

        for y in y_start..=y_end {
            for x in x_start..=x_end {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Paint a full-width row
    pub fn hline(&mut self, y: i32, color: Rgba<u8>) {
        let width = self.img.width() as i32;
        for x in 0..width {
            self.put(x, y, color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        self.fill_where(rect, color, |_, _| true);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        self.fill_where(rect, color, |px, py| in_rounded_rect(px, py, rect, radius as f32));
    }

    /// Rounded rectangle border `width` pixels thick, drawn inside the box
    pub fn outline_rounded_rect(&mut self, rect: Rect, radius: u32, width: u32, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        let inner = rect.inset(width as i32);
        let inner_radius = radius.saturating_sub(width) as f32;
        self.fill_where(rect, color, |px, py| {
            in_rounded_rect(px, py, rect, radius as f32)
                && (inner.is_empty() || !in_rounded_rect(px, py, inner, inner_radius))
        });
    }

    /// Ellipse inscribed in the bounding box
    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        let (left, top, right, bottom) = continuous(rect);
        let cx = (left + right) / 2.0;
        let cy = (top + bottom) / 2.0;
        let rx = (right - left) / 2.0;
        let ry = (bottom - top) / 2.0;
        self.fill_where(rect, color, |px, py| {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
    }

    /// Fill a convex polygon; vertices may wind either way
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgba<u8>) {
        if points.len() < 3 {
            return;
        }
        let bounds = Rect::new(
            points.iter().map(|p| p.0.floor() as i32).min().unwrap_or(0),
            points.iter().map(|p| p.1.floor() as i32).min().unwrap_or(0),
            points.iter().map(|p| p.0.ceil() as i32).max().unwrap_or(0),
            points.iter().map(|p| p.1.ceil() as i32).max().unwrap_or(0),
        );
        self.fill_where(bounds, color, |px, py| in_convex_polygon(px, py, points));
    }

    /// Straight line with square ends, `width` pixels thick.
    /// Odd widths centre on the pixel row, even widths on the boundary between rows.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba<u8>) {
        let offset = if width % 2 == 1 { 0.5 } else { 0.0 };
        let (x0, y0) = (from.0 as f32 + offset, from.1 as f32 + offset);
        let (x1, y1) = (to.0 as f32 + offset, to.1 as f32 + offset);

        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            let half = (width / 2) as i32;
            self.fill_rect(Rect::around(from.0, from.1, half), color);
            return;
        }

        let half = width.max(1) as f32 / 2.0;
        let (nx, ny) = (-dy / length * half, dx / length * half);
        let quad = [
            (x0 + nx, y0 + ny),
            (x1 + nx, y1 + ny),
            (x1 - nx, y1 - ny),
            (x0 - nx, y0 - ny),
        ];
        self.fill_polygon(&quad, color);
    }

    /// Source-over composite of a same-sized layer
    pub fn composite(&mut self, layer: &RgbaImage) {
        imageops::overlay(&mut self.img, layer, 0, 0);
    }

    /// Composite a layer only where the canvas is already painted, keeping the
    /// canvas alpha. Transparent pixels stay transparent.
    pub fn composite_atop(&mut self, layer: &RgbaImage) {
        for (x, y, dst) in self.img.enumerate_pixels_mut() {
            if dst[3] == 0 || x >= layer.width() || y >= layer.height() {
                continue;
            }
            let src = layer.get_pixel(x, y);
            if src[3] == 0 {
                continue;
            }
            let alpha = dst[3];
            dst.blend(src);
            dst[3] = alpha;
        }
    }

    /// Source-over placement of another image with its top-left corner at (x, y)
    pub fn paste(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.img, image, x, y);
    }

    /// Encode as PNG, creating the parent directory and overwriting any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }
        self.img
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

impl From<RgbaImage> for Canvas {
    fn from(img: RgbaImage) -> Self {
        Canvas { img }
    }
}

/// Inclusive pixel box as continuous edges
fn continuous(rect: Rect) -> (f32, f32, f32, f32) {
    (rect.x0 as f32, rect.y0 as f32, rect.x1 as f32 + 1.0, rect.y1 as f32 + 1.0)
}

fn in_rounded_rect(px: f32, py: f32, rect: Rect, radius: f32) -> bool {
    let (left, top, right, bottom) = continuous(rect);
    if px < left || px > right || py < top || py > bottom {
        return false;
    }
    let radius = radius.min((right - left) / 2.0).min((bottom - top) / 2.0);
    // Distance past the straight edges, towards the nearest corner centre
    let dx = (left + radius - px).max(px - (right - radius)).max(0.0);
    let dy = (top + radius - py).max(py - (bottom - radius)).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

fn in_convex_polygon(px: f32, py: f32, points: &[(f32, f32)]) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let cross = (b.0 - a.0) * (py - a.1) - (b.1 - a.1) * (px - a.0);
        if cross > EDGE_EPSILON {
            positive = true;
        } else if cross < -EDGE_EPSILON {
            negative = true;
        }
        if positive && negative {
            return false;
        }
    }
    true
}
