//! Pixel-level drawing primitives.
//!
//! Shapes are decided per pixel by testing its integer coordinate against
//! the shape, and covered pixels are overwritten (no blending), so a
//! translucent color lands in the image with its own alpha.

use image::{Rgba, RgbaImage};

use super::layout::{Arc, Rect, Segment};

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(edge: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(edge, edge, background),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fill the inclusive box `rect` with corners rounded to `radius`.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Rgba<u8>) {
        let r = radius.min(rect.width() / 2).min(rect.height() / 2).max(0);
        let r2 = r * r;

        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                // Nearest point of the inner (radius-shrunk) box
                let nx = x.max(rect.x0 + r).min(rect.x1 - r);
                let ny = y.max(rect.y0 + r).min(rect.y1 - r);
                let (dx, dy) = (x - nx, y - ny);
                if dx * dx + dy * dy <= r2 {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroke an elliptical arc `width` pixels thick, inset from its bounds.
    pub fn stroke_arc(&mut self, arc: &Arc, width: u32, color: Rgba<u8>) {
        let b = arc.bounds;
        let rx = b.width() as f32 / 2.0;
        let ry = b.height() as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let cx = b.x0 as f32 + rx;
        let cy = b.y0 as f32 + ry;
        let w = width as f32;
        let (ix, iy) = (rx - w, ry - w);
        let hollow = ix > 0.0 && iy > 0.0;

        for y in b.y0..=b.y1 {
            for x in b.x0..=b.x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if (dx / rx).powi(2) + (dy / ry).powi(2) > 1.0 {
                    continue;
                }
                if hollow && (dx / ix).powi(2) + (dy / iy).powi(2) <= 1.0 {
                    continue;
                }
                if in_sweep(dy.atan2(dx).to_degrees(), arc.start, arc.end) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Stroke a straight segment `width` pixels thick, without end caps.
    pub fn stroke_line(&mut self, segment: &Segment, width: u32, color: Rgba<u8>) {
        let (x0, y0) = segment.from;
        let (x1, y1) = segment.to;
        let half = width as f32 / 2.0;
        let pad = width as i32;

        let (dx, dy) = ((x1 - x0) as f32, (y1 - y0) as f32);
        let len = dx.hypot(dy);
        let (ux, uy) = if len > 0.0 { (dx / len, dy / len) } else { (1.0, 0.0) };

        for y in y0.min(y1) - pad..=y0.max(y1) + pad {
            for x in x0.min(x1) - pad..=x0.max(x1) + pad {
                let (px, py) = ((x - x0) as f32, (y - y0) as f32);
                let along = px * ux + py * uy;
                let across = py * ux - px * uy;
                let on_segment = if len > 0.0 {
                    (0.0..=len).contains(&along)
                } else {
                    (-half..half).contains(&along)
                };
                if on_segment && (-half..half).contains(&across) {
                    self.put(x, y, color);
                }
            }
        }
    }
}

/// Whether `angle` (degrees, clockwise from three o'clock) lies in the
/// clockwise sweep from `start` to `end`.
fn in_sweep(angle: f32, start: f32, end: f32) -> bool {
    let span = (end - start).rem_euclid(360.0);
    if span == 0.0 {
        return true;
    }
    (angle - start).rem_euclid(360.0) <= span
}
