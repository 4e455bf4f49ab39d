//! Glyph geometry derived from a single edge length.
//!
//! All quantities use integer floor division, so sub-pixel remainders are
//! dropped rather than rounded.

use super::IconError;

/// Smallest edge length accepted by the renderer. Below 20 px the `/20`
/// offset collapses to zero and shapes start to degenerate.
pub const MIN_EDGE_LENGTH: u32 = 20;

/// Largest edge length accepted; keeps the canvas allocation bounded and
/// every coordinate well inside `i32`.
pub const MAX_EDGE_LENGTH: u32 = 4096;

/// Axis-aligned box with inclusive pixel corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

/// Elliptical arc inside `bounds`, swept clockwise from `start` to `end`
/// degrees with 0 at three o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub bounds: Rect,
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: (i32, i32),
    pub to: (i32, i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub edge: u32,
    pub center: i32,
    pub stroke: u32,
    pub outer_stroke: u32,
    pub capsule: Rect,
    pub capsule_radius: i32,
    pub cradle: Arc,
    pub stand: Segment,
    pub base: Segment,
    pub inner_waves: [Arc; 2],
    pub outer_waves: [Arc; 2],
}

/// Primary stroke width for an edge length.
pub fn stroke_width(edge: u32) -> u32 {
    (edge / 25).max(2)
}

impl IconSpec {
    pub fn new(edge: u32) -> Result<Self, IconError> {
        if edge < MIN_EDGE_LENGTH {
            return Err(IconError::TooSmall {
                edge,
                min: MIN_EDGE_LENGTH,
            });
        }
        if edge > MAX_EDGE_LENGTH {
            return Err(IconError::TooLarge {
                edge,
                max: MAX_EDGE_LENGTH,
            });
        }

        let size = edge as i32;
        let center = size / 2;
        let body_width = size / 5;
        let body_height = size / 4;
        let stroke = stroke_width(edge);

        // Capsule
        let cap_x = center - body_width / 2;
        let cap_y = size / 3 - body_height / 2;
        let capsule = Rect::new(cap_x, cap_y, cap_x + body_width, cap_y + body_height);

        // Cradle arc under the capsule
        let arc_y = capsule.y1 + size / 20;
        let arc_size = size / 6;
        let cradle = Arc {
            bounds: Rect::new(center - arc_size, arc_y, center + arc_size, arc_y + arc_size),
            start: 0.0,
            end: 180.0,
        };

        // Stand and base
        let stand_top = arc_y + arc_size / 2;
        let stand_bottom = stand_top + size / 7;
        let base_half = size / 10;

        // Sound waves
        let offset = size / 4;
        let wave_top = cap_y + body_height / 4;
        let wave_bottom = cap_y + body_height * 3 / 4;
        let inner = size / 8;
        let outer = size / 5;
        let lift = size / 15;

        let left = |bounds| Arc {
            bounds,
            start: 270.0,
            end: 90.0,
        };
        let right = |bounds| Arc {
            bounds,
            start: 90.0,
            end: 270.0,
        };

        Ok(Self {
            edge,
            center,
            stroke,
            outer_stroke: (stroke - 1).max(1),
            capsule,
            capsule_radius: body_width / 2,
            cradle,
            stand: Segment {
                from: (center, stand_top),
                to: (center, stand_bottom),
            },
            base: Segment {
                from: (center - base_half, stand_bottom),
                to: (center + base_half, stand_bottom),
            },
            inner_waves: [
                left(Rect::new(center - offset - inner, wave_top, center - offset, wave_bottom)),
                right(Rect::new(center + offset, wave_top, center + offset + inner, wave_bottom)),
            ],
            outer_waves: [
                left(Rect::new(
                    center - offset - outer,
                    wave_top - lift,
                    center - offset - lift,
                    wave_bottom + lift,
                )),
                right(Rect::new(
                    center + offset + lift,
                    wave_top - lift,
                    center + offset + outer,
                    wave_bottom + lift,
                )),
            ],
        })
    }
}
