//! Launcher icon rendering: a microphone capsule on a stand, flanked by
//! sound-wave arcs, drawn from geometry derived from one edge length.
//!
//! Components:
//! - `layout`: `IconSpec`, the geometry for an edge length
//! - `raster`: pixel primitives (rounded box, thick arc, thick line)
//! - `sink`: where rendered icons go (`IconSink`, `MipmapSink`)
//! - `batch`: renders a density table into a sink

pub mod batch;
pub mod layout;
pub mod raster;
pub mod sink;

use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use crate::config::Palette;
use layout::IconSpec;
use raster::Canvas;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("edge length {edge}px is below the minimum of {min}px")]
    TooSmall { edge: u32, min: u32 },
    #[error("edge length {edge}px is above the maximum of {max}px")]
    TooLarge { edge: u32, max: u32 },
    #[error("invalid density table: {0}")]
    InvalidDensity(String),
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render the icon at `edge` pixels with the default palette.
pub fn render(edge: u32) -> Result<RgbaImage, IconError> {
    render_with(edge, &Palette::default())
}

pub fn render_with(edge: u32, palette: &Palette) -> Result<RgbaImage, IconError> {
    let spec = IconSpec::new(edge)?;

    let [r, g, b] = palette.background;
    let background = Rgba([r, g, b, 255]);
    let [r, g, b] = palette.foreground;
    let solid = Rgba([r, g, b, 255]);
    let faded = Rgba([r, g, b, palette.wave_alpha]);

    let mut canvas = Canvas::new(edge, background);

    canvas.fill_rounded_rect(spec.capsule, spec.capsule_radius, solid);
    canvas.stroke_arc(&spec.cradle, spec.stroke, solid);
    canvas.stroke_line(&spec.stand, spec.stroke, solid);
    canvas.stroke_line(&spec.base, spec.stroke, solid);

    for wave in &spec.inner_waves {
        canvas.stroke_arc(wave, spec.stroke, solid);
    }
    for wave in &spec.outer_waves {
        canvas.stroke_arc(wave, spec.outer_stroke, faded);
    }

    Ok(canvas.into_image())
}
