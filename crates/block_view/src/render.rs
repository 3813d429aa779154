//! Render surface abstraction.
//!
//! The platform view layer implements [`RenderSurface`]; the engine only
//! describes what to draw and never touches platform resources itself.

use anyhow::Error;

use crate::path::OutlinePath;

/// How a path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
}

/// Paint parameters for a single draw call. Joins are rounded so connector
/// corners render softly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// ARGB color.
    pub color: u32,
    pub style: PaintStyle,
}

impl Paint {
    pub fn fill(color: u32) -> Self {
        Self { color, style: PaintStyle::Fill }
    }

    pub fn stroke(color: u32, width: f32) -> Self {
        Self { color, style: PaintStyle::Stroke { width } }
    }
}

/// A drawing target supplied by the hosting view layer.
pub trait RenderSurface {
    /// Draw `path` with `paint`. Platform failures propagate to the caller.
    fn draw_path(&mut self, path: &OutlinePath, paint: &Paint) -> Result<(), Error>;
}
