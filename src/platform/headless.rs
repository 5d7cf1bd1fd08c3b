//! Capture-only display surface.
//!
//! Renders into memory instead of a toolkit: fixed cell metrics, every frame
//! kept in arrival order. Used by the integration tests and by hosts that
//! want the input/formatting core without a real window.

use crate::core::geometry::{CellMetrics, PixelPosition};
use crate::runtime::window::{DisplaySurface, SurfaceMetrics, WindowError};

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    metrics: SurfaceMetrics,
    frames: Vec<String>,
}

impl HeadlessSurface {
    /// 8 x 16 pixel cells at origin (0, 0).
    pub fn new() -> Self {
        Self::with_metrics(
            CellMetrics {
                width: 8,
                height: 16,
            },
            PixelPosition::new(0, 0),
        )
    }

    pub fn with_metrics(cell: CellMetrics, origin: PixelPosition) -> Self {
        Self {
            metrics: SurfaceMetrics { cell, origin },
            frames: Vec::new(),
        }
    }

    /// All rendered blocks, oldest first.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for HeadlessSurface {
    fn metrics(&self) -> Result<SurfaceMetrics, WindowError> {
        Ok(self.metrics)
    }

    fn render(&mut self, block: &str) {
        self.frames.push(block.to_string());
    }
}
