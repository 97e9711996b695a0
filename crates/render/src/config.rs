//! Configuration for SVG rendering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use u_stacking_core::{Error, Result};

/// Configuration parameters for the SVG renderers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Floor-plan scale: SVG pixels per world unit.
    pub scale: f64,

    /// Margin around the footprint in world units (floor plan only).
    pub margin: f64,

    /// Whether to number the boxes in floor plans.
    pub show_labels: bool,

    /// Isometric canvas width in pixels.
    pub canvas_width: f64,

    /// Isometric canvas height in pixels.
    pub canvas_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 0.4,
            margin: 20.0,
            show_labels: true,
            canvas_width: 800.0,
            canvas_height: 600.0,
        }
    }
}

impl RenderConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the floor-plan scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the floor-plan margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Enables or disables box numbering.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Sets the isometric canvas size.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::ConfigError(format!(
                "Render scale must be positive, got {}",
                self.scale
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::ConfigError(format!(
                "Render margin must be non-negative, got {}",
                self.margin
            )));
        }
        if !self.canvas_width.is_finite()
            || self.canvas_width <= 0.0
            || !self.canvas_height.is_finite()
            || self.canvas_height <= 0.0
        {
            return Err(Error::ConfigError(format!(
                "Canvas size must be positive, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        Ok(())
    }
}
