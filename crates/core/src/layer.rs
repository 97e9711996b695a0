//! Layer layout evaluation.
//!
//! A layer layout is one uniform grid tiling of a box footprint over the
//! pallet footprint. The evaluator is the arithmetic leaf of the engine: the
//! planner calls it once per candidate orientation and compares the results.

use nalgebra::Vector2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation pattern of a layer layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pattern {
    /// Box length aligned with the pallet length axis.
    #[default]
    Standard,
    /// Box width aligned with the pallet length axis.
    Rotated,
}

impl Pattern {
    /// Returns true for the rotated pattern.
    pub fn is_rotated(&self) -> bool {
        matches!(self, Pattern::Rotated)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Standard => write!(f, "Standard Grid"),
            Pattern::Rotated => write!(f, "Rotated Grid"),
        }
    }
}

/// One box's computed position within a layer.
///
/// Coordinates are in footprint space: the origin is the pallet corner, x
/// along the pallet length, y along the pallet width. `length` and `width`
/// are the box extents in this orientation; `rotated` is the layer pattern
/// flag, shared by every placement in one layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Position of the box corner nearest the footprint origin.
    pub position: Vector2<f64>,

    /// Box extent along the pallet length axis.
    pub length: f64,

    /// Box extent along the pallet width axis.
    pub width: f64,

    /// Whether this layout is the rotated pattern.
    pub rotated: bool,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(x: f64, y: f64, length: f64, width: f64, rotated: bool) -> Self {
        Self {
            position: Vector2::new(x, y),
            length,
            width,
            rotated,
        }
    }

    /// Returns the center point of the box footprint.
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(
            self.position.x + self.length / 2.0,
            self.position.y + self.width / 2.0,
        )
    }

    /// Returns the maximum x extent (far edge along the pallet length).
    pub fn max_x(&self) -> f64 {
        self.position.x + self.length
    }

    /// Returns the maximum y extent (far edge along the pallet width).
    pub fn max_y(&self) -> f64 {
        self.position.y + self.width
    }
}

/// Result of evaluating one grid tiling over the pallet footprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayerLayout {
    /// Orientation pattern of this layout.
    pub pattern: Pattern,

    /// Number of boxes in the layer (rows x cols).
    pub total_boxes: usize,

    /// Placements in row-major order (rows outer, columns inner).
    pub placements: Vec<Placement>,

    /// Total extent covered along the pallet length.
    pub used_length: f64,

    /// Total extent covered along the pallet width.
    pub used_width: f64,

    /// Covered area over footprint area, in [0, 1].
    pub efficiency: f64,
}

impl LayerLayout {
    /// Returns true when the layout places no boxes.
    pub fn is_empty(&self) -> bool {
        self.total_boxes == 0
    }

    /// Returns efficiency as a percentage string.
    pub fn efficiency_percent(&self) -> String {
        format!("{:.1}%", self.efficiency * 100.0)
    }
}

/// Evaluates one uniform grid tiling of the given box footprint.
///
/// `box_length`/`box_width` are the box extents in the orientation under
/// evaluation (already swapped by the caller for the rotated pattern);
/// `footprint_length`/`footprint_width` are the pallet extents. All four are
/// assumed validated: finite and strictly positive.
///
/// The grid is the floor division of footprint by box in each axis, so a
/// partial box never overhangs the footprint edge. The whole grid is centered
/// on the footprint and placements are emitted row-major, which keeps the
/// output reproducible for identical inputs.
pub fn evaluate_layer(
    box_length: f64,
    box_width: f64,
    footprint_length: f64,
    footprint_width: f64,
    rotated: bool,
) -> LayerLayout {
    let cols = (footprint_length / box_length).floor() as usize;
    let rows = (footprint_width / box_width).floor() as usize;
    let total_boxes = cols * rows;

    let used_length = cols as f64 * box_length;
    let used_width = rows as f64 * box_width;

    // Centering offsets; may be fractional, never rounded
    let start_x = (footprint_length - used_length) / 2.0;
    let start_y = (footprint_width - used_width) / 2.0;

    let mut placements = Vec::with_capacity(total_boxes);
    for row in 0..rows {
        for col in 0..cols {
            placements.push(Placement::new(
                start_x + col as f64 * box_length,
                start_y + row as f64 * box_width,
                box_length,
                box_width,
                rotated,
            ));
        }
    }

    LayerLayout {
        pattern: if rotated {
            Pattern::Rotated
        } else {
            Pattern::Standard
        },
        total_boxes,
        placements,
        used_length,
        used_width,
        efficiency: (used_length * used_width) / (footprint_length * footprint_width),
    }
}
