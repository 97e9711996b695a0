//! Pallet stack planning.
//!
//! The planner evaluates the two candidate layer orientations, picks a best
//! and an alternate, quantizes the stack height into whole layers and
//! aggregates the totals. The computation is closed-form: two evaluator
//! calls and arithmetic, no search.

use std::fmt;

use crate::layer::{evaluate_layer, LayerLayout, Pattern};
use crate::material::Material;
use crate::pallet::Pallet;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-fatal quality note attached to a plan.
///
/// Advisories never change the selection; they surface properties of the
/// chosen stack a caller may want to warn about.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Advisory {
    /// The alternate orientation fits fewer boxes, so layers cannot
    /// alternate without losing count. The stack uses one pattern throughout
    /// and does not interlock.
    NonInterlockedStack {
        /// Boxes per layer in the chosen pattern.
        best_count: usize,
        /// Boxes per layer in the alternate pattern.
        alt_count: usize,
        /// Orientation of the alternate pattern.
        alt_pattern: Pattern,
    },

    /// Neither orientation fits a single box on the footprint.
    DegenerateLayout,
}

impl Advisory {
    /// Returns a short stable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Advisory::NonInterlockedStack { .. } => "NON_INTERLOCKED",
            Advisory::DegenerateLayout => "DEGENERATE",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonInterlockedStack {
                best_count,
                alt_count,
                alt_pattern,
            } => {
                let layout = if alt_pattern.is_rotated() {
                    "rotated"
                } else {
                    "standard"
                };
                write!(
                    f,
                    "{} layout fits {} boxes vs {}; layers cannot alternate without losing count",
                    layout, alt_count, best_count
                )
            }
            Advisory::DegenerateLayout => {
                write!(f, "box does not fit the pallet footprint in any orientation")
            }
        }
    }
}

/// Complete plan for stacking one material onto a pallet.
///
/// Layers are numbered from 1 at the deck. Odd layers always use
/// `odd_layer`; even layers use `even_layer` when it is present (the
/// interlocked case) and `odd_layer` otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackPlan {
    /// The material this plan was computed for.
    pub material: Material,

    /// The height limit supplied to the planner.
    pub max_stack_height: f64,

    /// Number of layers in the stack.
    pub total_layers: usize,

    /// Total boxes across all layers.
    pub total_boxes: usize,

    /// Height of one layer (the box height).
    pub layer_height: f64,

    /// Height of the full stack (`total_layers * layer_height`).
    pub stack_height: f64,

    /// Layout for odd-numbered layers.
    pub odd_layer: LayerLayout,

    /// Layout for even-numbered layers, present only when alternating keeps
    /// the same box count.
    pub even_layer: Option<LayerLayout>,

    /// Volume of all boxes over the pallet volume under the stack, in [0, 1].
    pub utilization: f64,

    /// Quality notes raised during planning.
    pub advisories: Vec<Advisory>,
}

impl StackPlan {
    /// Returns the number of boxes in one layer.
    pub fn boxes_per_layer(&self) -> usize {
        self.odd_layer.total_boxes
    }

    /// Returns true when even layers use the rotated alternate.
    pub fn is_interlocked(&self) -> bool {
        self.even_layer.is_some()
    }

    /// Returns the layout used by the given 1-based layer number.
    pub fn layout_for_layer(&self, layer: usize) -> &LayerLayout {
        if layer % 2 == 0 {
            self.even_layer.as_ref().unwrap_or(&self.odd_layer)
        } else {
            &self.odd_layer
        }
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Returns true if any advisory carries the given code.
    pub fn has_advisory(&self, code: &str) -> bool {
        self.advisories.iter().any(|a| a.code() == code)
    }
}

/// One-line summary of a plan, for tables and logs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StackSummary {
    /// Material identifier.
    pub material_id: String,
    /// Material display name.
    pub material_name: String,
    /// Boxes in one layer.
    pub boxes_per_layer: usize,
    /// Layers in the stack.
    pub total_layers: usize,
    /// Boxes in the whole stack.
    pub total_boxes: usize,
    /// Stack height in input units.
    pub stack_height: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Whether even layers alternate.
    pub interlocked: bool,
}

impl From<&StackPlan> for StackSummary {
    fn from(plan: &StackPlan) -> Self {
        Self {
            material_id: plan.material.id().clone(),
            material_name: plan.material.name().to_string(),
            boxes_per_layer: plan.boxes_per_layer(),
            total_layers: plan.total_layers,
            total_boxes: plan.total_boxes,
            stack_height: plan.stack_height,
            utilization_percent: plan.utilization * 100.0,
            interlocked: plan.is_interlocked(),
        }
    }
}

/// Deterministic pallet stack planner.
///
/// Holds the pallet configuration and computes a fresh [`StackPlan`] per
/// call. The planner is stateless beyond its configuration and is safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct StackPlanner {
    pallet: Pallet,
}

impl StackPlanner {
    /// Creates a planner for the given pallet.
    pub fn new(pallet: Pallet) -> Self {
        Self { pallet }
    }

    /// Creates a planner with the default pallet configuration.
    pub fn default_config() -> Self {
        Self::new(Pallet::default())
    }

    /// Returns the pallet configuration.
    pub fn pallet(&self) -> &Pallet {
        &self.pallet
    }

    /// Plans a stack of the given material under a height limit.
    ///
    /// Validates the material, the pallet and the limit once up front, then
    /// evaluates both orientations against the fixed footprint: the standard
    /// pattern aligns box length with pallet length, the rotated pattern
    /// swaps the box axes. The denser layout wins; ties go to the higher
    /// coverage, then to the standard pattern. A rotated alternate with equal
    /// count is kept for even layers so the stack interlocks.
    pub fn plan(&self, material: &Material, max_stack_height: f64) -> Result<StackPlan> {
        material.validate()?;
        self.pallet.validate()?;

        if !max_stack_height.is_finite() || max_stack_height <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "Max stack height must be positive, got {}",
                max_stack_height
            )));
        }

        let normal = evaluate_layer(
            material.length(),
            material.width(),
            self.pallet.length(),
            self.pallet.width(),
            false,
        );
        let rotated = evaluate_layer(
            material.width(),
            material.length(),
            self.pallet.length(),
            self.pallet.width(),
            true,
        );

        log::debug!(
            "Layouts for '{}': standard {} boxes ({}), rotated {} boxes ({})",
            material.id(),
            normal.total_boxes,
            normal.efficiency_percent(),
            rotated.total_boxes,
            rotated.efficiency_percent(),
        );

        // Higher count wins; on a tie, higher coverage; on a full tie the
        // standard pattern is the best
        let (best, alt) = if rotated.total_boxes > normal.total_boxes {
            (rotated, normal)
        } else if normal.total_boxes > rotated.total_boxes {
            (normal, rotated)
        } else if normal.efficiency >= rotated.efficiency {
            (normal, rotated)
        } else {
            (rotated, normal)
        };

        // An empty best layout collapses the whole stack: no layer exists to
        // give the stack height
        let effective_height = self.pallet.effective_height(max_stack_height);
        let total_layers = if best.is_empty() {
            0
        } else {
            (effective_height / material.height()).floor() as usize
        };
        let stack_height = total_layers as f64 * material.height();
        let total_boxes = total_layers * best.total_boxes;

        let mut advisories = Vec::new();
        if best.is_empty() {
            advisories.push(Advisory::DegenerateLayout);
        } else if alt.total_boxes < best.total_boxes {
            let advisory = Advisory::NonInterlockedStack {
                best_count: best.total_boxes,
                alt_count: alt.total_boxes,
                alt_pattern: alt.pattern,
            };
            log::warn!(
                "Stack for '{}' will not interlock: {}",
                material.id(),
                advisory
            );
            advisories.push(advisory);
        }

        // Alternate only when rotation keeps the count; a tie at zero is not
        // an interlock
        let even_layer = if alt.total_boxes == best.total_boxes && best.total_boxes > 0 {
            Some(alt)
        } else {
            None
        };

        let utilization = if total_layers > 0 {
            (total_boxes as f64 * material.volume()) / (self.pallet.area() * stack_height)
        } else {
            0.0
        };

        Ok(StackPlan {
            material: material.clone(),
            max_stack_height,
            total_layers,
            total_boxes,
            layer_height: material.height(),
            stack_height,
            odd_layer: best,
            even_layer,
            utilization,
            advisories,
        })
    }
}

impl Default for StackPlanner {
    fn default() -> Self {
        Self::default_config()
    }
}
