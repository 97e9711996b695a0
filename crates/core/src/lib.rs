//! # U-Stacking Core
//!
//! Deterministic pallet stacking engine: computes how identical rectangular
//! boxes tile a fixed pallet footprint, and how those layers stack under a
//! height limit.
//!
//! The engine evaluates exactly two candidate orientations per material (box
//! length or box width aligned with the pallet length axis), keeps the denser
//! grid, and alternates the rotated grid on even layers when doing so costs
//! no boxes, so the stack interlocks.
//!
//! ## Core Components
//!
//! - [`Material`] - the box being stacked, with validated dimensions
//! - [`Pallet`] - footprint configuration with base height handling
//! - [`evaluate_layer`] / [`LayerLayout`] - one centered grid tiling
//! - [`StackPlanner`] / [`StackPlan`] - the full stack computation
//!
//! ## Quick Start
//!
//! ```rust
//! use u_stacking_core::{Material, Pallet, StackPlanner};
//!
//! let material = Material::new("carton-a", 400.0, 300.0, 200.0);
//! let planner = StackPlanner::new(Pallet::default());
//!
//! let plan = planner.plan(&material, 1350.0).unwrap();
//! assert_eq!(plan.boxes_per_layer(), 6);
//! assert_eq!(plan.total_boxes, 36);
//! assert!(plan.is_interlocked());
//! ```
//!
//! Every call computes a fresh plan from its inputs; the planner holds no
//! mutable state and may be shared freely across threads.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod layer;
pub mod material;
pub mod pallet;
pub mod stack;

// Re-exports
pub use error::{Error, Result};
pub use layer::{evaluate_layer, LayerLayout, Pattern, Placement};
pub use material::{Material, MaterialId};
pub use pallet::{Pallet, DEFAULT_BASE_HEIGHT, DEFAULT_PALLET_LENGTH, DEFAULT_PALLET_WIDTH};
pub use stack::{Advisory, StackPlan, StackPlanner, StackSummary};
