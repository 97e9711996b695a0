//! SVG rendering for pallet stack plans.
//!
//! Given a computed stack plan, this crate draws:
//! - **Floor plans**: one layer from above, footprint plus numbered box
//!   rects, odd and even patterns separately
//! - **Isometric views**: the whole stack with the pallet plinth, layers
//!   drawn bottom-up and boxes back-to-front (painter's algorithm)
//!
//! Both renderers build plain SVG strings with no drawing dependency; the
//! engine's placements are used as-is and never mutated.
//!
//! # Example
//!
//! ```
//! use u_stacking_core::{Material, StackPlanner};
//! use u_stacking_render::{render_floor_plan, render_isometric, RenderConfig};
//!
//! let material = Material::new("carton-a", 400.0, 300.0, 200.0);
//! let planner = StackPlanner::default_config();
//! let plan = planner.plan(&material, 1350.0).unwrap();
//!
//! let config = RenderConfig::default();
//! let floor = render_floor_plan(&plan, planner.pallet(), 1, &config).unwrap();
//! let stack = render_isometric(&plan, planner.pallet(), &config).unwrap();
//! assert!(floor.starts_with("<svg"));
//! assert!(stack.starts_with("<svg"));
//! ```

pub mod config;
pub mod floorplan;
pub mod isometric;

pub use config::RenderConfig;
pub use floorplan::{render_floor_plan, render_layout};
pub use isometric::render_isometric;
