//! Material (box) types.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a material item.
pub type MaterialId = String;

/// A rectangular box to be stacked on a pallet.
///
/// Dimensions are stored as (length, width, height) in the same unit as the
/// pallet footprint, millimeters by convention. The id and display name are
/// carried for reporting only and never affect computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Unique identifier.
    id: MaterialId,

    /// Display name.
    name: String,

    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,
}

impl Material {
    /// Creates a new material with the given ID and dimensions.
    pub fn new(id: impl Into<MaterialId>, length: f64, width: f64, height: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &MaterialId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the volume of one box.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates that all dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        for dim in self.dimensions.iter() {
            if !dim.is_finite() || *dim <= 0.0 {
                return Err(Error::InvalidDimension(format!(
                    "All dimensions for '{}' must be positive, got {}x{}x{}",
                    self.id, self.dimensions.x, self.dimensions.y, self.dimensions.z
                )));
            }
        }

        Ok(())
    }
}
