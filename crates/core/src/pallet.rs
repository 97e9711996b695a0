//! Pallet footprint configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default pallet footprint length in millimeters.
pub const DEFAULT_PALLET_LENGTH: f64 = 1180.0;

/// Default pallet footprint width in millimeters.
pub const DEFAULT_PALLET_WIDTH: f64 = 980.0;

/// Default pallet base (deck) height in millimeters.
pub const DEFAULT_BASE_HEIGHT: f64 = 140.0;

/// Pallet configuration: the fixed footprint boxes are tiled onto.
///
/// The base height describes the physical deck below the first layer. It is
/// always available to renderers; whether it is subtracted from the stack
/// height limit is controlled by [`Pallet::with_base_in_height`], off by
/// default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    /// Footprint length.
    length: f64,

    /// Footprint width.
    width: f64,

    /// Height of the pallet deck below the first layer.
    base_height: f64,

    /// Whether the base height counts against the stack height limit.
    include_base_in_height: bool,
}

impl Default for Pallet {
    fn default() -> Self {
        Self {
            length: DEFAULT_PALLET_LENGTH,
            width: DEFAULT_PALLET_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            include_base_in_height: false,
        }
    }
}

impl Pallet {
    /// Creates a pallet with the given footprint and the default base height.
    pub fn new(length: f64, width: f64) -> Self {
        Self {
            length,
            width,
            ..Self::default()
        }
    }

    /// Sets the pallet base height.
    pub fn with_base_height(mut self, height: f64) -> Self {
        self.base_height = height;
        self
    }

    /// Sets whether the base height is subtracted from the stack height limit.
    pub fn with_base_in_height(mut self, include: bool) -> Self {
        self.include_base_in_height = include;
        self
    }

    /// Returns the footprint length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the footprint width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the base height.
    pub fn base_height(&self) -> f64 {
        self.base_height
    }

    /// Returns whether the base height counts against the height limit.
    pub fn includes_base_in_height(&self) -> bool {
        self.include_base_in_height
    }

    /// Returns the footprint area.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Returns the cargo height available under the given stack height limit.
    ///
    /// With the base excluded (the default) this is the limit itself; with the
    /// base included the base height is subtracted, clamped at zero.
    pub fn effective_height(&self, max_stack_height: f64) -> f64 {
        if self.include_base_in_height {
            (max_stack_height - self.base_height).max(0.0)
        } else {
            max_stack_height
        }
    }

    /// Validates the footprint and base height.
    pub fn validate(&self) -> Result<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "Pallet length must be positive, got {}",
                self.length
            )));
        }

        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidDimension(format!(
                "Pallet width must be positive, got {}",
                self.width
            )));
        }

        if !self.base_height.is_finite() || self.base_height < 0.0 {
            return Err(Error::InvalidDimension(format!(
                "Pallet base height must be non-negative, got {}",
                self.base_height
            )));
        }

        Ok(())
    }
}
