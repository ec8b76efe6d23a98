//! 2D value types for drag translations and viewport sizes.
//!
//! Units are logical points throughout. `width` is the horizontal component
//! (negative = leftwards) and `height` the vertical one (negative = upwards).

use std::ops::{Add, Neg, Sub};

/// In-progress visual offset of a card, or a raw drag vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    /// Horizontal component.
    pub width: f32,
    /// Vertical component.
    pub height: f32,
}

impl Translation {
    /// No offset.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Vector from its components.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> f32 {
        self.width.hypot(self.height)
    }

    /// Angle of the vector in degrees within `[0, 360)`.
    ///
    /// Measured as `atan2(width, height)`: 0° points straight down, 90°
    /// right, 180° up and 270° left.
    pub fn angle_degrees(&self) -> f64 {
        let degrees = f64::from(self.width)
            .atan2(f64::from(self.height))
            .to_degrees();
        if degrees < 0.0 { degrees + 360.0 } else { degrees }
    }

    /// Linear interpolation towards `to`; `t` is not clamped.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }
}

impl Add for Translation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Translation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl Neg for Translation {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.width, -self.height)
    }
}

/// Size of the area the card stack is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl ViewportSize {
    /// Size from its extents.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The shorter of the two extents.
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }
}
