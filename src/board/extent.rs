//! Bounding rectangle of a kingdom.

use serde::{Deserialize, Serialize};

use super::landscape::Coord;

/// Minimum and maximum occupied coordinate on each axis.
///
/// The castle sits at the origin, so every bound straddles zero:
/// `x_min <= 0 <= x_max` and `y_min <= 0 <= y_max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardExtent {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl BoardExtent {
    /// Extent of a board holding only the castle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_min: 0,
            x_max: 0,
            y_min: 0,
            y_max: 0,
        }
    }

    /// This extent widened to cover `coord`.
    #[must_use]
    pub fn including(self, coord: Coord) -> Self {
        Self {
            x_min: self.x_min.min(coord.x),
            x_max: self.x_max.max(coord.x),
            y_min: self.y_min.min(coord.y),
            y_max: self.y_max.max(coord.y),
        }
    }

    /// Widen in place to cover `coord`. Never shrinks.
    pub fn expand(&mut self, coord: Coord) {
        *self = self.including(coord);
    }

    /// Span along x, measured as `|x_min| + |x_max|`.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.x_min.abs() + self.x_max.abs()
    }

    /// Span along y, measured as `|y_min| + |y_max|`.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.y_min.abs() + self.y_max.abs()
    }

    /// Does neither span exceed `max_size`?
    #[must_use]
    pub fn fits(&self, max_size: i32) -> bool {
        self.width() <= max_size && self.height() <= max_size
    }

    /// Is the origin exactly in the middle on both axes?
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.x_min.abs() == self.x_max.abs() && self.y_min.abs() == self.y_max.abs()
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        (self.x_min..=self.x_max).contains(&coord.x)
            && (self.y_min..=self.y_max).contains(&coord.y)
    }
}
