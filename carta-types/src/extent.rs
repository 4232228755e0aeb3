use serde::{Deserialize, Serialize};

/// Anything that can report its corners as a flat `[west, south, east, north]` array in degrees.
///
/// Bounding boxes of the mapping engines expose this as a `toArray().flat()` style accessor.
pub trait CornerSource {
    /// Corners of the box: `[west, south, east, north]`.
    fn corners(&self) -> [f64; 4];
}

impl CornerSource for [f64; 4] {
    fn corners(&self) -> [f64; 4] {
        *self
    }
}

impl<T: CornerSource + ?Sized> CornerSource for &T {
    fn corners(&self) -> [f64; 4] {
        (**self).corners()
    }
}

/// Geographic bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LngLatBounds {
    /// Western longitude.
    pub west: f64,
    /// Southern latitude.
    pub south: f64,
    /// Eastern longitude.
    pub east: f64,
    /// Northern latitude.
    pub north: f64,
}

impl LngLatBounds {
    /// Creates new bounds from the south-west and north-east corners.
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }
}

impl CornerSource for LngLatBounds {
    fn corners(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

/// Axis-aligned rectangle in projected coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Minimum x.
    pub min_x: f64,
    /// Minimum y.
    pub min_y: f64,
    /// Maximum x.
    pub max_x: f64,
    /// Maximum y.
    pub max_y: f64,
}

impl Extent {
    /// Creates a new extent. The coordinates are normalized so that `min <= max` on both axes.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Width of the extent.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Extent as a flat `[min_x, min_y, max_x, max_y]` array.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn extent_is_normalized() {
        let extent = Extent::new(10.0, 5.0, -2.0, 1.0);
        assert_eq!(extent.to_array(), [-2.0, 1.0, 10.0, 5.0]);
        assert_abs_diff_eq!(extent.width(), 12.0);
        assert_abs_diff_eq!(extent.height(), 4.0);
    }

    #[test]
    fn bounds_report_corners_in_order() {
        let bounds = LngLatBounds::new(5.9, 45.8, 10.5, 47.8);
        assert_eq!(bounds.corners(), [5.9, 45.8, 10.5, 47.8]);
        assert_eq!((&bounds).corners(), bounds.corners());
    }
}
