//! Query bounds in projected space.
//!
//! Ranges are normalised on construction, so `(hi, lo)` and `(lo, hi)`
//! describe the same interval. Both ends are inclusive.

use crate::spatial::index::Axis;
use crate::spatial::projection::Location;

/// Closed interval along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_nan(&self) -> bool {
        self.min.is_nan() || self.max.is_nan()
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

/// Axis-aligned query rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryRect {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl QueryRect {
    pub fn new(x_range: impl Into<AxisRange>, y_range: impl Into<AxisRange>) -> Self {
        Self {
            x: x_range.into(),
            y: y_range.into(),
        }
    }

    /// Square that bounds the circle of `radius` around `origin`
    pub fn around(origin: Location, radius: f64) -> Self {
        Self::new(
            (origin.x - radius, origin.x + radius),
            (origin.y - radius, origin.y + radius),
        )
    }

    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.x.contains(location.x) && self.y.contains(location.y)
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalises_reversed_bounds() {
        assert_eq!(AxisRange::new(5.0, -5.0), AxisRange::new(-5.0, 5.0));
        assert_eq!(AxisRange::from((3.0, 1.0)).min, 1.0);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = AxisRange::new(-1.0, 1.0);
        assert!(range.contains(-1.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(1.0 + f64::EPSILON));
    }

    #[test]
    fn test_rect_contains() {
        let rect = QueryRect::new((2.0, -2.0), (-1.0, 1.0));
        assert!(rect.contains(&Location::new(2.0, 1.0)));
        assert!(!rect.contains(&Location::new(0.0, 1.5)));
        assert_eq!(rect.range(Axis::X), AxisRange::new(-2.0, 2.0));
    }

    #[test]
    fn test_around_bounds_circle() {
        let rect = QueryRect::around(Location::new(1.0, 2.0), 3.0);
        assert_eq!(rect.x, AxisRange::new(-2.0, 4.0));
        assert_eq!(rect.y, AxisRange::new(-1.0, 5.0));
    }

    #[test]
    fn test_nan_detection() {
        assert!(QueryRect::new((f64::NAN, 1.0), (0.0, 1.0)).is_nan());
        assert!(!QueryRect::new((0.0, 1.0), (0.0, 1.0)).is_nan());
    }
}
