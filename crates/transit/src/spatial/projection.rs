//! Flat-earth projection of latitude/longitude into planar miles.
//!
//! Each axis is measured as a great-circle distance from a fixed reference
//! point: x along the reference latitude, y along the reference longitude.
//! The sign records which side of the reference the point lies on.

use geo::Point;

/// Earth radius used by the haversine formula, in miles
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Latitude of the default projection origin (Wisconsin State Capitol)
pub const REFERENCE_LAT: f64 = 43.074683;

/// Longitude of the default projection origin (Wisconsin State Capitol)
pub const REFERENCE_LON: f64 = -89.384261;

/// Great-circle distance in miles between two points given in degrees.
///
/// The square-root term is clamped to 1 so floating-point overshoot near
/// antipodal points can't push `asin` out of its domain.
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_MILES * c
}

/// Origin of a flat-earth projection
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub origin_lat: f64,
    pub origin_lon: f64,
}

impl Projection {
    pub fn new(origin_lat: f64, origin_lon: f64) -> Self {
        Self {
            origin_lat,
            origin_lon,
        }
    }

    /// Project a latitude/longitude pair into miles from the origin
    pub fn project(&self, lat: f64, lon: f64) -> Location {
        let mut x = haversine_miles(self.origin_lat, self.origin_lon, self.origin_lat, lon);
        let mut y = haversine_miles(self.origin_lat, self.origin_lon, lat, self.origin_lon);

        if lon < self.origin_lon {
            x = -x;
        }
        if lat < self.origin_lat {
            y = -y;
        }

        Location { x, y }
    }

    /// Project a geographic point (x = longitude, y = latitude)
    pub fn project_point(&self, point: Point) -> Location {
        self.project(point.y(), point.x())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(REFERENCE_LAT, REFERENCE_LON)
    }
}

/// A projected position, in signed miles east (x) and north (y) of the origin
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Project using the default (capitol) origin
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Projection::default().project(lat, lon)
    }

    /// Straight-line distance in projected space
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_reference_projects_to_origin() {
        let origin = Location::from_lat_lon(REFERENCE_LAT, REFERENCE_LON);
        assert_abs_diff_eq!(origin.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let dist = haversine_miles(43.0, -89.0, 44.0, -89.0);
        assert_relative_eq!(dist, EARTH_RADIUS_MILES * 1f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn test_haversine_antipodal_is_finite() {
        let dist = haversine_miles(0.0, 0.0, 0.0, 180.0);
        assert!(dist.is_finite());
        assert_relative_eq!(dist, EARTH_RADIUS_MILES * std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn test_projection_signs() {
        let north_east = Location::from_lat_lon(REFERENCE_LAT + 0.1, REFERENCE_LON + 0.1);
        assert!(north_east.x > 0.0);
        assert!(north_east.y > 0.0);

        let south_west = Location::from_lat_lon(REFERENCE_LAT - 0.1, REFERENCE_LON - 0.1);
        assert!(south_west.x < 0.0);
        assert!(south_west.y < 0.0);

        // Mirror images across the origin have equal magnitude on y
        assert_relative_eq!(north_east.y, -south_west.y, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_axes_are_independent() {
        let north = Location::from_lat_lon(REFERENCE_LAT + 1.0, REFERENCE_LON);
        assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(north.y, EARTH_RADIUS_MILES * 1f64.to_radians(), epsilon = 1e-9);
    }

    #[test]
    fn test_project_point_takes_lon_as_x() {
        let point = Point::new(-89.40, 43.07);
        let projection = Projection::default();
        assert_eq!(projection.project_point(point), Location::from_lat_lon(43.07, -89.40));
    }

    #[test]
    fn test_custom_projection_origin() {
        let projection = Projection::new(40.7128, -74.0060);
        let origin = projection.project(40.7128, -74.0060);
        assert_abs_diff_eq!(origin.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_to() {
        let a = Location::new(0.0, 0.0);
        let b = Location::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
        assert_relative_eq!(b.distance_squared_to(&a), 25.0);
    }
}
