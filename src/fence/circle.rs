use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::{Coordinate, haversine_meters};

/// A circular geofence: a center and a radius in whole meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleDef")]
pub struct Circle {
    center: Coordinate,
    radius_m: f64,
}

/// Raw shape accepted by deserialization before radius validation.
#[derive(Deserialize)]
struct CircleDef {
    center: Coordinate,
    radius_m: f64,
}

impl Circle {
    /// Create a circle, validating the radius.
    ///
    /// The radius must be a non-negative whole number of meters; a
    /// fractional, negative, or non-finite radius is rejected. Zero is
    /// allowed and describes a fence containing only its own center.
    pub fn new(center: Coordinate, radius_m: f64) -> Result<Self, ValidationError> {
        if radius_m < 0.0 {
            return Err(ValidationError::NegativeRadius { radius_m });
        }
        if radius_m.fract() != 0.0 {
            return Err(ValidationError::FractionalRadius { radius_m });
        }
        Ok(Self { center, radius_m })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// True if `point` lies within the circle, boundary included: a
    /// point at exactly the radius distance counts as inside.
    pub fn contains(&self, point: Coordinate) -> bool {
        haversine_meters(self.center, point) <= self.radius_m
    }
}

impl TryFrom<CircleDef> for Circle {
    type Error = ValidationError;

    fn try_from(def: CircleDef) -> Result<Self, Self::Error> {
        Circle::new(def.center, def.radius_m)
    }
}

/// Containment test against a circle described by its parts, validating
/// the radius on every call.
pub fn is_inside_circle(
    center: Coordinate,
    point: Coordinate,
    radius_m: f64,
) -> Result<bool, ValidationError> {
    Ok(Circle::new(center, radius_m)?.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Giza pyramid complex, with a nearby point and one near Jerusalem.
    fn giza_center() -> Coordinate {
        Coordinate::new(29.812344634414643, 31.213763328787017)
    }

    #[test]
    fn test_nearby_point_inside_5km() {
        let circle = Circle::new(giza_center(), 5000.0).unwrap();
        let point = Coordinate::new(29.814333605245828, 31.206551638751463);
        assert!(circle.contains(point));
    }

    #[test]
    fn test_far_point_outside_5km() {
        let circle = Circle::new(giza_center(), 5000.0).unwrap();
        let point = Coordinate::new(31.779216947627045, 35.22792555221807);
        assert!(!circle.contains(point));
    }

    #[test]
    fn test_boundary_is_inside() {
        // Distance to self is exactly zero, so a zero radius still
        // contains the center.
        let circle = Circle::new(giza_center(), 0.0).unwrap();
        assert!(circle.contains(giza_center()));
    }

    #[test]
    fn test_radius_brackets_distance() {
        // The point sits ~730.89 m from the center.
        let point = Coordinate::new(29.814333605245828, 31.206551638751463);
        assert!(Circle::new(giza_center(), 731.0).unwrap().contains(point));
        assert!(!Circle::new(giza_center(), 730.0).unwrap().contains(point));
    }

    #[test]
    fn test_fractional_radius_rejected() {
        let err = Circle::new(giza_center(), 730.5).unwrap_err();
        assert_eq!(err, ValidationError::FractionalRadius { radius_m: 730.5 });
    }

    #[test]
    fn test_negative_radius_rejected() {
        let err = Circle::new(giza_center(), -100.0).unwrap_err();
        assert_eq!(err, ValidationError::NegativeRadius { radius_m: -100.0 });
    }

    #[test]
    fn test_nan_radius_rejected() {
        let err = Circle::new(giza_center(), f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::FractionalRadius { .. }));
    }

    #[test]
    fn test_is_inside_circle_fn() {
        let point = Coordinate::new(29.814333605245828, 31.206551638751463);
        assert!(is_inside_circle(giza_center(), point, 5000.0).unwrap());
        assert_eq!(
            is_inside_circle(giza_center(), point, 5000.5),
            Err(ValidationError::FractionalRadius { radius_m: 5000.5 })
        );
    }
}
