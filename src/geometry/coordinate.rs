use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::distance;

/// A position in decimal degrees.
///
/// Values are used as given: there is no normalization or range
/// checking, so a latitude of 91.0 is carried through the math
/// unchanged. Only structural shape (exactly two components) is
/// enforced, and for fixed-size inputs the type already does that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Build a coordinate from a `[lat, lon]` slice.
    ///
    /// Fails unless the slice holds exactly two numbers.
    pub fn from_slice(values: &[f64]) -> Result<Self, ValidationError> {
        match values {
            [latitude, longitude] => Ok(Self::new(*latitude, *longitude)),
            _ => Err(ValidationError::CoordinateShape {
                found: values.len(),
            }),
        }
    }

    /// Great-circle distance to `other`, in meters.
    pub fn distance_to(&self, other: Coordinate) -> f64 {
        distance::haversine_meters(*self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl TryFrom<&[f64]> for Coordinate {
    type Error = ValidationError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_pair() {
        let c = Coordinate::from_slice(&[51.0, 0.25]).unwrap();
        assert_eq!(c, Coordinate::new(51.0, 0.25));
    }

    #[test]
    fn test_from_slice_too_short() {
        let err = Coordinate::from_slice(&[51.0]).unwrap_err();
        assert_eq!(err, ValidationError::CoordinateShape { found: 1 });
    }

    #[test]
    fn test_from_slice_too_long() {
        let err = Coordinate::from_slice(&[51.0, 0.0, 12.0]).unwrap_err();
        assert_eq!(err, ValidationError::CoordinateShape { found: 3 });
    }

    #[test]
    fn test_conversions() {
        let c = Coordinate::new(35.6586, 139.7454);
        assert_eq!(Coordinate::from((35.6586, 139.7454)), c);
        assert_eq!(Coordinate::from([35.6586, 139.7454]), c);
        assert_eq!(Coordinate::try_from(&[35.6586, 139.7454][..]).unwrap(), c);
    }

    #[test]
    fn test_distance_to_matches_haversine() {
        let a = Coordinate::new(51.0, 0.0);
        let b = Coordinate::new(51.00089831528412, 0.0);
        assert_eq!(a.distance_to(b), distance::haversine_meters(a, b));
    }
}
