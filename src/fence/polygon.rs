use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geometry::Coordinate;

/// A polygonal geofence: an ordered vertex ring in degrees.
///
/// The ring is implicitly closed, so the last vertex connects back to
/// the first whether or not the caller repeats the first vertex at the
/// end. Holes and self-intersecting rings are not supported.
///
/// Serializes as a bare array of vertices; deserialization runs the
/// same vertex-count validation as [`Polygon::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    /// Create a polygon from its vertex ring.
    ///
    /// Fails unless at least three vertices are given.
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self, ValidationError> {
        if vertices.len() < 3 {
            return Err(ValidationError::TooFewVertices {
                found: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// True if `point` lies inside the polygon, by the even-odd rule.
    ///
    /// A point exactly on an edge may classify either way; callers
    /// should not rely on boundary behavior.
    pub fn contains(&self, point: Coordinate) -> bool {
        ray_cast(&self.vertices, point)
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = ValidationError;

    fn try_from(vertices: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Coordinate> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// Containment test against a vertex ring, validating the ring on every
/// call.
pub fn is_inside_polygon(
    vertices: &[Coordinate],
    point: Coordinate,
) -> Result<bool, ValidationError> {
    if vertices.len() < 3 {
        return Err(ValidationError::TooFewVertices {
            found: vertices.len(),
        });
    }
    Ok(ray_cast(vertices, point))
}

/// Even-odd ray casting with latitude as the X axis and longitude as
/// the Y axis.
///
/// A horizontal ray runs from the query point towards +X; every edge
/// whose Y span straddles the query's Y toggles the parity when its
/// crossing lies left of the point. Edges entirely to the right of the
/// point are skipped before the division. A repeated first vertex forms
/// a zero-length edge that never straddles, so explicitly closing the
/// ring does not change the answer. Longitudes are compared raw; rings
/// that straddle the antimeridian are not unwrapped.
fn ray_cast(vertices: &[Coordinate], point: Coordinate) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let x = point.latitude;
    let y = point.longitude;

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        let straddles = (vi.longitude < y && vj.longitude >= y)
            || (vj.longitude < y && vi.longitude >= y);
        if straddles && (vi.latitude <= x || vj.latitude <= x) {
            // The straddle check mixes a strict and an inclusive bound,
            // so vi and vj cannot share a longitude here and the
            // division is safe.
            let crossing = vi.latitude
                + (y - vi.longitude) / (vj.longitude - vi.longitude)
                    * (vj.latitude - vi.latitude);
            inside = inside != (crossing < x);
        }
        j = i;
    }

    inside
}
