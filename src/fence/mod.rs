pub mod circle;
pub mod polygon;

pub use circle::{Circle, is_inside_circle};
pub use polygon::{Polygon, is_inside_polygon};

use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

/// A geographic containment region, circular or polygonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoFence {
    Circle(Circle),
    Polygon(Polygon),
}

impl GeoFence {
    /// True if `point` lies within the fence.
    pub fn contains(&self, point: Coordinate) -> bool {
        match self {
            GeoFence::Circle(circle) => circle.contains(point),
            GeoFence::Polygon(polygon) => polygon.contains(point),
        }
    }
}
