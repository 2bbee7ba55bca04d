//! geofence - Great-circle distance and geofence containment for
//! lat/lon coordinates
//!
//! Distances use the haversine formula on a sphere with the WGS84
//! equatorial radius. Fences come in two shapes: a [`Circle`] with a
//! whole-meter radius, tested boundary-inclusive, and a [`Polygon`]
//! tested with the even-odd ray casting rule. Everything is a pure
//! function of its inputs; coordinates are used as given, with no
//! normalization and no antimeridian unwrapping.

pub mod error;
pub mod fence;
pub mod geometry;

pub use error::ValidationError;
pub use fence::{Circle, GeoFence, Polygon, is_inside_circle, is_inside_polygon};
pub use geometry::{Coordinate, EARTH_RADIUS_M, haversine_meters};
