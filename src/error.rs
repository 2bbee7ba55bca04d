//! Error types for geofence validation.

use thiserror::Error;

/// Errors raised when an input fails a precondition check.
///
/// All checks run eagerly, before any computation, so a failed check
/// never produces a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A coordinate slice did not hold exactly two components.
    #[error("coordinate must be a latitude/longitude pair of two numbers, got {found} components")]
    CoordinateShape {
        /// Number of components actually provided.
        found: usize,
    },

    /// A circle radius was negative.
    #[error("radius must be a non-negative number of meters, got {radius_m}")]
    NegativeRadius {
        /// The rejected radius in meters.
        radius_m: f64,
    },

    /// A circle radius was not a whole number of meters.
    #[error("radius must be a whole number of meters, got {radius_m}")]
    FractionalRadius {
        /// The rejected radius in meters.
        radius_m: f64,
    },

    /// A polygon was given fewer than three vertices.
    #[error("polygon must have at least 3 vertices, got {found}")]
    TooFewVertices {
        /// Number of vertices actually provided.
        found: usize,
    },
}
