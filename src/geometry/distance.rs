use crate::geometry::Coordinate;

/// Earth radius used for all distance computations, in meters.
///
/// This is the WGS84 equatorial radius. Combined with the haversine
/// formula it treats the earth as a sphere, which is accurate to
/// roughly 0.5% and plenty for geofencing.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Great-circle distance between two coordinates using the haversine
/// formula. Input lat/lon in degrees, output in meters.
///
/// The longitude difference is a raw subtraction: pairs that straddle
/// the antimeridian (e.g. 179 and -179 degrees) are not unwrapped and
/// will measure the long way around.
pub fn haversine_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
