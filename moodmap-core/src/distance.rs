//! Haversine great-circle distance.

/// Mean Earth radius used by [`distance`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in degrees.
///
/// Inputs are not validated; non-finite values propagate as `NaN`.
///
/// # Examples
/// ```
/// use moodmap_core::distance;
///
/// let km = distance(0.0, 0.0, 1.0, 0.0);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
