use std::fmt;

/// A position fix decoded from one GGA sentence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in decimal degrees, `-90..=90`, negative south of the equator.
    pub latitude: f64,
    /// Longitude in decimal degrees, `-180..=180`, negative west of Greenwich.
    pub longitude: f64,
    /// Antenna altitude above mean sea level in meters.
    pub altitude: f64,
    /// WGS-84 ECEF coordinates in meters.
    pub ecef_x: f64,
    pub ecef_y: f64,
    pub ecef_z: f64,
    /// Seconds since the Unix epoch, UTC.
    pub timestamp: i64,
}

/// Bundles already validated values into a `Position`.
#[inline]
pub fn assemble(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    x: f64,
    y: f64,
    z: f64,
    timestamp: i64,
) -> Position {
    Position {
        latitude,
        longitude,
        altitude,
        ecef_x: x,
        ecef_y: y,
        ecef_z: z,
        timestamp,
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "latitude: {}", self.latitude)?;
        writeln!(f, "longitude: {}", self.longitude)?;
        writeln!(f, "altitude: {}", self.altitude)?;
        writeln!(f, "x: {:.3}", self.ecef_x)?;
        writeln!(f, "y: {:.3}", self.ecef_y)?;
        writeln!(f, "z: {:.3}", self.ecef_z)?;
        write!(f, "timestamp: {}", self.timestamp)
    }
}
