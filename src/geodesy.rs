//! Conversion of NMEA degree-minute coordinates to decimal degrees and of
//! geodetic coordinates to Earth-Centered-Earth-Fixed (ECEF) coordinates on
//! the WGS-84 ellipsoid.

use crate::err::ParseError;
use crate::parser::{CardDir, ValidatedFields};

/// WGS-84 semi-major axis in meters.
pub const WGS84_A: f64 = 6378137.0;
/// WGS-84 first eccentricity squared.
pub const WGS84_E2: f64 = 6.6943799901377997e-3;

const LAT_SPLIT: usize = 2;
const ABS_MAX_LAT: f64 = 90.0;
const LONG_SPLIT: usize = 3;
const ABS_MAX_LONG: f64 = 180.0;

/// Earth-Centered-Earth-Fixed coordinates in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Geodetic position decoded from a sentence, together with its ECEF form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Latitude in decimal degrees, negative in the southern hemisphere.
    pub lat: f64,
    /// Longitude in decimal degrees, negative in the western hemisphere.
    pub long: f64,
    /// Altitude in meters.
    pub altitude: f64,
    pub ecef: Ecef,
}

/// Decodes latitude, longitude and altitude of `fields` and transforms them
/// to ECEF.
///
/// The altitude unit field is assumed to be `M`; no unit conversion is done.
pub fn convert(fields: &ValidatedFields) -> Result<Geodetic, ParseError> {
    let lat = parse_coord(fields.lat, &fields.lat_dir, LAT_SPLIT, ABS_MAX_LAT, "latitude")?;
    let long = parse_coord(
        fields.long,
        &fields.long_dir,
        LONG_SPLIT,
        ABS_MAX_LONG,
        "longitude",
    )?;
    let altitude = parse_finite!(fields.altitude, "altitude");

    Ok(Geodetic {
        lat,
        long,
        altitude,
        ecef: to_ecef(lat, long, altitude),
    })
}

/// Parse `coord` (`DDMM.MMMM` or `DDDMM.MMMM`) as decimal degrees.
/// `dir` will be converted to 1 or -1 to be multiplied with the degrees.
/// `deg_split` is the number of digits that make up the degrees.
/// `abs_max` is the maximum value in degrees, e.g. 180 for longitude.
pub fn parse_coord(
    coord: &str,
    dir: &CardDir,
    deg_split: usize,
    abs_max: f64,
    name: &'static str,
) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumericField(name, coord.to_string());

    // `get` instead of `split_at`: a multi-byte char at the split would panic
    if coord.len() <= deg_split {
        return Err(invalid());
    }
    let (deg, min) = match (coord.get(..deg_split), coord.get(deg_split..)) {
        (Some(deg), Some(min)) => (deg, min),
        _ => return Err(invalid()),
    };
    if !deg.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let degrees = f64::from(parse_field!(deg, u16, name));
    let minutes = parse_finite!(min, name);
    if minutes < 0.0 || minutes >= 60.0 {
        return Err(invalid());
    }

    let dec_deg = degrees + minutes / 60.0;
    if dec_deg > abs_max {
        return Err(ParseError::CoordinateOutOfRange(dec_deg, abs_max));
    }
    Ok(dec_deg * dir.get_sign() as f64)
}

/// Transforms geodetic coordinates (degrees, meters above the ellipsoid) to
/// ECEF coordinates on the WGS-84 ellipsoid.
pub fn to_ecef(lat: f64, long: f64, altitude: f64) -> Ecef {
    let phi = lat.to_radians();
    let lambda = long.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    // prime vertical radius of curvature
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_phi * sin_phi).sqrt();

    Ecef {
        x: (n + altitude) * cos_phi * cos_lambda,
        y: (n + altitude) * cos_phi * sin_lambda,
        z: (n * (1.0 - WGS84_E2) + altitude) * sin_phi,
    }
}
