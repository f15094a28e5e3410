//! This module provides a parser for the *GGA* sentence of the *NMEA 0183*
//! protocol as sent by GPS receivers (talker id `GP`).
//!
//! Parsing is a pure function of the sentence and the current date: nothing
//! is kept between calls, so [parse](fn.parse.html) may be called from any
//! number of threads at once.

use chrono::NaiveDate;

use crate::err::ParseError;
use crate::geodesy;
use crate::lexer::{self, FIELD_COUNT};
use crate::position::{self, Position};
use crate::time;

const SENTENCE_TYPE: &str = "$GPGGA";

/// The cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardDir {
    North,
    South,
    East,
    West,
}

impl CardDir {
    #[inline]
    pub fn get_sign(&self) -> isize {
        match self {
            CardDir::North | CardDir::East => 1,
            CardDir::South | CardDir::West => -1,
        }
    }
}

/// The fields of a structurally valid GGA sentence, still unparsed.
///
/// The checksum (last field) is carried along but never verified.
#[derive(Debug)]
pub struct ValidatedFields<'a> {
    /// UTC time of day, `hhmmss.ss`.
    pub utc: &'a str,
    /// Latitude, `ddmm.mmmm`.
    pub lat: &'a str,
    pub lat_dir: CardDir,
    /// Longitude, `dddmm.mmmm`.
    pub long: &'a str,
    pub long_dir: CardDir,
    /// Antenna altitude in meters.
    pub altitude: &'a str,
    pub checksum: &'a str,
}

/// Checks the field count, the sentence type and the hemisphere indicators
/// of `fields`. No numeric field is looked at.
pub fn validate<'a>(fields: &lexer::FieldSequence<'a>) -> Result<ValidatedFields<'a>, ParseError> {
    if fields.count() != FIELD_COUNT {
        return Err(ParseError::MalformedSentence(fields.count()));
    }
    if fields[0] != SENTENCE_TYPE {
        return Err(ParseError::UnsupportedSentenceType(fields[0].to_string()));
    }

    let lat_dir = match fields[3] {
        "N" => CardDir::North,
        "S" => CardDir::South,
        s => return Err(ParseError::UnsupportedHemisphere(s.to_string())),
    };
    let long_dir = match fields[5] {
        "E" => CardDir::East,
        "W" => CardDir::West,
        s => return Err(ParseError::UnsupportedHemisphere(s.to_string())),
    };

    Ok(ValidatedFields {
        utc: fields[1],
        lat: fields[2],
        lat_dir,
        long: fields[4],
        long_dir,
        altitude: fields[9],
        checksum: fields[14],
    })
}

/// Parse a single `$GPGGA` sentence.
///
/// `today` is the current UTC date; GGA only carries the time of day, so the
/// resulting timestamp is that time on `today`. A trailing line ending is
/// ignored.
pub fn parse(sentence: &str, today: NaiveDate) -> Result<Position, ParseError> {
    let sentence = sentence.trim_end_matches(&['\r', '\n'][..]);
    let fields = lexer::tokenize(sentence);
    let fields = validate(&fields)?;

    let geo = geodesy::convert(&fields)?;
    let timestamp = time::resolve_timestamp(fields.utc, today)?;

    Ok(position::assemble(
        geo.lat,
        geo.long,
        geo.altitude,
        geo.ecef.x,
        geo.ecef.y,
        geo.ecef.z,
        timestamp,
    ))
}
