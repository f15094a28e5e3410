//! Parses the *GGA* sentence of the *NMEA 0183* protocol as emitted by GPS
//! receivers (`$GPGGA`) into a [Position](position/struct.Position.html):
//! decimal-degree coordinates, altitude, WGS-84 ECEF coordinates and a UTC
//! timestamp.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate arrayvec;
extern crate chrono;
#[macro_use]
extern crate log;
#[macro_use]
extern crate quick_error;

pub mod err;
#[macro_use]
mod macros;
pub mod lexer;
pub mod geodesy;
pub mod parser;
pub mod position;
pub mod source;
pub mod time;

pub use err::{ParseError, ServeError};
pub use geodesy::Ecef;
pub use parser::parse;
pub use position::Position;
pub use source::LineSource;
