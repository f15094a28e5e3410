use std::io;
use std::net::SocketAddr;

quick_error! {
    /// Reasons a single sentence is rejected. None of them is fatal: the
    /// offending line is dropped and the caller moves on to the next one.
    #[derive(Debug)]
    pub enum ParseError {
        MalformedSentence(found: usize) {
            description("Wrong number of fields")
            display("Expected 15 comma separated fields, found {}", found)
        }
        UnsupportedSentenceType(tag: String) {
            description("Sentence type is not GPGGA")
            display("Encountered unsupported sentence type \"{}\"", tag)
        }
        UnsupportedHemisphere(marker: String) {
            description("Invalid hemisphere indicator")
            display("Encountered invalid hemisphere indicator \"{}\"", marker)
        }
        InvalidNumericField(field: &'static str, value: String) {
            description("Invalid numeric field")
            display("Could not parse {} from \"{}\"", field, value)
        }
        CoordinateOutOfRange(val: f64, max: f64) {
            description("Invalid coordinate")
            display("Invalid coordinate: {} should be between {} and {}", val, max*-1.0, max)
        }
        InvalidTimeField(value: String) {
            description("Invalid time field")
            display("Could not parse \"{}\" as hhmmss UTC time", value)
        }
    }
}

quick_error! {
    /// Transport failures of the line source. Kept apart from `ParseError`
    /// since they end the connection rather than a single sentence.
    #[derive(Debug)]
    pub enum ServeError {
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("Encountered I/O error while reading sentences: {}", err)
            cause(err)
        }
        Bind(addr: SocketAddr, err: io::Error) {
            description("Could not bind listener")
            display("Could not bind to {}: {}", addr, err)
            cause(err)
        }
    }
}

// Quick error can't handle from for tuples
impl From<(SocketAddr, io::Error)> for ServeError {
    fn from((addr, e): (SocketAddr, io::Error)) -> Self {
        ServeError::Bind(addr, e)
    }
}
