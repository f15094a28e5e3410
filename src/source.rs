//! Delivery of candidate sentences from a byte stream.

use std::io::{self, BufRead, Read};
use std::str;

use crate::err::ServeError;

const SENTENCE_MARKER: &str = "GPGGA";

/// Longest accepted line in bytes, line ending included. NMEA caps sentences
/// at 82 characters.
pub const MAX_LINE: usize = 1024;

/// Iterates over the lines of `input` that look like GGA sentences.
///
/// Line endings are stripped, lines not containing `GPGGA` are skipped.
/// Lines longer than `MAX_LINE` or not valid UTF-8 are dropped with a
/// warning; only I/O errors of `input` are reported.
/// Whether a candidate actually is a valid sentence is left to
/// [parse](../parser/fn.parse.html).
#[derive(Debug)]
pub struct LineSource<R> {
    input: R,
    bytes: Vec<u8>,
    line: String,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(input: R) -> Self {
        LineSource {
            input,
            bytes: Vec::with_capacity(MAX_LINE),
            line: String::new(),
        }
    }

    /// Reads the next candidate sentence. Returns `Ok(None)` on EOF.
    pub fn next_sentence(&mut self) -> Result<Option<&str>, ServeError> {
        loop {
            self.bytes.clear();
            let limit = MAX_LINE as u64;
            if (&mut self.input).take(limit).read_until(b'\n', &mut self.bytes)? == 0 {
                return Ok(None);
            }
            if self.bytes.len() == MAX_LINE && self.bytes.last() != Some(&b'\n') {
                warn!("dropping line longer than {} bytes", MAX_LINE);
                self.discard_line()?;
                continue;
            }

            let text = match str::from_utf8(&self.bytes) {
                Ok(text) => text.trim_end_matches(&['\r', '\n'][..]),
                Err(e) => {
                    warn!("dropping line that is not valid UTF-8: {}", e);
                    continue;
                }
            };
            if text.contains(SENTENCE_MARKER) {
                debug!("received sentence {:?}", text);
                self.line.clear();
                self.line.push_str(text);
                break;
            }
            trace!("skipping line {:?}", text);
        }
        Ok(Some(&self.line))
    }

    /// Consumes input up to and including the next newline, `MAX_LINE` bytes
    /// at a time.
    fn discard_line(&mut self) -> io::Result<()> {
        loop {
            self.bytes.clear();
            let n = (&mut self.input)
                .take(MAX_LINE as u64)
                .read_until(b'\n', &mut self.bytes)?;
            if n == 0 || self.bytes.last() == Some(&b'\n') {
                return Ok(());
            }
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String, ServeError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_sentence() {
            Ok(Some(s)) => Some(Ok(s.to_string())),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor};

    struct Broken;

    impl io::Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn yields_only_gga_lines() {
        let input = "$GPRMC,1,2\r\n\
                     $GPGGA,175320.00,4748.634872,N\r\n\
                     \n\
                     garbage\n\
                     $GPGGA,last";
        let lines: Vec<_> = LineSource::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["$GPGGA,175320.00,4748.634872,N", "$GPGGA,last"]);
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut source = LineSource::new(Cursor::new(""));
        assert_matches!(source.next_sentence(), Ok(None));
        assert!(source.next().is_none());
    }

    #[test]
    fn surfaces_io_errors() {
        let mut source = LineSource::new(BufReader::new(Broken));
        assert_matches!(source.next(), Some(Err(ServeError::Io(_))));
    }

    #[test]
    fn skips_invalid_utf8_lines() {
        let mut input = b"$GPGGA,\xb0noise\n".to_vec();
        input.extend_from_slice(b"$GPGGA,175320.00,4748.634872,N\n");
        let mut source = LineSource::new(Cursor::new(input));
        assert_matches!(source.next_sentence(), Ok(Some("$GPGGA,175320.00,4748.634872,N")));
        assert_matches!(source.next_sentence(), Ok(None));
    }

    #[test]
    fn skips_oversized_lines() {
        let mut input = b"$GPGGA,".to_vec();
        input.extend(std::iter::repeat(b'9').take(3 * MAX_LINE));
        input.extend_from_slice(b"\r\n$GPGGA,next\r\n");
        let lines: Vec<_> = LineSource::new(Cursor::new(input))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["$GPGGA,next"]);
    }

    #[test]
    fn unterminated_oversized_line_ends_at_eof() {
        let input = vec![b'x'; MAX_LINE + 1];
        let mut source = LineSource::new(Cursor::new(input));
        assert_matches!(source.next_sentence(), Ok(None));
    }

    #[test]
    fn accepts_line_of_maximum_length() {
        let mut line = "$GPGGA,".to_string();
        while line.len() < MAX_LINE - 1 {
            line.push('0');
        }
        let input = format!("{}\n", line);
        let mut source = LineSource::new(Cursor::new(input));
        assert_eq!(source.next_sentence().unwrap(), Some(line.as_str()));
    }
}
