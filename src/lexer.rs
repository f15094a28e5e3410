//! Splitting of a raw sentence into its comma separated fields.

use arrayvec::ArrayVec;

use std::ops::Deref;

/// Number of comma separated fields in a GGA sentence, counting the leading
/// `$GPGGA` tag and the trailing checksum.
pub const FIELD_COUNT: usize = 15;

const DELIMITER: char = ',';

/// The fields of one sentence, borrowed from the input line.
///
/// Only the first `FIELD_COUNT` fields are stored; `count` keeps the total so
/// an overlong sentence is still recognized as malformed.
#[derive(Debug)]
pub struct FieldSequence<'a> {
    fields: ArrayVec<&'a str, FIELD_COUNT>,
    count: usize,
}

impl<'a> FieldSequence<'a> {
    /// Total number of fields in the sentence, including any that did not fit.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<'a> Deref for FieldSequence<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &[&'a str] {
        &self.fields
    }
}

/// Splits `sentence` on `','`. Empty fields are kept, so `"a,,b"` yields
/// three fields. Every call starts from an empty sequence.
pub fn tokenize(sentence: &str) -> FieldSequence<'_> {
    let mut fields = ArrayVec::new();
    let mut count = 0;

    for field in sentence.split(DELIMITER) {
        // overflowing fields are only counted
        let _ = fields.try_push(field);
        count += 1;
    }

    FieldSequence { fields, count }
}
