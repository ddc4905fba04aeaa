pub mod kind;

use ariadne::Report;
use rootfind_error::ErrorKind;
use std::ops::Range;

/// A parse error, tied to the regions of the source that caused it.
///
/// Unlike the shared [`rootfind_error::Error`], a parse error carries a fatality flag: the
/// parser speculatively tries several interpretations of the input, and most failures just mean
/// the next interpretation should be tried. A fatal error means the input is definitely
/// malformed (an unclosed parenthesis, for example) and no alternative could succeed, so the
/// parser stops immediately and reports it.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source that the error points at.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the parser should give up instead of backtracking.
    pub fatal: bool,
}

impl Error {
    /// Creates a non-fatal error: the parser may backtrack and try something else.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: false,
        }
    }

    /// Creates a fatal error: the input cannot parse under any interpretation.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
            fatal: true,
        }
    }

    /// Builds the report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl From<Error> for rootfind_error::Error {
    fn from(err: Error) -> Self {
        Self {
            spans: err.spans,
            kind: err.kind,
        }
    }
}
