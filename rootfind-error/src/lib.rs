//! The spanned error type shared by every fallible stage: parsing, lowering, and
//! differentiation. Each error knows which regions of the input expression it came from and how
//! to render itself as an [`ariadne`] report pointing back at them.

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color used to highlight pieces of the input expression inside a report.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// A kind of error, carrying everything needed to describe itself to the user.
///
/// Implementations are typically generated with `#[derive(ErrorKind)]` from the
/// `rootfind-attrs` crate.
pub trait ErrorKind: Debug + Send {
    /// Builds the user-facing report for this error, labeling the given spans of the source.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error tied to one or more regions of the input expression.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source that the error points at, in the order the kind's labels
    /// expect them.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates an error of the given kind pointing at the given spans.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self {
            spans,
            kind: Box::new(kind),
        }
    }

    /// Builds the report for this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report to a [`String`], given the source text that produced the error.
    /// Useful for consumers without a terminal attached (tests, web layers) that still want the
    /// full report text.
    pub fn render(&self, src_id: &str, src: &str) -> String {
        let mut out = Vec::new();
        // writing to a Vec cannot fail
        let _ = self
            .build_report(src_id)
            .write((src_id, Source::from(src)), &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadne::{Config, Label, ReportKind};

    /// A hand-written kind labeling each of its spans, standing in for the derived ones.
    #[derive(Debug)]
    struct BadToken;

    impl ErrorKind for BadToken {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            let start = spans.first().map_or(0, |span| span.start);
            let mut report = Report::build(ReportKind::Error, src_id, start)
                .with_config(Config::default().with_color(false))
                .with_message("bad token");
            for span in spans {
                report = report
                    .with_label(Label::new((src_id, span.clone())).with_message("not valid here"));
            }
            report.finish()
        }
    }

    #[test]
    fn render_includes_message_and_label() {
        let error = Error::new(vec![4..6], BadToken);
        let report = error.render("input", "x + $$ - 1");
        assert!(report.contains("bad token"), "{report}");
        assert!(report.contains("not valid here"), "{report}");
        assert!(report.contains("x + $$ - 1"), "{report}");
    }
}
