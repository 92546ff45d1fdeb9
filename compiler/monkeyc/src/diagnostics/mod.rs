//! Source-annotated error reports.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use monkey_parse::ParseError;

/// Render each parse error as a report pointing into `source`.
///
/// `color` is off in tests so the output is stable.
pub fn render_parse_errors(path: &str, source: &str, errors: &[ParseError], color: bool) -> String {
    let mut out = Vec::new();
    for error in errors {
        let range = clamp(error.span.to_range(), source.len());
        let report = Report::build(ReportKind::Error, path, range.start)
            .with_config(Config::default().with_color(color))
            .with_message(&error.message)
            .with_label(Label::new((path, range)).with_message(&error.message))
            .finish();
        if report.write((path, Source::from(source)), &mut out).is_err() {
            // Fall back to the bare message.
            out.extend_from_slice(format!("error: {error}\n").as_bytes());
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Keep a span inside the source and at least one byte wide when the
/// source allows it. `Eof` errors point at the last byte.
fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let mut start = range.start.min(len);
    let mut end = range.end.clamp(start, len);
    if start == end {
        if end < len {
            end += 1;
        } else if start > 0 {
            start -= 1;
        }
    }
    start..end
}

#[cfg(test)]
mod tests;
