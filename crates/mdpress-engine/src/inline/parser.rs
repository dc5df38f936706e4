use super::{
    ParseError, Span, SpanKind,
    extract::{split_spans_on_images, split_spans_on_links},
    split::split_spans_on_delimiter,
};

pub const CODE_DELIMITER: &str = "`";
pub const BOLD_DELIMITER: &str = "**";
pub const ITALIC_DELIMITER: &str = "*";

/// Parses raw text into an ordered sequence of [`Span`]s.
///
/// Passes run in a fixed order: images, links, code, bold, italic. Bold must
/// run before italic so `**` is never consumed as two italic stars.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ParseError> {
    let spans = vec![Span::new(text, SpanKind::Plain)];
    let spans = split_spans_on_images(spans);
    let spans = split_spans_on_links(spans);
    let spans = split_spans_on_delimiter(spans, CODE_DELIMITER, SpanKind::Code)?;
    let spans = split_spans_on_delimiter(spans, BOLD_DELIMITER, SpanKind::Bold)?;
    split_spans_on_delimiter(spans, ITALIC_DELIMITER, SpanKind::Italic)
}
