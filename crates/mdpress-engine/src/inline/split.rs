use super::{ParseError, Span, SpanKind};

/// Splits every Plain span on a literal delimiter, alternating plain and
/// marked pieces.
///
/// Pieces at even indices (0, 2, 4, …) stay Plain, odd indices become
/// `kind`. An even piece count means an unclosed delimiter somewhere in the
/// text, which is a fatal input error. Empty pieces (consecutive delimiters,
/// or a delimiter at the start or end of the text) are dropped, never
/// emitted as empty spans.
///
/// Non-Plain spans pass through unchanged.
pub fn split_spans_on_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            // An even piece count means an odd number of delimiters.
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }
        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(Span::new(piece, piece_kind));
        }
    }
    Ok(out)
}
