use std::sync::LazyLock;

use regex::Regex;

use super::{Span, SpanKind};

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

// Leading `!` is captured so an image that survived the image pass (or a
// stray `![`) is never misread as a link.
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Extracts `![alt](url)` images from every Plain span, left to right.
///
/// Plain text between matches becomes Plain spans; empty gaps are omitted.
/// Links and images never nest inside other spans.
pub fn split_spans_on_images(spans: Vec<Span>) -> Vec<Span> {
    split_plain_spans(spans, |text, out| {
        let mut last = 0;
        for caps in IMAGE_REGEX.captures_iter(text) {
            let m = caps.get(0).unwrap();
            push_plain(out, &text[last..m.start()]);
            out.push(Span::image(&caps[1], &caps[2]));
            last = m.end();
        }
        last
    })
}

/// Extracts `[text](url)` links from every Plain span, left to right.
///
/// A match preceded by `!` is image syntax and is left in place.
pub fn split_spans_on_links(spans: Vec<Span>) -> Vec<Span> {
    split_plain_spans(spans, |text, out| {
        let mut last = 0;
        for caps in LINK_REGEX.captures_iter(text) {
            if &caps[1] == "!" {
                continue;
            }
            let m = caps.get(0).unwrap();
            push_plain(out, &text[last..m.start()]);
            out.push(Span::link(&caps[2], &caps[3]));
            last = m.end();
        }
        last
    })
}

/// Runs `extract` over each Plain span, passing other spans through.
///
/// `extract` appends spans for everything before its returned offset; the
/// remainder becomes a trailing Plain span (omitted if empty).
fn split_plain_spans(
    spans: Vec<Span>,
    extract: impl Fn(&str, &mut Vec<Span>) -> usize,
) -> Vec<Span> {
    let mut out = Vec::new();
    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }
        let consumed = extract(&span.text, &mut out);
        push_plain(&mut out, &span.text[consumed..]);
    }
    out
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::new(text, SpanKind::Plain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> Span {
        Span::new(text, SpanKind::Plain)
    }

    #[test]
    fn extracts_single_image() {
        let spans = split_spans_on_images(vec![plain("![x](u)")]);
        assert_eq!(spans, vec![Span::image("x", "u")]);
    }

    #[test]
    fn extracts_image_with_surrounding_text() {
        let spans = split_spans_on_images(vec![plain("before ![alt](img.png) after")]);
        assert_eq!(
            spans,
            vec![
                plain("before "),
                Span::image("alt", "img.png"),
                plain(" after"),
            ]
        );
    }

    #[test]
    fn extracts_multiple_links_in_order() {
        let spans = split_spans_on_links(vec![plain("[a](1) mid [b](2)")]);
        assert_eq!(
            spans,
            vec![
                Span::link("a", "1"),
                plain(" mid "),
                Span::link("b", "2"),
            ]
        );
    }

    #[test]
    fn image_syntax_is_not_a_link() {
        let spans = split_spans_on_links(vec![plain("![x](u)")]);
        assert_eq!(spans, vec![plain("![x](u)")]);
    }

    #[test]
    fn image_pass_then_link_pass() {
        let spans = split_spans_on_images(vec![plain("![img](i.png) and [link](l.html)")]);
        let spans = split_spans_on_links(spans);
        assert_eq!(
            spans,
            vec![
                Span::image("img", "i.png"),
                plain(" and "),
                Span::link("link", "l.html"),
            ]
        );
    }

    #[test]
    fn no_match_leaves_span_alone() {
        let spans = split_spans_on_links(vec![plain("no links here")]);
        assert_eq!(spans, vec![plain("no links here")]);
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let code = Span::new("[not](split)", SpanKind::Code);
        let spans = split_spans_on_links(vec![code.clone()]);
        assert_eq!(spans, vec![code]);
    }

    #[test]
    fn adjacent_images_produce_no_empty_spans() {
        let spans = split_spans_on_images(vec![plain("![a](1)![b](2)")]);
        assert_eq!(spans, vec![Span::image("a", "1"), Span::image("b", "2")]);
    }
}
