//! Document-level entry points: full-document rendering and title
//! extraction.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::blocks::{block_to_html_node, split_blocks};
use crate::html::{HtmlNode, RenderError};
use crate::inline::ParseError;

/// Any failure while converting one document. Errors abort the whole
/// conversion; no partial HTML is ever produced.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("no level-1 heading to use as the title")]
    MissingTitle,
    #[error("expected exactly one level-1 heading, found {count}")]
    AmbiguousTitle { count: usize },
}

// Title scan is line-based over the raw document, independent of block
// segmentation. A `# ` line inside a multi-line block still counts here
// even though the block classifier would not call that block a Heading.
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)").unwrap());

/// Converts a whole markdown document to an HTML string wrapped in a single
/// outer `<div>`.
pub fn render_document(markdown: &str) -> Result<String, ConvertError> {
    let children = split_blocks(markdown)
        .iter()
        .map(|block| block_to_html_node(block))
        .collect::<Result<Vec<_>, _>>()?;
    let root = HtmlNode::parent("div", children);
    Ok(root.to_html()?)
}

/// Returns the text of the document's unique level-1 heading line.
///
/// Fails if the document has no `# ` line or more than one.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    let mut titles = TITLE_REGEX
        .captures_iter(markdown)
        .map(|caps| caps[1].to_string());
    let first = titles.next().ok_or(ConvertError::MissingTitle)?;
    let extra = titles.count();
    if extra > 0 {
        return Err(ConvertError::AmbiguousTitle { count: extra + 1 });
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_every_block_type() {
        let markdown = "Paragraph\n\n* Unorder\n- Unorder\n\n1. Order\n2. Order\n\n\
                        ```Code```\n\n> Quote\n>Quote\n\n**Bold**\n\n# Header";
        let html = render_document(markdown).unwrap();
        assert_eq!(
            html,
            "<div><p>Paragraph</p><ul><li>Unorder</li><li>Unorder</li></ul>\
             <ol><li>Order</li><li>Order</li></ol><pre><code>Code</code></pre>\
             <blockquote>Quote\nQuote</blockquote><p><b>Bold</b></p><h1>Header</h1></div>"
        );
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(
            render_document("hello *there*").unwrap(),
            "<div><p>hello <i>there</i></p></div>"
        );
    }

    #[test]
    fn empty_document_fails_to_render() {
        assert_eq!(
            render_document(""),
            Err(ConvertError::Render(RenderError::NoChildren {
                tag: "div".to_string()
            }))
        );
    }

    #[test]
    fn parse_error_aborts_whole_document() {
        let result = render_document("fine paragraph\n\nbroken *paragraph");
        assert!(matches!(result, Err(ConvertError::Parse(_))));
    }

    #[test]
    fn output_tags_are_balanced() {
        let html = render_document(
            "# Title\n\n> q\n\n1. a\n2. b\n\n```x```\n\npara with `code` and **bold**",
        )
        .unwrap();
        for tag in ["div", "h1", "blockquote", "ol", "li", "pre", "code", "p", "b"] {
            let opens = html.matches(&format!("<{tag}>")).count();
            let closes = html.matches(&format!("</{tag}>")).count();
            assert_eq!(opens, closes, "unbalanced <{tag}>");
        }
    }

    #[test]
    fn extracts_unique_title() {
        assert_eq!(extract_title("# Test\n## Test").unwrap(), "Test");
    }

    #[test]
    fn title_line_may_appear_anywhere() {
        assert_eq!(extract_title("intro\n# Late Title\noutro").unwrap(), "Late Title");
    }

    #[test]
    fn missing_title_fails() {
        assert_eq!(extract_title("## Test\nTest"), Err(ConvertError::MissingTitle));
    }

    #[test]
    fn duplicate_title_fails() {
        assert_eq!(
            extract_title("# Test\n# Test"),
            Err(ConvertError::AmbiguousTitle { count: 2 })
        );
    }
}
