use crate::html::HtmlNode;
use crate::inline::{ParseError, Span, SpanKind, text_to_spans};

use super::classify::{BlockType, classify_block, heading_level, ordered_prefix};

/// Renders one classified block string to an [`HtmlNode`].
pub fn block_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    match classify_block(block) {
        BlockType::Paragraph => paragraph_node(block),
        BlockType::Heading(level) => heading_node(block, level),
        BlockType::Code => code_node(block),
        BlockType::Quote => quote_node(block),
        BlockType::UnorderedList => unordered_list_node(block),
        BlockType::OrderedList => ordered_list_node(block),
    }
}

/// Inline-parses text and renders the spans to leaf nodes.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    text_to_spans(text)?
        .iter()
        .map(Span::to_html_node)
        .collect()
}

fn paragraph_node(block: &str) -> Result<HtmlNode, ParseError> {
    Ok(HtmlNode::parent("p", inline_children(block)?))
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, ParseError> {
    debug_assert_eq!(heading_level(block), Some(level));
    // Strip the `#`s and the single following space.
    let text = &block[level as usize + 1..];
    Ok(HtmlNode::parent(
        format!("h{level}"),
        inline_children(text)?,
    ))
}

/// The fenced interior becomes a single Code span: no bold/italic/link
/// parsing happens inside a code block.
fn code_node(block: &str) -> Result<HtmlNode, ParseError> {
    let interior = &block[3..block.len() - 3];
    let code = Span::new(interior, SpanKind::Code).to_html_node()?;
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .lines()
        .map(strip_quote_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

/// Strips the leading `>` and at most one following space.
fn strip_quote_prefix(line: &str) -> &str {
    let rest = line.strip_prefix('>').unwrap_or(line);
    rest.strip_prefix(' ').unwrap_or(rest)
}

fn unordered_list_node(block: &str) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| list_item_node(&line[2..]))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_node(block: &str) -> Result<HtmlNode, ParseError> {
    let items = block
        .lines()
        .map(|line| {
            debug_assert!(ordered_prefix(line).is_some());
            let text = line.split_once(". ").map(|(_, rest)| rest).unwrap_or(line);
            list_item_node(text)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("ol", items))
}

/// Each list line is inline-parsed independently.
fn list_item_node(text: &str) -> Result<HtmlNode, ParseError> {
    Ok(HtmlNode::parent("li", inline_children(text)?))
}
