use crate::html::HtmlNode;

use super::ParseError;

/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed run of inline text.
///
/// `url` is set iff `kind` is [`SpanKind::Link`] or [`SpanKind::Image`];
/// rendering a link or image span without one fails with
/// [`ParseError::MissingUrl`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl Span {
    /// A span with no url (anything but a link or image).
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    /// Renders this span to a leaf [`HtmlNode`].
    pub fn to_html_node(&self) -> Result<HtmlNode, ParseError> {
        match self.kind {
            SpanKind::Plain => Ok(HtmlNode::text(&self.text)),
            SpanKind::Bold => Ok(HtmlNode::leaf("b", &self.text)),
            SpanKind::Italic => Ok(HtmlNode::leaf("i", &self.text)),
            SpanKind::Code => Ok(HtmlNode::leaf("code", &self.text)),
            SpanKind::Link => {
                let url = self.require_url()?;
                Ok(HtmlNode::leaf_with_attrs(
                    "a",
                    &self.text,
                    vec![("href".to_string(), url.clone())],
                ))
            }
            SpanKind::Image => {
                let url = self.require_url()?;
                Ok(HtmlNode::leaf_with_attrs(
                    "img",
                    "",
                    vec![
                        ("src".to_string(), url.clone()),
                        ("alt".to_string(), self.text.clone()),
                    ],
                ))
            }
        }
    }

    fn require_url(&self) -> Result<&String, ParseError> {
        self.url
            .as_ref()
            .ok_or(ParseError::MissingUrl { kind: self.kind })
    }
}
