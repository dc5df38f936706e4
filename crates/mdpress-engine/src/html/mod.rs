//! # HTML Node Model
//!
//! A minimal tree of renderable HTML nodes. Leaves carry an optional tag and
//! text (a tagless leaf renders as raw text); parents carry a tag and a
//! non-empty list of children. Serialization walks the tree depth-first and
//! concatenates `<tag attrs>…</tag>` fragments.
//!
//! Equality is structural (derived), so tests compare trees directly instead
//! of comparing debug strings.
//!
//! Text content is emitted verbatim, without entity escaping.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("leaf node has no text")]
    MissingText,
    #[error("parent node <{tag}> has no children")]
    NoChildren { tag: String },
}

/// Attribute list preserving insertion order; emitted as ` key="value"` pairs.
pub type Attrs = Vec<(String, String)>;

/// A node in the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A terminal element: tagged inline element, or raw text when `tag` is
    /// `None`.
    Leaf {
        tag: Option<String>,
        text: Option<String>,
        attrs: Attrs,
    },
    /// A structural container. Must have at least one child to render.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// A tagless leaf rendering as raw text.
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            text: Some(text.into()),
            attrs: vec![],
        }
    }

    /// A tagged leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            text: Some(text.into()),
            attrs: vec![],
        }
    }

    /// A tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        text: impl Into<String>,
        attrs: Attrs,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            text: Some(text.into()),
            attrs,
        }
    }

    /// A container node owning its children.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: vec![],
        }
    }

    /// Serializes the subtree rooted at this node to an HTML string.
    ///
    /// Fails on a leaf with no text or a parent with no children.
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf { tag, text, attrs } => {
                let text = text.as_ref().ok_or(RenderError::MissingText)?;
                match tag {
                    None => Ok(text.clone()),
                    Some(tag) => Ok(format!(
                        "<{tag}{}>{text}</{tag}>",
                        attrs_to_html(attrs)
                    )),
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if children.is_empty() {
                    return Err(RenderError::NoChildren { tag: tag.clone() });
                }
                let mut html = format!("<{tag}{}>", attrs_to_html(attrs));
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str(&format!("</{tag}>"));
                Ok(html)
            }
        }
    }
}

fn attrs_to_html(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
