pub mod blocks;
pub mod document;
pub mod html;
pub mod inline;

// Re-export key types for easier usage
pub use document::{ConvertError, extract_title, render_document};
pub use html::{HtmlNode, RenderError};
pub use inline::{ParseError, Span, SpanKind, text_to_spans};
