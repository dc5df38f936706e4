//! # Inline Span Parsing
//!
//! Converts raw block text into an ordered sequence of typed [`Span`]s.
//!
//! ## Pipeline order
//!
//! Images, then links, then delimiter splitting for code (`` ` ``), bold
//! (`**`) and italic (`*`). Each pass only splits spans still classified as
//! [`SpanKind::Plain`]; anything already typed passes through untouched.
//! That rule gives the precedence Code > Bold > Italic and keeps a delimiter
//! inside, say, a code span from being split again.
//!
//! Splitting bold before italic means a `**bold**` run containing a literal
//! `*starred*` word stays one Bold span. That is intentional: the stars sit
//! inside an already-Bold span, which later passes never touch.
//!
//! ## Modules
//!
//! - **`span`**: [`Span`] and [`SpanKind`], plus span-to-leaf rendering
//! - **`extract`**: left-to-right `![alt](url)` / `[text](url)` extraction
//! - **`split`**: alternating plain/marked delimiter splitting
//! - **`parser`**: [`text_to_spans`] entry point wiring the passes together

pub mod extract;
pub mod parser;
pub mod span;
pub mod split;

pub use parser::text_to_spans;
pub use span::{Span, SpanKind};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter { delimiter: String, text: String },
    #[error("{kind:?} span has no url")]
    MissingUrl { kind: SpanKind },
}
