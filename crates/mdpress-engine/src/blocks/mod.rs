//! # Block Parsing
//!
//! Segments a document into block strings, classifies each into one of six
//! [`BlockType`]s, and renders every block to an [`crate::html::HtmlNode`].
//!
//! ## Modules
//!
//! - **`segment`**: blank-line segmentation of the whole document
//! - **`classify`**: [`BlockType`] and the priority-ordered line predicates
//! - **`render`**: per-type block rendering, invoking the inline parser

pub mod classify;
pub mod render;
pub mod segment;

pub use classify::{BlockType, classify_block};
pub use render::block_to_html_node;
pub use segment::split_blocks;
