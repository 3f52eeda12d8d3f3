//! # Block Parsing
//!
//! Line-oriented element parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Fence detection** (`builder`): a line whose trimmed start is a code
//!    fence opens a raw zone that swallows every line up to the closer (or
//!    EOF). Fences pre-empt every other interpretation.
//! 2. **Line Classification** (`classify`): every other line is classified
//!    by the ordered [`LINE_RULES`] list; the first match wins, paragraphs
//!    are the fallback.
//!
//! ## Modules
//!
//! - **`types`**: `DocumentElement` and `ElementKind`
//! - **`kinds`**: element-specific types with owned syntax (Heading,
//!   CodeFence, BlockQuote, list items, ...)
//! - **`classify`**: `LineRule` list and `MarkdownLineClassifier`
//! - **`builder`**: `ElementBuilder` single forward pass
//!
//! ## Key Invariants
//!
//! - Every input line belongs to exactly one element; none is dropped
//! - Element `raw_text` equals the source slice at `span`
//! - Joining `raw_text` with `\n` in position order reproduces the source

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::ElementBuilder;
pub use classify::{LINE_RULES, LineRule, MarkdownLineClassifier};
pub use types::{DocumentElement, ElementKind};
