//! # Block Kinds
//!
//! Element-specific types that own their line syntax. Classifier and
//! reassembler code calls into these; it never hardcodes `#`, `>` or list
//! markers itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod link_definition;
pub mod list_item;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use link_definition::LinkDefinition;
pub use list_item::{OrderedItem, UnorderedItem};
pub use thematic_break::ThematicBreak;

use regex::Regex;
use std::sync::OnceLock;

/// Returns the regex stored in `cell`, compiling `pattern` on first use.
pub(crate) fn cached_regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid line rule regex"))
}
