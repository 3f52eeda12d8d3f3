//! # Inline Preservation
//!
//! Cursor-based inline scanning with explicit raw zones, plus the reversible
//! ledger that protects inline constructs from a rewriter.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Text, CodeSpan, Link)
//! - **`kinds`**: inline-specific types with owned delimiters (CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` with a precedence-ordered construct list
//! - **`preserve`**: `preserve()` / `restore()` and the `Ledger`
//!
//! ## Raw Zone Precedence
//!
//! Code spans are extracted in a pass of their own before links are looked
//! at, so `` [`x`](u) `` keeps its code span and `` `[a](b)` `` is never
//! treated as a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod preserve;
pub mod types;

pub use parser::parse_inline;
pub use preserve::{Ledger, PreservedKind, PreservedSpan, Restored, preserve, restore};
pub use types::{InlineConstruct, InlineNode};
