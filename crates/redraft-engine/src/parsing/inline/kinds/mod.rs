//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`CodeSpan`**: `` TICK = b'`' `` - raw zone, replaced by a placeholder
//!   before rewriting
//! - **`Link`**: `[label](url)` - reduced to its label before rewriting
//!
//! The scanner calls these constants; it never hardcodes `` ` `` or `](`.

pub mod code_span;
pub mod link;

pub use code_span::CodeSpan;
pub use link::Link;
