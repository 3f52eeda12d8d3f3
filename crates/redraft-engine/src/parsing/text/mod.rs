//! Byte-span bookkeeping over the source string: line iteration with spans
//! and the [`Span`] type every element carries.

pub mod lines;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use span::Span;
