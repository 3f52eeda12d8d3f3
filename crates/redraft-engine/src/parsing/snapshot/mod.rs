//! Parser inspection helpers shared by tests, benches and the `parse`
//! command.
//!
//! [`normalize`] flattens parsed elements into a [`Snap`] whose `Display`
//! form is one line per element, suitable for inline `insta` snapshots.
//! [`invariants`] panics unless positions run 0..n, spans tile the source
//! line by line and every `raw_text` equals its source slice.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
