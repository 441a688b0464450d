//! Chord bindings: mapping held keys to transform deltas.
//!
//! A [`Chord`] is a disjunction of key combos; a [`KeyCombo`] is a
//! conjunction of keys. `ArrowLeft` alone, `ArrowLeft or A`, and
//! `Shift+ArrowLeft` are all chords. A [`Binding`] pairs a chord with the
//! [`TransformDelta`](crate::transform::TransformDelta) it drives, and a
//! [`BindingTable`] fixes the evaluation order.
//!
//! Resolution is additive: every binding whose chord matches fires, in table
//! order, each tick. Overlapping chords (say `ArrowLeft` in one binding and
//! `Shift+ArrowLeft` in another) deliberately stack; a table that wants
//! exclusive behavior simply avoids overlapping chords.

mod binding;
mod pattern;

pub mod resolve;

pub use binding::{Binding, BindingTable};
pub use pattern::{Chord, KeyCombo};
