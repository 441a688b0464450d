use std::fmt;
use std::slice;

use super::pattern::Chord;
use super::resolve;
use crate::input::KeyState;
use crate::transform::TransformDelta;

/// One row of a binding table: a labeled chord driving a transform delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    label: String,
    chord: Chord,
    delta: TransformDelta,
}

impl Binding {
    pub fn new(label: impl Into<String>, chord: Chord, delta: TransformDelta) -> Self {
        Self {
            label: label.into(),
            chord,
            delta,
        }
    }

    /// Human-readable action name, e.g. `"Move left"`. Purely descriptive;
    /// labels carry no identity and need not be unique.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn chord(&self) -> &Chord {
        &self.chord
    }

    pub fn delta(&self) -> TransformDelta {
        self.delta
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.label, self.chord)
    }
}

/// Ordered, immutable set of bindings.
///
/// Table order is the resolution order: deltas apply in the order bindings
/// were declared. The table is fixed at construction; there is no add or
/// remove, a frontend builds a new table instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, Binding> {
        self.bindings.iter()
    }

    /// True when at least one binding matches the held keys. This is the
    /// suppression question a runtime asks on key-down: does this press
    /// participate in any chord right now.
    pub fn fires(&self, held: &KeyState) -> bool {
        resolve::firing(self, held).next().is_some()
    }
}

impl<'a> IntoIterator for &'a BindingTable {
    type Item = &'a Binding;
    type IntoIter = slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn table() -> BindingTable {
        BindingTable::new(vec![
            Binding::new(
                "Move left",
                Chord::either(Key::ArrowLeft, Key::A),
                TransformDelta::translate(-0.01, 0.0),
            ),
            Binding::new(
                "Rotate",
                Chord::combo([Key::Shift, Key::ArrowLeft]),
                TransformDelta::rotate(0.02),
            ),
        ])
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let table = table();
        let labels: Vec<&str> = table.iter().map(Binding::label).collect();
        assert_eq!(labels, ["Move left", "Rotate"]);
    }

    #[test]
    fn fires_when_any_chord_matches() {
        let mut held = KeyState::new();
        assert!(!table().fires(&held));

        held.press(Key::A);
        assert!(table().fires(&held));
    }

    #[test]
    fn fires_is_false_for_unbound_keys() {
        let mut held = KeyState::new();
        held.press(Key::Z);
        assert!(!table().fires(&held));
    }

    #[test]
    fn empty_table_never_fires() {
        let mut held = KeyState::new();
        held.press(Key::A);
        assert!(!BindingTable::default().fires(&held));
    }

    #[test]
    fn display_shows_label_and_chord() {
        let binding = Binding::new(
            "Move left",
            Chord::either(Key::ArrowLeft, Key::A),
            TransformDelta::translate(-0.01, 0.0),
        );
        assert_eq!(binding.to_string(), "Move left [ArrowLeft | A]");
    }
}
