//! Chord resolution: which bindings fire for the current held keys.
//!
//! Resolution is a pure read. It never consumes keys and never mutates the
//! table, so resolving twice against the same state yields the same bindings.
//! The scheduler calls this once per tick; the runtime calls it (through
//! [`BindingTable::fires`]) on key-down to decide event suppression.

use super::binding::{Binding, BindingTable};
use crate::input::KeyState;

/// Iterates the bindings whose chords match `held`, in table order.
///
/// Every match fires; overlapping chords stack rather than shadow each other.
pub fn firing<'t>(
    table: &'t BindingTable,
    held: &'t KeyState,
) -> impl Iterator<Item = &'t Binding> + 't {
    table.iter().filter(move |binding| binding.chord().matches(held))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{Binding, Chord};
    use crate::input::Key;
    use crate::transform::TransformDelta;

    fn table() -> BindingTable {
        BindingTable::new(vec![
            Binding::new(
                "Move left",
                Chord::key(Key::ArrowLeft),
                TransformDelta::translate(-0.01, 0.0),
            ),
            Binding::new(
                "Rotate",
                Chord::combo([Key::Shift, Key::ArrowLeft]),
                TransformDelta::rotate(0.02),
            ),
            Binding::new(
                "Move up",
                Chord::key(Key::ArrowUp),
                TransformDelta::translate(0.0, 0.01),
            ),
        ])
    }

    fn held(keys: &[Key]) -> KeyState {
        let mut state = KeyState::new();
        for k in keys {
            state.press(*k);
        }
        state
    }

    fn labels<'t>(table: &'t BindingTable, held: &'t KeyState) -> Vec<&'t str> {
        firing(table, held).map(Binding::label).collect()
    }

    #[test]
    fn no_held_keys_fires_nothing() {
        let table = table();
        let held = held(&[]);
        assert!(labels(&table, &held).is_empty());
    }

    #[test]
    fn single_match_fires_alone() {
        let table = table();
        let held = held(&[Key::ArrowUp]);
        assert_eq!(labels(&table, &held), ["Move up"]);
    }

    #[test]
    fn overlapping_chords_both_fire_in_table_order() {
        // Shift+ArrowLeft satisfies both the bare-arrow chord and the
        // shifted chord. Both fire; declaration order decides sequence.
        let table = table();
        let held = held(&[Key::Shift, Key::ArrowLeft]);
        assert_eq!(labels(&table, &held), ["Move left", "Rotate"]);
    }

    #[test]
    fn resolution_is_repeatable() {
        let table = table();
        let held = held(&[Key::Shift, Key::ArrowLeft]);
        assert_eq!(labels(&table, &held), labels(&table, &held));
    }

    #[test]
    fn disjoint_matches_fire_together() {
        let table = table();
        let held = held(&[Key::ArrowLeft, Key::ArrowUp]);
        assert_eq!(labels(&table, &held), ["Move left", "Move up"]);
    }
}
