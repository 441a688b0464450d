use std::fmt;

use crate::input::{Key, KeyState};

/// Conjunction of keys: satisfied while every listed key is held.
///
/// An empty combo is never satisfied. That keeps `all(some_empty_source)`
/// harmless instead of turning it into a binding that fires on every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    keys: Vec<Key>,
}

impl KeyCombo {
    /// Combo over a single key.
    pub fn single(key: Key) -> Self {
        Self { keys: vec![key] }
    }

    /// Combo over every key in `keys`; all must be held at once.
    pub fn all<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn is_satisfied(&self, held: &KeyState) -> bool {
        !self.keys.is_empty() && self.keys.iter().all(|k| held.is_held(*k))
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, "+")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

/// Disjunction of combos: matches while any one combo is satisfied.
///
/// A chord with no combos never matches, same as the empty combo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    combos: Vec<KeyCombo>,
}

impl Chord {
    /// Chord over a single key.
    pub fn key(key: Key) -> Self {
        Self {
            combos: vec![KeyCombo::single(key)],
        }
    }

    /// Chord matching either of two keys. The common "arrow or letter" case.
    pub fn either(a: Key, b: Key) -> Self {
        Self {
            combos: vec![KeyCombo::single(a), KeyCombo::single(b)],
        }
    }

    /// Chord over a single multi-key combo, e.g. `Shift+ArrowLeft`.
    pub fn combo<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        Self {
            combos: vec![KeyCombo::all(keys)],
        }
    }

    /// Chord over arbitrary alternatives.
    pub fn any<I>(combos: I) -> Self
    where
        I: IntoIterator<Item = KeyCombo>,
    {
        Self {
            combos: combos.into_iter().collect(),
        }
    }

    pub fn combos(&self) -> &[KeyCombo] {
        &self.combos
    }

    /// True while at least one combo is fully held.
    ///
    /// Extra held keys beyond a combo are ignored; combos state which keys
    /// must be down, not which must be up.
    pub fn matches(&self, held: &KeyState) -> bool {
        self.combos.iter().any(|c| c.is_satisfied(held))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, combo) in self.combos.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{combo}")?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[Key]) -> KeyState {
        let mut state = KeyState::new();
        for k in keys {
            state.press(*k);
        }
        state
    }

    // ── combo satisfaction ────────────────────────────────────────────────

    #[test]
    fn single_key_combo() {
        let combo = KeyCombo::single(Key::ArrowLeft);
        assert!(combo.is_satisfied(&held(&[Key::ArrowLeft])));
        assert!(!combo.is_satisfied(&held(&[Key::ArrowRight])));
        assert!(!combo.is_satisfied(&held(&[])));
    }

    #[test]
    fn multi_key_combo_requires_all() {
        let combo = KeyCombo::all([Key::Shift, Key::ArrowLeft]);
        assert!(!combo.is_satisfied(&held(&[Key::Shift])));
        assert!(!combo.is_satisfied(&held(&[Key::ArrowLeft])));
        assert!(combo.is_satisfied(&held(&[Key::Shift, Key::ArrowLeft])));
    }

    #[test]
    fn empty_combo_never_satisfied() {
        let combo = KeyCombo::all([]);
        assert!(!combo.is_satisfied(&held(&[])));
        assert!(!combo.is_satisfied(&held(&[Key::A, Key::B])));
    }

    // ── chord matching ────────────────────────────────────────────────────

    #[test]
    fn chord_matches_on_first_alternative() {
        // [A, [B, C]]: A alone fires it.
        let chord = Chord::any([KeyCombo::single(Key::A), KeyCombo::all([Key::B, Key::C])]);
        assert!(chord.matches(&held(&[Key::A])));
    }

    #[test]
    fn chord_matches_on_complete_combo() {
        let chord = Chord::any([KeyCombo::single(Key::A), KeyCombo::all([Key::B, Key::C])]);
        assert!(chord.matches(&held(&[Key::B, Key::C])));
    }

    #[test]
    fn chord_rejects_partial_combo() {
        // B alone satisfies neither alternative.
        let chord = Chord::any([KeyCombo::single(Key::A), KeyCombo::all([Key::B, Key::C])]);
        assert!(!chord.matches(&held(&[Key::B])));
    }

    #[test]
    fn chord_ignores_extra_held_keys() {
        let chord = Chord::key(Key::ArrowUp);
        assert!(chord.matches(&held(&[Key::ArrowUp, Key::Shift, Key::Z])));
    }

    #[test]
    fn either_matches_both_alternatives() {
        let chord = Chord::either(Key::ArrowLeft, Key::A);
        assert!(chord.matches(&held(&[Key::ArrowLeft])));
        assert!(chord.matches(&held(&[Key::A])));
        assert!(!chord.matches(&held(&[Key::D])));
    }

    #[test]
    fn empty_chord_never_matches() {
        let chord = Chord::any([]);
        assert!(!chord.matches(&held(&[])));
        assert!(!chord.matches(&held(&[Key::A])));
    }

    #[test]
    fn chord_with_only_empty_combo_never_matches() {
        let chord = Chord::any([KeyCombo::all([])]);
        assert!(!chord.matches(&held(&[Key::A])));
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn display_joins_combos_and_keys() {
        let chord = Chord::any([
            KeyCombo::all([Key::Shift, Key::ArrowLeft]),
            KeyCombo::single(Key::A),
        ]);
        assert_eq!(chord.to_string(), "Shift+ArrowLeft | A");
    }
}
