use std::collections::HashSet;

use super::types::Key;

/// Set of currently held keys for a single window.
///
/// Press and release are idempotent: OS auto-repeat delivers extra pressed
/// events for a held key, and a release for a key that was never tracked
/// (for example one pressed before focus) must not corrupt the set. Chord
/// matching only ever asks "is this key held right now".
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` as held. Returns true when the key was not already held.
    pub fn press(&mut self, key: Key) -> bool {
        self.held.insert(key)
    }

    /// Marks `key` as released. Returns true when the key was actually held.
    pub fn release(&mut self, key: Key) -> bool {
        self.held.remove(&key)
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drops every held key. Used on focus loss, where the matching release
    /// events would otherwise never arrive and keys would stay stuck down.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
