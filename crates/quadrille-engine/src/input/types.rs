use std::fmt;

/// Keyboard key identifier.
///
/// Covers the keys a binding table can reasonably refer to. The runtime maps
/// platform keycodes into these variants where possible; anything else comes
/// through as `Key::Unknown(u32)` with a stable platform code and simply never
/// matches a chord.
///
/// Left/right modifier pairs are collapsed on purpose: a chord like
/// `Shift+ArrowLeft` should fire for either shift key.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as plain keys; chords treat them like any other key.
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits (top row)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Numpad digits; distinct from the top row so tables can bind them
    // separately.
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,

    Semicolon,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

/// Edge direction of a key event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyPhase {
    Pressed,
    Released,
}

/// Platform-agnostic key event emitted by the runtime.
///
/// `repeat` marks OS auto-repeat. Held-key tracking is idempotent, so repeats
/// are indistinguishable from the first press as far as chords are concerned;
/// the flag exists for logging and for frontends that care.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub phase: KeyPhase,
    pub repeat: bool,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
