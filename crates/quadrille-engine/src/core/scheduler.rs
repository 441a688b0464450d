use crate::chord::{BindingTable, resolve};
use crate::input::{KeyEvent, KeyPhase, KeyState};
use crate::transform::{Transform2d, TransformState};

/// Scheduler lifecycle phase.
///
/// Idle means "no tick has run yet"; the first tick moves to Running and
/// there is no way back except [`FrameScheduler::focus_lost`]-style state
/// resets, which do not change phase. There is no terminal phase; the
/// scheduler lives as long as the event loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SchedulerPhase {
    Idle,
    Running,
}

/// Per-frame transform state machine.
///
/// Owns the three pieces of mutable frame state: the held-key set, the
/// binding table and the transform accumulator. The runtime feeds key events
/// in between ticks and calls [`tick`](Self::tick) once per redraw; nothing
/// else mutates any of it. The scheduler knows nothing about windows or the
/// GPU, so every frame-pipeline property tests headless.
#[derive(Debug)]
pub struct FrameScheduler {
    bindings: BindingTable,
    keys: KeyState,
    transform: TransformState,
    phase: SchedulerPhase,
    ticks: u64,
}

impl FrameScheduler {
    pub fn new(bindings: BindingTable, initial_transform: TransformState) -> Self {
        Self {
            bindings,
            keys: KeyState::new(),
            transform: initial_transform,
            phase: SchedulerPhase::Idle,
            ticks: 0,
        }
    }

    /// Applies one key event and reports the suppression decision.
    ///
    /// For a press the return value answers "does this key participate in
    /// any chord right now": true iff at least one binding fires against the
    /// post-press key set. The runtime should treat an unconsumed press as
    /// free for platform default handling. Releases always return false;
    /// releasing is never an action of its own.
    pub fn key_event(&mut self, event: KeyEvent) -> bool {
        match event.phase {
            KeyPhase::Pressed => {
                self.keys.press(event.key);
                self.bindings.fires(&self.keys)
            }
            KeyPhase::Released => {
                self.keys.release(event.key);
                false
            }
        }
    }

    /// Drops all held keys. Called on window focus loss, where release
    /// events for currently-held keys will never arrive.
    pub fn focus_lost(&mut self) {
        self.keys.clear();
    }

    /// Runs one tick: every firing binding applies its delta, in table
    /// order, exactly once; returns the post-tick snapshot.
    ///
    /// With no keys held (or no matches) the transform simply carries over
    /// unchanged. A binding held across n ticks contributes exactly n
    /// increments; there is no per-tick dedup beyond the one-pass rule
    /// because resolution happens freshly against the current key set.
    pub fn tick(&mut self) -> Transform2d {
        self.phase = SchedulerPhase::Running;

        for binding in resolve::firing(&self.bindings, &self.keys) {
            binding.delta().apply(&mut self.transform);
        }

        self.ticks += 1;
        self.transform.snapshot()
    }

    // ── reads ─────────────────────────────────────────────────────────────

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SchedulerPhase::Running
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{Binding, Chord};
    use crate::coords::Vec2;
    use crate::input::Key;
    use crate::transform::TransformDelta;
    use std::f32::consts::PI;

    const STEP: f32 = 0.015;
    const ROT_STEP: f32 = 0.0175;

    fn press(key: Key) -> KeyEvent {
        KeyEvent {
            key,
            phase: KeyPhase::Pressed,
            repeat: false,
        }
    }

    fn release(key: Key) -> KeyEvent {
        KeyEvent {
            key,
            phase: KeyPhase::Released,
            repeat: false,
        }
    }

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} !~ {b}");
    }

    /// One left-translate binding, the minimal table.
    fn left_only() -> FrameScheduler {
        let table = BindingTable::new(vec![Binding::new(
            "Move left",
            Chord::key(Key::ArrowLeft),
            TransformDelta::translate(-STEP, 0.0),
        )]);
        FrameScheduler::new(table, TransformState::identity())
    }

    /// Overlapping chords: bare arrow translates, shifted arrow rotates.
    fn overlapping() -> FrameScheduler {
        let table = BindingTable::new(vec![
            Binding::new(
                "Move left",
                Chord::key(Key::ArrowLeft),
                TransformDelta::translate(-STEP, 0.0),
            ),
            Binding::new(
                "Rotate",
                Chord::combo([Key::Shift, Key::ArrowLeft]),
                TransformDelta::rotate(ROT_STEP),
            ),
        ]);
        FrameScheduler::new(table, TransformState::identity())
    }

    // ── phase ─────────────────────────────────────────────────────────────

    #[test]
    fn starts_idle_and_runs_after_first_tick() {
        let mut sched = left_only();
        assert_eq!(sched.phase(), SchedulerPhase::Idle);
        assert!(!sched.is_running());
        assert_eq!(sched.ticks(), 0);

        sched.tick();
        assert_eq!(sched.phase(), SchedulerPhase::Running);
        assert_eq!(sched.ticks(), 1);
    }

    // ── per-tick application ──────────────────────────────────────────────

    #[test]
    fn held_key_moves_once_per_tick() {
        let mut sched = left_only();
        sched.key_event(press(Key::ArrowLeft));

        let snap = sched.tick();
        approx(snap.translation.x, -STEP);

        // Three more ticks: exactly four steps total, no double-application.
        sched.tick();
        sched.tick();
        let snap = sched.tick();
        approx(snap.translation.x, -4.0 * STEP);
    }

    #[test]
    fn tick_without_held_keys_is_carryover() {
        let mut sched = left_only();
        let a = sched.tick();
        let b = sched.tick();
        assert_eq!(a, b);
        assert_eq!(a, Transform2d::IDENTITY);
    }

    #[test]
    fn release_stops_application() {
        let mut sched = left_only();
        sched.key_event(press(Key::ArrowLeft));
        sched.tick();
        sched.key_event(release(Key::ArrowLeft));

        let before = sched.transform().snapshot();
        let after = sched.tick();
        assert_eq!(before, after);
    }

    #[test]
    fn key_repeat_does_not_double_apply() {
        let mut sched = left_only();
        sched.key_event(press(Key::ArrowLeft));
        // OS auto-repeat between ticks.
        sched.key_event(KeyEvent {
            key: Key::ArrowLeft,
            phase: KeyPhase::Pressed,
            repeat: true,
        });
        sched.key_event(press(Key::ArrowLeft));

        let snap = sched.tick();
        approx(snap.translation.x, -STEP);
    }

    // ── overlap (additive) ────────────────────────────────────────────────

    #[test]
    fn overlapping_chords_apply_both_deltas() {
        let mut sched = overlapping();
        sched.key_event(press(Key::Shift));
        sched.key_event(press(Key::ArrowLeft));

        let snap = sched.tick();
        approx(snap.translation.x, -STEP);
        approx(snap.rotation, ROT_STEP);
    }

    #[test]
    fn bare_key_fires_only_bare_binding() {
        let mut sched = overlapping();
        sched.key_event(press(Key::ArrowLeft));

        let snap = sched.tick();
        approx(snap.translation.x, -STEP);
        approx(snap.rotation, 0.0);
    }

    #[test]
    fn same_field_bindings_stack_in_table_order() {
        let table = BindingTable::new(vec![
            Binding::new(
                "Nudge",
                Chord::key(Key::Space),
                TransformDelta::translate(0.01, 0.0),
            ),
            Binding::new(
                "Nudge more",
                Chord::key(Key::Space),
                TransformDelta::translate(0.02, 0.0),
            ),
        ]);
        let mut sched = FrameScheduler::new(table, TransformState::identity());
        sched.key_event(press(Key::Space));

        let snap = sched.tick();
        approx(snap.translation.x, 0.03);
    }

    // ── suppression decision ──────────────────────────────────────────────

    #[test]
    fn bound_press_is_consumed() {
        let mut sched = left_only();
        assert!(sched.key_event(press(Key::ArrowLeft)));
    }

    #[test]
    fn unbound_press_is_not_consumed() {
        let mut sched = left_only();
        assert!(!sched.key_event(press(Key::Escape)));
        assert!(!sched.key_event(press(Key::Z)));
    }

    #[test]
    fn releases_are_never_consumed() {
        let mut sched = left_only();
        sched.key_event(press(Key::ArrowLeft));
        assert!(!sched.key_event(release(Key::ArrowLeft)));
    }

    #[test]
    fn modifier_press_completing_a_combo_is_consumed() {
        let mut sched = overlapping();
        sched.key_event(press(Key::ArrowLeft));
        // Shift lands second; the post-press set satisfies Shift+ArrowLeft
        // (and still the bare arrow), so the press is consumed.
        assert!(sched.key_event(press(Key::Shift)));
    }

    #[test]
    fn modifier_alone_is_not_consumed() {
        let mut sched = overlapping();
        assert!(!sched.key_event(press(Key::Shift)));
    }

    // ── focus loss ────────────────────────────────────────────────────────

    #[test]
    fn focus_lost_clears_held_keys() {
        let mut sched = left_only();
        sched.key_event(press(Key::ArrowLeft));
        sched.focus_lost();

        assert!(sched.keys().is_empty());
        let before = sched.transform().snapshot();
        assert_eq!(sched.tick(), before);
    }

    // ── end-to-end rotation ───────────────────────────────────────────────

    #[test]
    fn four_rotation_ticks_from_pi() {
        let table = BindingTable::new(vec![Binding::new(
            "Rotate counter-clockwise",
            Chord::either(Key::E, Key::O),
            TransformDelta::rotate(ROT_STEP),
        )]);
        let initial = TransformState::new(Vec2::new(0.5, 0.5), PI, 1.0, Vec2::zero());
        let mut sched = FrameScheduler::new(table, initial);

        sched.key_event(press(Key::E));
        for _ in 0..4 {
            sched.tick();
        }
        approx(sched.transform().rotation(), PI + 0.07);

        sched.key_event(release(Key::E));
        sched.tick();
        sched.tick();
        approx(sched.transform().rotation(), PI + 0.07);
    }

    // ── drift is unclamped ────────────────────────────────────────────────

    #[test]
    fn rotation_accumulates_past_full_turn() {
        let table = BindingTable::new(vec![Binding::new(
            "Rotate",
            Chord::key(Key::E),
            TransformDelta::rotate(ROT_STEP),
        )]);
        let mut sched = FrameScheduler::new(table, TransformState::identity());
        sched.key_event(press(Key::E));

        for _ in 0..1000 {
            sched.tick();
        }
        approx(sched.transform().rotation(), 17.5);
    }

    #[test]
    fn scale_crosses_zero_under_sustained_decrease() {
        let table = BindingTable::new(vec![Binding::new(
            "Scale down",
            Chord::key(Key::F),
            TransformDelta::scale(-STEP),
        )]);
        let mut sched = FrameScheduler::new(table, TransformState::identity());
        sched.key_event(press(Key::F));

        for _ in 0..100 {
            sched.tick();
        }
        approx(sched.transform().scale(), 1.0 - 1.5);
        assert!(sched.transform().scale() < 0.0);
    }
}
