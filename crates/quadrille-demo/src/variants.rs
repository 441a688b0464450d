//! Built-in scenes, from a four-binding starter to the full table.
//!
//! Chord resolution is additive, and the layered variants rely on that:
//! in `spin`, holding Shift+ArrowLeft matches both the bare `ArrowLeft`
//! binding and the `Shift+ArrowLeft` combo, so one tick translates and
//! rotates at once.

use std::f32::consts::PI;
use std::fmt;

use clap::ValueEnum;

use quadrille_engine::chord::{Binding, BindingTable, Chord};
use quadrille_engine::coords::Vec2;
use quadrille_engine::core::Scene;
use quadrille_engine::input::Key;
use quadrille_engine::transform::{TransformDelta, TransformState};

// Per-tick increments for the full table. The smaller variants use gentler
// translation steps of their own.
const TRANSLATION_STEP: f32 = 0.015;
const ROTATION_STEP: f32 = 0.0175;
const SHEAR_STEP: f32 = 0.015;
const SCALE_STEP: f32 = 0.015;

/// Scene preset selectable on the command line.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Variant {
    /// Arrow keys slide the quad around.
    Slide,
    /// Slide, plus Shift+Left/Right to rotate.
    Spin,
    /// Spin, plus Shift+Up/Down to scale.
    Stretch,
    /// The whole parameter set, every action on two chords.
    Full,
}

impl Variant {
    pub fn scene(self) -> Scene {
        match self {
            Variant::Slide => slide(),
            Variant::Spin => spin(),
            Variant::Stretch => stretch(),
            Variant::Full => full(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Slide => "slide",
            Variant::Spin => "spin",
            Variant::Stretch => "stretch",
            Variant::Full => "full",
        };
        f.write_str(name)
    }
}

/// Starting transform shared by the centered variants: the quad sits in the
/// upper-right quadrant, flipped upright by the half-turn rotation.
fn centered(scale: f32) -> TransformState {
    TransformState::new(Vec2::new(0.5, 0.5), PI, scale, Vec2::zero())
}

fn arrow_bindings(step: f32) -> Vec<Binding> {
    vec![
        Binding::new(
            "Move left",
            Chord::key(Key::ArrowLeft),
            TransformDelta::translate(-step, 0.0),
        ),
        Binding::new(
            "Move up",
            Chord::key(Key::ArrowUp),
            TransformDelta::translate(0.0, step),
        ),
        Binding::new(
            "Move right",
            Chord::key(Key::ArrowRight),
            TransformDelta::translate(step, 0.0),
        ),
        Binding::new(
            "Move down",
            Chord::key(Key::ArrowDown),
            TransformDelta::translate(0.0, -step),
        ),
    ]
}

fn shift_rotate_bindings() -> Vec<Binding> {
    vec![
        Binding::new(
            "Rotate counter-clockwise",
            Chord::combo([Key::Shift, Key::ArrowLeft]),
            TransformDelta::rotate(ROTATION_STEP),
        ),
        Binding::new(
            "Rotate clockwise",
            Chord::combo([Key::Shift, Key::ArrowRight]),
            TransformDelta::rotate(-ROTATION_STEP),
        ),
    ]
}

fn shift_scale_bindings() -> Vec<Binding> {
    vec![
        Binding::new(
            "Scale up",
            Chord::combo([Key::Shift, Key::ArrowUp]),
            TransformDelta::scale(SCALE_STEP),
        ),
        Binding::new(
            "Scale down",
            Chord::combo([Key::Shift, Key::ArrowDown]),
            TransformDelta::scale(-SCALE_STEP),
        ),
    ]
}

fn slide() -> Scene {
    Scene::new(
        BindingTable::new(arrow_bindings(0.010)),
        TransformState::identity(),
    )
}

fn spin() -> Scene {
    let mut bindings = arrow_bindings(0.012);
    bindings.extend(shift_rotate_bindings());
    Scene::new(BindingTable::new(bindings), centered(1.0))
}

fn stretch() -> Scene {
    let mut bindings = arrow_bindings(0.012);
    bindings.extend(shift_rotate_bindings());
    bindings.extend(shift_scale_bindings());
    Scene::new(BindingTable::new(bindings), centered(2.0))
}

/// Twelve bindings, one per direction of each parameter, each reachable
/// from two chords (arrows or WASD, letters or numpad).
fn full() -> Scene {
    let bindings = vec![
        Binding::new(
            "Move left",
            Chord::either(Key::ArrowLeft, Key::A),
            TransformDelta::translate(-TRANSLATION_STEP, 0.0),
        ),
        Binding::new(
            "Move up",
            Chord::either(Key::ArrowUp, Key::W),
            TransformDelta::translate(0.0, TRANSLATION_STEP),
        ),
        Binding::new(
            "Move right",
            Chord::either(Key::ArrowRight, Key::D),
            TransformDelta::translate(TRANSLATION_STEP, 0.0),
        ),
        Binding::new(
            "Move down",
            Chord::either(Key::ArrowDown, Key::S),
            TransformDelta::translate(0.0, -TRANSLATION_STEP),
        ),
        Binding::new(
            "Rotate clockwise",
            Chord::either(Key::Q, Key::U),
            TransformDelta::rotate(-ROTATION_STEP),
        ),
        Binding::new(
            "Rotate counter-clockwise",
            Chord::either(Key::E, Key::O),
            TransformDelta::rotate(ROTATION_STEP),
        ),
        Binding::new(
            "Shear x (positive)",
            Chord::either(Key::J, Key::Numpad4),
            TransformDelta::shear(SHEAR_STEP, 0.0),
        ),
        Binding::new(
            "Shear y (negative)",
            Chord::either(Key::I, Key::Numpad8),
            TransformDelta::shear(0.0, -SHEAR_STEP),
        ),
        Binding::new(
            "Shear x (negative)",
            Chord::either(Key::L, Key::Numpad6),
            TransformDelta::shear(-SHEAR_STEP, 0.0),
        ),
        Binding::new(
            "Shear y (positive)",
            Chord::either(Key::K, Key::Numpad2),
            TransformDelta::shear(0.0, SHEAR_STEP),
        ),
        Binding::new(
            "Scale up",
            Chord::either(Key::R, Key::P),
            TransformDelta::scale(SCALE_STEP),
        ),
        Binding::new(
            "Scale down",
            Chord::either(Key::F, Key::Semicolon),
            TransformDelta::scale(-SCALE_STEP),
        ),
    ];

    Scene::new(BindingTable::new(bindings), centered(1.0))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use quadrille_engine::core::FrameScheduler;
    use quadrille_engine::input::{KeyEvent, KeyPhase, KeyState};

    fn press(scheduler: &mut FrameScheduler, key: Key) -> bool {
        scheduler.key_event(KeyEvent {
            key,
            phase: KeyPhase::Pressed,
            repeat: false,
        })
    }

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-5, "{a} !~ {b}");
    }

    #[test]
    fn table_sizes_grow_with_variant() {
        assert_eq!(Variant::Slide.scene().bindings.len(), 4);
        assert_eq!(Variant::Spin.scene().bindings.len(), 6);
        assert_eq!(Variant::Stretch.scene().bindings.len(), 8);
        assert_eq!(Variant::Full.scene().bindings.len(), 12);
    }

    #[test]
    fn slide_starts_at_identity() {
        let scene = Variant::Slide.scene();
        assert_eq!(scene.initial_transform, TransformState::identity());
    }

    #[test]
    fn centered_variants_start_offset_and_flipped() {
        let spin = Variant::Spin.scene().initial_transform;
        approx(spin.translation().x, 0.5);
        approx(spin.translation().y, 0.5);
        approx(spin.rotation(), PI);
        approx(spin.scale(), 1.0);

        // Stretch starts zoomed in.
        approx(Variant::Stretch.scene().initial_transform.scale(), 2.0);
    }

    #[test]
    fn spin_shift_arrow_translates_and_rotates() {
        let scene = Variant::Spin.scene();
        let mut scheduler = FrameScheduler::new(scene.bindings, scene.initial_transform);

        press(&mut scheduler, Key::Shift);
        press(&mut scheduler, Key::ArrowLeft);
        let snapshot = scheduler.tick();

        // Both the bare arrow binding and the Shift combo fire.
        approx(snapshot.translation.x, 0.5 - 0.012);
        approx(snapshot.rotation, PI + ROTATION_STEP);
    }

    #[test]
    fn full_table_accepts_both_chords_per_action() {
        let scene = Variant::Full.scene();
        let mut scheduler = FrameScheduler::new(scene.bindings, scene.initial_transform);

        // WASD alias for "Move left".
        press(&mut scheduler, Key::A);
        let snapshot = scheduler.tick();
        approx(snapshot.translation.x, 0.5 - TRANSLATION_STEP);
    }

    #[test]
    fn full_table_numpad_shears() {
        let scene = Variant::Full.scene();
        let mut scheduler = FrameScheduler::new(scene.bindings, scene.initial_transform);

        press(&mut scheduler, Key::Numpad8);
        let snapshot = scheduler.tick();
        approx(snapshot.shear.y, -SHEAR_STEP);
    }

    #[test]
    fn escape_is_never_bound() {
        for variant in [Variant::Slide, Variant::Spin, Variant::Stretch, Variant::Full] {
            let scene = variant.scene();
            let mut held = KeyState::new();
            held.press(Key::Escape);
            assert!(!scene.bindings.fires(&held), "{variant} binds Escape");
        }
    }
}
