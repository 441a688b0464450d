use crate::coords::Vec2;

/// Accumulated transform parameters.
///
/// All four parameters are plain accumulators. Rotation is an unwrapped
/// angle in radians and keeps growing past 2π; scale is a raw factor that
/// may cross zero and go negative (rendering as a mirrored quad); nothing
/// is clamped. Ten ticks of a +s binding move a parameter by exactly the
/// sum of ten increments, so holding opposite bindings for equal tick
/// counts returns to the start.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformState {
    translation: Vec2,
    rotation: f32,
    scale: f32,
    shear: Vec2,
}

impl TransformState {
    pub const fn new(translation: Vec2, rotation: f32, scale: f32, shear: Vec2) -> Self {
        Self {
            translation,
            rotation,
            scale,
            shear,
        }
    }

    /// Identity: untranslated, unrotated, unit scale, no shear.
    pub const fn identity() -> Self {
        Self::new(Vec2::zero(), 0.0, 1.0, Vec2::zero())
    }

    // ── mutators (all additive) ───────────────────────────────────────────

    pub fn translate_by(&mut self, delta: Vec2) {
        self.translation += delta;
    }

    pub fn rotate_by(&mut self, radians: f32) {
        self.rotation += radians;
    }

    pub fn scale_by(&mut self, delta: f32) {
        self.scale += delta;
    }

    pub fn shear_by(&mut self, delta: Vec2) {
        self.shear += delta;
    }

    // ── reads ─────────────────────────────────────────────────────────────

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn shear(&self) -> Vec2 {
        self.shear
    }

    /// Copies the current parameters out as an immutable snapshot.
    pub fn snapshot(&self) -> Transform2d {
        Transform2d {
            translation: self.translation,
            rotation: self.rotation,
            scale: self.scale,
            shear: self.shear,
        }
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Immutable snapshot of [`TransformState`], taken once per tick.
///
/// The renderer reads only snapshots; mid-tick intermediate states are never
/// observable outside the scheduler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2d {
    pub translation: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub shear: Vec2,
}

impl Transform2d {
    pub const IDENTITY: Self = Self {
        translation: Vec2::zero(),
        rotation: 0.0,
        scale: 1.0,
        shear: Vec2::zero(),
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} !~ {b}");
    }

    #[test]
    fn identity_parameters() {
        let state = TransformState::identity();
        assert_eq!(state.translation(), Vec2::zero());
        assert_eq!(state.rotation(), 0.0);
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.shear(), Vec2::zero());
    }

    #[test]
    fn translate_accumulates() {
        let mut state = TransformState::identity();
        state.translate_by(Vec2::new(0.015, 0.0));
        state.translate_by(Vec2::new(0.015, 0.0));
        state.translate_by(Vec2::new(0.0, -0.015));
        approx(state.translation().x, 0.03);
        approx(state.translation().y, -0.015);
    }

    #[test]
    fn rotation_is_not_wrapped() {
        let mut state = TransformState::identity();
        for _ in 0..1000 {
            state.rotate_by(0.0175);
        }
        // Far past 2π; the accumulator must not normalize.
        approx(state.rotation(), 17.5);
    }

    #[test]
    fn scale_may_cross_zero() {
        let mut state = TransformState::identity();
        for _ in 0..100 {
            state.scale_by(-0.015);
        }
        approx(state.scale(), -0.5);
    }

    #[test]
    fn opposite_ticks_cancel() {
        let mut state = TransformState::identity();
        for _ in 0..10 {
            state.shear_by(Vec2::new(0.015, 0.0));
        }
        for _ in 0..10 {
            state.shear_by(Vec2::new(-0.015, 0.0));
        }
        approx(state.shear().x, 0.0);
        approx(state.shear().y, 0.0);
    }

    #[test]
    fn snapshot_copies_current_values() {
        let mut state = TransformState::new(Vec2::new(0.5, 0.5), 1.0, 2.0, Vec2::zero());
        let before = state.snapshot();

        state.rotate_by(0.5);
        let after = state.snapshot();

        // Snapshots are decoupled from later mutation.
        approx(before.rotation, 1.0);
        approx(after.rotation, 1.5);
        assert_eq!(before.translation, after.translation);
    }
}
