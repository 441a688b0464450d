use super::state::TransformState;
use crate::coords::Vec2;

/// Per-tick increment to one transform parameter.
///
/// A delta is data, not behavior: bindings store them, the scheduler applies
/// them. Applying is always addition onto the matching accumulator, so a
/// binding held for n ticks contributes exactly n increments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformDelta {
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
    Shear(Vec2),
}

impl TransformDelta {
    pub const fn translate(dx: f32, dy: f32) -> Self {
        Self::Translate(Vec2::new(dx, dy))
    }

    pub const fn rotate(radians: f32) -> Self {
        Self::Rotate(radians)
    }

    pub const fn scale(delta: f32) -> Self {
        Self::Scale(delta)
    }

    pub const fn shear(dx: f32, dy: f32) -> Self {
        Self::Shear(Vec2::new(dx, dy))
    }

    pub fn apply(self, state: &mut TransformState) {
        match self {
            Self::Translate(d) => state.translate_by(d),
            Self::Rotate(d) => state.rotate_by(d),
            Self::Scale(d) => state.scale_by(d),
            Self::Shear(d) => state.shear_by(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_routes_to_matching_parameter() {
        let mut state = TransformState::identity();

        TransformDelta::translate(0.1, 0.2).apply(&mut state);
        TransformDelta::rotate(0.3).apply(&mut state);
        TransformDelta::scale(0.5).apply(&mut state);
        TransformDelta::shear(-0.1, 0.1).apply(&mut state);

        assert_eq!(state.translation(), Vec2::new(0.1, 0.2));
        assert_eq!(state.rotation(), 0.3);
        assert_eq!(state.scale(), 1.5);
        assert_eq!(state.shear(), Vec2::new(-0.1, 0.1));
    }

    #[test]
    fn deltas_do_not_touch_other_parameters() {
        let mut state = TransformState::identity();
        TransformDelta::rotate(1.0).apply(&mut state);

        assert_eq!(state.translation(), Vec2::zero());
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.shear(), Vec2::zero());
    }
}
