//! Scene-view snapshots captured as animation keyframes.

use glam::{Mat4, Vec3};

/// One captured snapshot of the renderable scene-view state.
///
/// Both matrix fields must be valid TRS-composed affine transforms
/// (translation, rotation and non-degenerate scale only). Blending
/// decomposes them per [`Trs`](crate::transform::Trs), which is undefined
/// for sheared or degenerate matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Background clear color (RGB).
    pub background_color: Vec3,
    /// Camera pose.
    pub view_transform: Mat4,
    /// Light pose.
    pub light_transform: Mat4,
    /// How far scene parts are pushed out from the model center.
    pub explosion_offset: f32,
}

impl Frame {
    /// Capture a frame from live scene-view state.
    #[must_use]
    pub const fn new(
        background_color: Vec3,
        view_transform: Mat4,
        light_transform: Mat4,
        explosion_offset: f32,
    ) -> Self {
        Self {
            background_color,
            view_transform,
            light_transform,
            explosion_offset,
        }
    }

    /// Component-wise approximate equality, within `max_abs_diff` per
    /// element.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, max_abs_diff: f32) -> bool {
        self.background_color
            .abs_diff_eq(other.background_color, max_abs_diff)
            && self
                .view_transform
                .abs_diff_eq(other.view_transform, max_abs_diff)
            && self
                .light_transform
                .abs_diff_eq(other.light_transform, max_abs_diff)
            && (self.explosion_offset - other.explosion_offset).abs()
                <= max_abs_diff
    }
}

impl Default for Frame {
    /// Black background, identity camera and light poses, no explosion.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Mat4::IDENTITY, Mat4::IDENTITY, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity_view() {
        let f = Frame::default();
        assert_eq!(f.background_color, Vec3::ZERO);
        assert_eq!(f.view_transform, Mat4::IDENTITY);
        assert_eq!(f.light_transform, Mat4::IDENTITY);
        assert_eq!(f.explosion_offset, 0.0);
    }

    #[test]
    fn test_abs_diff_eq_within_tolerance() {
        let a = Frame::default();
        let mut b = a;
        b.explosion_offset = 1e-6;
        b.background_color.x = 1e-6;
        assert!(a.abs_diff_eq(&b, 1e-5));
        assert!(!a.abs_diff_eq(&b, 1e-7));
    }

    #[test]
    fn test_abs_diff_eq_catches_matrix_drift() {
        let a = Frame::default();
        let mut b = a;
        b.view_transform =
            Mat4::from_translation(Vec3::new(0.0, 0.1, 0.0));
        assert!(!a.abs_diff_eq(&b, 1e-3));
    }
}
