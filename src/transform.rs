//! TRS decomposition and recomposition of affine transforms.

use glam::{Mat3, Mat4, Quat, Vec3};

/// Translation / rotation / scale decomposition of an affine matrix.
///
/// The ephemeral intermediate used to blend matrix-valued frame fields:
/// each part interpolates by its own rule (linear for translation and
/// scale, spherical for rotation) before being recomposed into a pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trs {
    /// Translation column of the source matrix, verbatim.
    pub translation: Vec3,
    /// Unit rotation extracted from the scale-normalized basis.
    pub rotation: Quat,
    /// Per-axis Euclidean lengths of the basis columns.
    pub scale: Vec3,
}

impl Trs {
    /// Decompose an affine TRS matrix into independent parts.
    ///
    /// The matrix must be composed purely of translation, rotation and
    /// non-degenerate scale: no shear, no zero-length basis column. A
    /// degenerate basis column asserts in debug builds and yields a
    /// meaningless (but memory-safe) result in release builds.
    #[must_use]
    pub fn decompose(m: Mat4) -> Self {
        let translation = m.w_axis.truncate();

        let x_axis = m.x_axis.truncate();
        let y_axis = m.y_axis.truncate();
        let z_axis = m.z_axis.truncate();
        let scale =
            Vec3::new(x_axis.length(), y_axis.length(), z_axis.length());
        debug_assert!(
            scale.min_element() > f32::EPSILON,
            "degenerate basis column in {m:?}"
        );

        // Divide each basis column by its own length, leaving a pure
        // rotation basis to extract the quaternion from.
        let rotation = Quat::from_mat3(&Mat3::from_cols(
            x_axis / scale.x,
            y_axis / scale.y,
            z_axis / scale.z,
        ));

        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Rebuild the matrix: translate ∘ rotate ∘ scale, so scale applies
    /// first to local geometry.
    ///
    /// The ordering mirrors [`decompose`](Self::decompose) exactly;
    /// `Trs::decompose(m).compose()` reproduces `m` within floating-point
    /// rounding for any matrix in `decompose`'s documented domain.
    #[must_use]
    pub fn compose(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.rotation,
            self.translation,
        )
    }
}
