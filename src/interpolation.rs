//! Per-type blend rules and the generalized multi-point reduction.
//!
//! The closed set of [`Blend`] impls covers every semantic type a
//! [`Frame`] carries: scalars and vectors blend linearly, rotations
//! spherically, and matrices through a TRS decomposition. One generic
//! reduction routine ([`de_casteljau`]) collapses an arbitrary-length
//! keyframe sequence by repeated pairwise blending.

use glam::{Mat4, Quat, Vec3};

use crate::frame::Frame;
use crate::transform::Trs;

/// Pairwise blend between two values of one semantic type.
///
/// `t` is intentionally unclamped: values outside `[0, 1]` extrapolate
/// beyond the endpoints instead of saturating at them.
pub trait Blend: Copy {
    /// Blend from `self` (at `t = 0`) toward `end` (at `t = 1`).
    #[must_use]
    fn blend(self, end: Self, t: f32) -> Self;
}

impl Blend for f32 {
    fn blend(self, end: Self, t: f32) -> Self {
        self * (1.0 - t) + end * t
    }
}

impl Blend for Vec3 {
    fn blend(self, end: Self, t: f32) -> Self {
        self.lerp(end, t)
    }
}

impl Blend for Quat {
    // Shortest-arc slerp. glam negates onto the minor arc and falls back
    // to a normalized linear blend when the endpoints are nearly
    // parallel, so there is no division-by-zero path.
    fn blend(self, end: Self, t: f32) -> Self {
        self.slerp(end, t)
    }
}

impl Blend for Mat4 {
    // Decompose both endpoints, blend each TRS part by its own rule,
    // recompose.
    fn blend(self, end: Self, t: f32) -> Self {
        let a = Trs::decompose(self);
        let b = Trs::decompose(end);
        Trs {
            translation: a.translation.blend(b.translation, t),
            rotation: a.rotation.blend(b.rotation, t),
            scale: a.scale.blend(b.scale, t),
        }
        .compose()
    }
}

impl Blend for Frame {
    fn blend(self, end: Self, t: f32) -> Self {
        Self {
            background_color: self
                .background_color
                .blend(end.background_color, t),
            view_transform: self.view_transform.blend(end.view_transform, t),
            light_transform: self
                .light_transform
                .blend(end.light_transform, t),
            explosion_offset: self
                .explosion_offset
                .blend(end.explosion_offset, t),
        }
    }
}

/// Collapse a point sequence to a single value by repeated pairwise
/// blending at parameter `t` (De Casteljau reduction).
///
/// Each round replaces `n` points with the `n - 1` pairwise blends of
/// neighbors, so `n - 1` rounds reduce the sequence to one value —
/// `O(n^2)` pairwise blends in total, fine for authored keyframe counts.
/// A single point is returned unchanged regardless of `t`. Returns `None`
/// only for an empty slice.
#[must_use]
pub fn de_casteljau<T: Blend>(points: &[T], t: f32) -> Option<T> {
    let (&first, rest) = points.split_first()?;
    if rest.is_empty() {
        return Some(first);
    }

    let mut scratch = points.to_vec();
    for round_len in (1..scratch.len()).rev() {
        for i in 0..round_len {
            scratch[i] = scratch[i].blend(scratch[i + 1], t);
        }
    }
    Some(scratch[0])
}
