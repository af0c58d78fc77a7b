//! Keyframe storage and playback.

use crate::error::PlaybackError;
use crate::frame::Frame;
use crate::interpolation::de_casteljau;

/// An ordered sequence of keyframes spanning the `[0, 1)` normalized
/// playback timeline.
///
/// Keyframes carry no timestamps: the reduction in [`play`](Self::play)
/// spaces them implicitly and evenly, so appending or removing a keyframe
/// re-times the whole track. The track owns its frames exclusively; every
/// `play` query returns a new, independently owned [`Frame`].
///
/// The track holds no playback state (no play/pause flag, no clock). The
/// embedding driver maps wall-clock time to the normalized `t` it passes
/// to `play` and decides when playback starts and stops.
#[derive(Debug, Clone, Default)]
pub struct AnimationTrack {
    frames: Vec<Frame>,
}

impl AnimationTrack {
    /// Create an empty track.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Append a keyframe at the end of the track.
    pub fn store_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
        log::debug!("stored keyframe, track holds {}", self.frames.len());
    }

    /// Remove and return the last keyframe.
    ///
    /// Returns `None` on an empty track; user-facing messaging for that
    /// case belongs to the driver.
    pub fn remove_frame(&mut self) -> Option<Frame> {
        let removed = self.frames.pop();
        if removed.is_some() {
            log::debug!(
                "removed keyframe, {} remaining",
                self.frames.len()
            );
        }
        removed
    }

    /// Number of stored keyframes.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// `true` when no keyframes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The keyframe at `index` in playback order, if present.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Iterate the stored keyframes in playback order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Drop every stored keyframe. No effect on an already-empty track.
    pub fn clear(&mut self) {
        if !self.frames.is_empty() {
            log::debug!("clearing {} keyframes", self.frames.len());
        }
        self.frames.clear();
    }

    /// The interpolated frame visible at normalized playback time `t`.
    ///
    /// Runs the generalized pairwise reduction over the stored keyframes:
    /// a single keyframe is returned unchanged for every `t`, a two-frame
    /// track blends linearly/spherically between its endpoints, and longer
    /// tracks sweep a smooth (not uniform-speed) path through all
    /// keyframes as `t` goes from 0 to 1. `t` is not clamped; values
    /// outside `[0, 1]` extrapolate beyond the authored range.
    ///
    /// Pure for fixed track contents and `t`.
    ///
    /// # Errors
    ///
    /// [`PlaybackError::EmptyTrack`] when no keyframes are stored.
    pub fn play(&self, t: f32) -> Result<Frame, PlaybackError> {
        de_casteljau(&self.frames, t).ok_or(PlaybackError::EmptyTrack)
    }
}
