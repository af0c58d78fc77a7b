//! Crate-level error types.

use std::fmt;

/// Errors produced by the sceneplay crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackError {
    /// A frame was requested from a track with no stored keyframes.
    EmptyTrack,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTrack => {
                write!(f, "cannot play an animation track with no keyframes")
            }
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_message() {
        let msg = PlaybackError::EmptyTrack.to_string();
        assert!(msg.contains("no keyframes"));
    }
}
