//! Error types for the choreography core.
//!
//! None of these are fatal to the frame loop: callers log them and keep
//! animating with whatever state they already have.

use thiserror::Error;

/// A hand sample could not be turned into a [`crate::LandmarkFrame`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    #[error("expected {expected} hand landmarks, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("landmark {index} is not finite")]
    NotFinite { index: usize },
}

/// Failures reported by a [`crate::HandTracker`].
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracker could not start (no camera, model failed to load, ...).
    #[error("hand tracker unavailable: {0}")]
    Unavailable(String),

    /// A single detection call failed; the next sample may succeed.
    #[error("hand detection failed: {0}")]
    Detection(String),

    #[error(transparent)]
    Landmarks(#[from] LandmarkError),
}

/// Invalid tuning values in a [`crate::SceneConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must not be zero")]
    Zero { name: &'static str },

    #[error("invalid range for {name}: {min} >= {max}")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
}
