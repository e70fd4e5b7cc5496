//! Inference loop: pull hand landmarks from a tracker and feed the controller.
//!
//! The landmark model is a black box behind [`HandTracker`]. The loop runs
//! it at most once per distinct video sample and never lets a tracker
//! failure stop the scene: without a tracker the controller simply stays
//! where manual triggers put it.

use crate::error::TrackerError;
use crate::gesture::{GestureThresholds, HandReading, LandmarkFrame};
use crate::mode::{ModeChange, ModeController};
use crate::particle::ParticleId;

/// Source of hand landmarks, one video sample at a time.
pub trait HandTracker {
    /// Presentation time of the current video sample, in seconds.
    fn sample_time(&self) -> f64;

    /// Run the landmark model on the current sample. `now_ms` is the host
    /// clock, passed through for trackers that need monotonic timestamps.
    fn detect(&mut self, now_ms: f64) -> Result<Option<LandmarkFrame>, TrackerError>;
}

/// What one call to [`InferenceLoop::poll`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// No tracker is running.
    Idle,
    /// The video sample was already processed.
    Duplicate,
    /// Detection failed for this sample; state is unchanged.
    Failed,
    Observed {
        reading: HandReading,
        change: Option<ModeChange>,
    },
}

pub struct InferenceLoop<T> {
    tracker: Option<T>,
    thresholds: GestureThresholds,
    last_sample_time: Option<f64>,
}

impl<T: HandTracker> InferenceLoop<T> {
    /// Start the loop with the tracker produced by `init`. If it fails the
    /// loop runs idle and the failure is logged.
    pub fn start<F>(thresholds: GestureThresholds, init: F) -> Self
    where
        F: FnOnce() -> Result<T, TrackerError>,
    {
        let tracker = match init() {
            Ok(t) => {
                log::info!("[inference] hand tracker started");
                Some(t)
            }
            Err(e) => {
                log::warn!("[inference] {e}; continuing without gesture input");
                None
            }
        };
        Self {
            tracker,
            thresholds,
            last_sample_time: None,
        }
    }

    pub fn with_tracker(thresholds: GestureThresholds, tracker: T) -> Self {
        Self::start(thresholds, || Ok(tracker))
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.tracker.is_some()
    }

    pub fn tracker_mut(&mut self) -> Option<&mut T> {
        self.tracker.as_mut()
    }

    /// Process the tracker's current sample unless it was already seen.
    pub fn poll(
        &mut self,
        now_ms: f64,
        controller: &mut ModeController,
        photos: &[ParticleId],
    ) -> PollOutcome {
        let Some(tracker) = self.tracker.as_mut() else {
            return PollOutcome::Idle;
        };
        let sample_time = tracker.sample_time();
        if self.last_sample_time == Some(sample_time) {
            return PollOutcome::Duplicate;
        }
        self.last_sample_time = Some(sample_time);

        let frame = match tracker.detect(now_ms) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("[inference] sample at {sample_time:.3}s skipped: {e}");
                return PollOutcome::Failed;
            }
        };
        let reading = self.thresholds.read(frame.as_ref());
        let change = controller.observe(reading, photos);
        PollOutcome::Observed { reading, change }
    }
}
