// Inference loop: duplicate-sample skipping and failure tolerance.

use evergreen_core::*;
use glam::Vec3;

/// Tracker that replays a fixed script of `(sample_time, result)` pairs and
/// counts how often the model actually ran.
struct ScriptedTracker {
    script: Vec<(f64, Result<Option<Gesture>, &'static str>)>,
    cursor: usize,
    detect_calls: usize,
}

impl ScriptedTracker {
    fn new(script: Vec<(f64, Result<Option<Gesture>, &'static str>)>) -> Self {
        Self {
            script,
            cursor: 0,
            detect_calls: 0,
        }
    }

    fn next_sample(&mut self) {
        self.cursor = (self.cursor + 1).min(self.script.len() - 1);
    }
}

fn frame_for(gesture: Gesture) -> LandmarkFrame {
    let wrist = Vec3::new(0.5, 0.8, 0.0);
    let (pinch, spread) = match gesture {
        Gesture::Pinch => (0.01, 0.3),
        Gesture::Fist => (0.2, 0.1),
        Gesture::Open => (0.2, 0.5),
        Gesture::None => (0.2, 0.3),
    };
    let mut points = [wrist; LANDMARK_COUNT];
    for &tip in FINGERTIPS.iter() {
        points[tip] = wrist - Vec3::Y * spread;
    }
    points[THUMB_TIP] = points[INDEX_TIP] + Vec3::X * pinch;
    LandmarkFrame::new(points)
}

impl HandTracker for ScriptedTracker {
    fn sample_time(&self) -> f64 {
        self.script[self.cursor].0
    }

    fn detect(&mut self, _now_ms: f64) -> Result<Option<LandmarkFrame>, TrackerError> {
        self.detect_calls += 1;
        match &self.script[self.cursor].1 {
            Ok(g) => Ok(g.map(frame_for)),
            Err(msg) => Err(TrackerError::Detection(msg.to_string())),
        }
    }
}

#[test]
fn duplicate_timestamps_are_skipped() {
    let tracker = ScriptedTracker::new(vec![
        (0.0, Ok(Some(Gesture::Open))),
        (0.033, Ok(Some(Gesture::Fist))),
    ]);
    let mut inference = InferenceLoop::with_tracker(GestureThresholds::default(), tracker);
    let mut c = ModeController::new(0);

    let first = inference.poll(0.0, &mut c, &[]);
    assert!(matches!(first, PollOutcome::Observed { change: Some(_), .. }));
    assert_eq!(c.state().mode(), SceneMode::Scatter);

    for t in 1..5 {
        assert_eq!(inference.poll(t as f64, &mut c, &[]), PollOutcome::Duplicate);
    }
    assert_eq!(inference.tracker_mut().unwrap().detect_calls, 1);

    inference.tracker_mut().unwrap().next_sample();
    let second = inference.poll(10.0, &mut c, &[]);
    assert!(matches!(
        second,
        PollOutcome::Observed {
            reading: HandReading::Hand(Gesture::Fist),
            ..
        }
    ));
    assert_eq!(c.state().mode(), SceneMode::Tree);
    assert_eq!(inference.tracker_mut().unwrap().detect_calls, 2);
}

#[test]
fn failed_init_leaves_controller_operable() {
    let mut inference: InferenceLoop<ScriptedTracker> =
        InferenceLoop::start(GestureThresholds::default(), || {
            Err(TrackerError::Unavailable("no camera".into()))
        });
    assert!(!inference.is_running());
    assert!(inference.tracker_mut().is_none());

    let mut c = ModeController::new(0);
    assert_eq!(inference.poll(0.0, &mut c, &[]), PollOutcome::Idle);
    assert_eq!(c.state().mode(), SceneMode::Tree);
    assert!(!c.state().hand_detected());

    // Manual triggers still drive the scene
    assert!(c.apply(Gesture::Open, &[]).is_some());
    assert_eq!(c.state().mode(), SceneMode::Scatter);
}

#[test]
fn detection_failure_skips_the_sample_only() {
    let tracker = ScriptedTracker::new(vec![
        (0.0, Ok(Some(Gesture::Open))),
        (0.033, Err("model crashed")),
        (0.066, Ok(Some(Gesture::Fist))),
    ]);
    let mut inference = InferenceLoop::with_tracker(GestureThresholds::default(), tracker);
    let mut c = ModeController::new(0);

    inference.poll(0.0, &mut c, &[]);
    inference.tracker_mut().unwrap().next_sample();
    assert_eq!(inference.poll(33.0, &mut c, &[]), PollOutcome::Failed);
    assert_eq!(c.state().mode(), SceneMode::Scatter);
    assert!(c.state().hand_detected());
    // The failed sample is not retried
    assert_eq!(inference.poll(34.0, &mut c, &[]), PollOutcome::Duplicate);

    inference.tracker_mut().unwrap().next_sample();
    inference.poll(66.0, &mut c, &[]);
    assert_eq!(c.state().mode(), SceneMode::Tree);
}

#[test]
fn lost_hand_updates_presence_only() {
    let tracker = ScriptedTracker::new(vec![
        (0.0, Ok(Some(Gesture::Pinch))),
        (0.033, Ok(None)),
    ]);
    let photos = [ParticleId(40), ParticleId(41)];
    let mut inference = InferenceLoop::with_tracker(GestureThresholds::default(), tracker);
    let mut c = ModeController::new(0);

    inference.poll(0.0, &mut c, &photos);
    assert_eq!(c.state().mode(), SceneMode::Focus);
    let focus = c.state().focus();
    assert!(c.state().hand_detected());

    inference.tracker_mut().unwrap().next_sample();
    let outcome = inference.poll(33.0, &mut c, &photos);
    assert_eq!(
        outcome,
        PollOutcome::Observed {
            reading: HandReading::NoHand,
            change: None
        }
    );
    assert!(!c.state().hand_detected());
    assert_eq!(c.state().mode(), SceneMode::Focus);
    assert_eq!(c.state().focus(), focus);
}

#[test]
fn landmark_errors_convert_into_tracker_errors() {
    let err: TrackerError = LandmarkFrame::from_slice(&[Vec3::ZERO; 3]).unwrap_err().into();
    assert!(matches!(
        err,
        TrackerError::Landmarks(LandmarkError::WrongCount { actual: 3, .. })
    ));
    assert!(err.to_string().contains("expected 21"));
}
