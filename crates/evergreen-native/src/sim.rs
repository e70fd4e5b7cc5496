//! Keyboard hand simulator.
//!
//! Stands in for a camera + landmark model on machines without one. Keys set
//! a hand pose; the simulator synthesizes a 21-point skeleton for that pose
//! and presents it as a 30 fps video stream, so the real classifier and the
//! duplicate-sample skipping in the inference loop are exercised unchanged.
//!
//! | Key | Pose |
//! |---|---|
//! | `F` | Fist (tree) |
//! | `O` | Open hand (scatter) |
//! | `P` | Pinch (focus a photo) |
//! | `R` | Relaxed, ambiguous pose |
//! | `Space` | Hand leaves the frame |

use evergreen_core::{
    HandTracker, LandmarkFrame, TrackerError, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP,
};
use glam::{Vec2, Vec3};

const VIDEO_FPS: f64 = 30.0;
const WRIST_UV: Vec2 = Vec2::new(0.5, 0.85);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Fist,
    Open,
    Pinch,
    Relaxed,
}

impl Pose {
    /// Wrist-to-fingertip distance for this pose, normalized image units.
    fn reach(&self) -> f32 {
        match self {
            Self::Fist => 0.15,
            Self::Relaxed => 0.32,
            Self::Open | Self::Pinch => 0.45,
        }
    }
}

// Fan angle of each finger from vertical, thumb first, in degrees
const FINGER_ANGLES: [f32; 5] = [-60.0, -25.0, -8.0, 8.0, 25.0];

/// Synthesize a hand skeleton for `pose` in MediaPipe landmark order.
pub fn pose_landmarks(pose: Pose) -> LandmarkFrame {
    let mut points = [Vec3::ZERO; LANDMARK_COUNT];
    points[0] = WRIST_UV.extend(0.0);
    let reach = pose.reach();
    for (finger, angle) in FINGER_ANGLES.iter().enumerate() {
        let theta = angle.to_radians();
        let dir = Vec2::new(theta.sin(), -theta.cos());
        let length = if finger == 0 { reach * 0.7 } else { reach };
        for joint in 0..4 {
            let along = length * (joint as f32 + 1.0) / 4.0;
            points[1 + finger * 4 + joint] = (WRIST_UV + dir * along).extend(-0.02 * joint as f32);
        }
    }
    if pose == Pose::Pinch {
        points[THUMB_TIP] = points[INDEX_TIP] + Vec3::new(0.01, 0.01, 0.0);
    }
    LandmarkFrame::new(points)
}

pub struct KeyboardHand {
    pose: Option<Pose>,
    sample_time: f64,
}

impl KeyboardHand {
    pub fn new() -> Result<Self, TrackerError> {
        log::info!("[sim] keyboard hand: F fist, O open, P pinch, R relaxed, Space hide");
        Ok(Self {
            pose: None,
            sample_time: 0.0,
        })
    }

    pub fn set_pose(&mut self, pose: Option<Pose>) {
        if self.pose != pose {
            log::debug!("[sim] pose {:?}", pose);
        }
        self.pose = pose;
    }

    /// Advance the simulated video clock; samples land on a 30 fps grid so
    /// faster render loops see repeated timestamps.
    pub fn advance_video(&mut self, now_sec: f64) {
        self.sample_time = (now_sec * VIDEO_FPS).floor() / VIDEO_FPS;
    }
}

impl HandTracker for KeyboardHand {
    fn sample_time(&self) -> f64 {
        self.sample_time
    }

    fn detect(&mut self, _now_ms: f64) -> Result<Option<LandmarkFrame>, TrackerError> {
        Ok(self.pose.map(pose_landmarks))
    }
}
