//! Hand-landmark gesture classification.
//!
//! A [`LandmarkFrame`] is the 21-point hand skeleton produced by the landmark
//! model for one video sample. [`classify`] reduces it to a [`Gesture`] using
//! two planar measurements: the thumb/index pinch distance and the mean
//! wrist-to-fingertip spread. The classifier keeps no state between calls.

use glam::{Vec2, Vec3};

use crate::error::{ConfigError, LandmarkError};

/// Number of landmarks in one hand skeleton.
pub const LANDMARK_COUNT: usize = 21;

// Landmark indices in the hand topology
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The four non-thumb fingertips used for the spread measurement.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// One detected hand: 21 normalized camera-space points.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkFrame {
    points: [Vec3; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a frame from a model output slice, rejecting malformed samples.
    pub fn from_slice(points: &[Vec3]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NotFinite { index });
        }
        let mut out = [Vec3::ZERO; LANDMARK_COUNT];
        out.copy_from_slice(points);
        Ok(Self { points: out })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    #[inline]
    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.points
    }

    /// Image-plane distance between two landmarks; depth is ignored.
    #[inline]
    pub fn planar_distance(&self, a: usize, b: usize) -> f32 {
        planar(self.points[a]).distance(planar(self.points[b]))
    }

    /// Planar distance between the thumb tip and the index fingertip.
    pub fn pinch_distance(&self) -> f32 {
        self.planar_distance(THUMB_TIP, INDEX_TIP)
    }

    /// Mean planar distance from the wrist to the four non-thumb fingertips.
    pub fn spread(&self) -> f32 {
        let sum: f32 = FINGERTIPS
            .iter()
            .map(|&tip| self.planar_distance(WRIST, tip))
            .sum();
        sum / FINGERTIPS.len() as f32
    }
}

#[inline]
fn planar(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.y)
}

/// Discrete hand pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// A hand is visible but the pose is ambiguous.
    None,
    Pinch,
    Fist,
    Open,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pinch => "pinch",
            Self::Fist => "fist",
            Self::Open => "open",
        }
    }
}

/// Result of one inference cycle. `NoHand` is deliberately distinct from
/// [`Gesture::None`] so the UI can show detection presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandReading {
    NoHand,
    Hand(Gesture),
}

impl HandReading {
    #[inline]
    pub fn is_detected(&self) -> bool {
        matches!(self, Self::Hand(_))
    }

    #[inline]
    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            Self::NoHand => None,
            Self::Hand(g) => Some(*g),
        }
    }
}

/// Classification thresholds in normalized image units.
///
/// These are calibration values tuned against a typical webcam field of view
/// and arm's-length hand distance; they are not physical constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Pinch when thumb/index distance is below this.
    pub pinch: f32,
    /// Fist when the mean spread is below this.
    pub fist_spread: f32,
    /// Open when the mean spread is at or above this.
    pub open_spread: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch: 0.05,
            fist_spread: 0.25,
            open_spread: 0.4,
        }
    }
}

impl GestureThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("gesture.pinch", self.pinch),
            ("gesture.fist_spread", self.fist_spread),
            ("gesture.open_spread", self.open_spread),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.fist_spread >= self.open_spread {
            return Err(ConfigError::EmptyRange {
                name: "gesture.spread",
                min: self.fist_spread,
                max: self.open_spread,
            });
        }
        Ok(())
    }

    /// Classify one hand. Priority: pinch, then fist, then open.
    pub fn classify(&self, frame: &LandmarkFrame) -> Gesture {
        if frame.pinch_distance() < self.pinch {
            return Gesture::Pinch;
        }
        let spread = frame.spread();
        if spread < self.fist_spread {
            Gesture::Fist
        } else if spread >= self.open_spread {
            Gesture::Open
        } else {
            Gesture::None
        }
    }

    /// Classify an optional detection into a [`HandReading`].
    pub fn read(&self, frame: Option<&LandmarkFrame>) -> HandReading {
        match frame {
            Some(f) => HandReading::Hand(self.classify(f)),
            None => HandReading::NoHand,
        }
    }
}

/// Classify with the default thresholds.
#[inline]
pub fn classify(frame: &LandmarkFrame) -> Gesture {
    GestureThresholds::default().classify(frame)
}
