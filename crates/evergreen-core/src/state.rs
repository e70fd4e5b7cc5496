//! Scene-wide state read by the visual loop, and the fixed viewer camera.
//!
//! [`SceneState`] is the only shared mutable resource in the system. It is
//! written exclusively by [`crate::ModeController`] (its fields are private
//! and the mutators are crate-private); everything else holds `&SceneState`.

use glam::{Mat4, Vec3};

use crate::constants::*;
use crate::particle::ParticleId;

/// Arrangement the particles are currently steering toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SceneMode {
    #[default]
    Tree,
    Scatter,
    Focus,
}

impl SceneMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Scatter => "SCATTER",
            Self::Focus => "FOCUS",
        }
    }
}

/// Current mode, focus selection and hand presence.
///
/// Invariant: `focus` is `Some` only while `mode == SceneMode::Focus`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    mode: SceneMode,
    focus: Option<ParticleId>,
    hand_detected: bool,
}

impl SceneState {
    #[inline]
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    #[inline]
    pub fn focus(&self) -> Option<ParticleId> {
        self.focus
    }

    /// Whether the last inference cycle saw a hand.
    #[inline]
    pub fn hand_detected(&self) -> bool {
        self.hand_detected
    }

    /// True when `id` is the particle currently zoomed toward the viewer.
    #[inline]
    pub fn is_focused(&self, id: ParticleId) -> bool {
        self.mode == SceneMode::Focus && self.focus == Some(id)
    }

    pub(crate) fn enter(&mut self, mode: SceneMode, focus: Option<ParticleId>) {
        debug_assert!(focus.is_none() || mode == SceneMode::Focus);
        self.mode = mode;
        self.focus = focus;
    }

    pub(crate) fn set_hand_detected(&mut self, detected: bool) {
        self.hand_detected = detected;
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The scene's fixed viewer, looking down -Z at the tree.
    pub fn viewer(aspect: f32) -> Self {
        let eye = camera_eye_vec3();
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
