//! Per-particle steering toward the current mode's target.
//!
//! Every frame each particle moves a fraction `rate * dt` of the way to its
//! target (a first-order low-pass, so it approaches but never lands), blends
//! its scale the same way, and optionally spins or turns to face the viewer.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::constants::*;
use crate::particle::{Particle, Transform};
use crate::state::{SceneMode, SceneState};

/// `current + (target - current) * rate * dt`, with the blend clamped to 1.
#[inline]
pub fn approach(current: Vec3, target: Vec3, rate: f32, dt: f32) -> Vec3 {
    current.lerp(target, (rate * dt).clamp(0.0, 1.0))
}

/// Rotation whose local +Z axis points along `dir`, with `up` as the roll
/// reference. Returns `None` when `dir` is degenerate.
pub fn look_rotation(dir: Vec3, up: Vec3) -> Option<Quat> {
    let z = dir.try_normalize()?;
    let x = up
        .cross(z)
        .try_normalize()
        .or_else(|| Vec3::Z.cross(z).try_normalize())?;
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)))
}

/// Inputs shared by every particle for one visual frame.
pub struct ParticleAnimator<'a> {
    dt: f32,
    state: &'a SceneState,
    parent_matrix: Mat4,
    parent_rotation: Quat,
    anchor_local: Vec3,
    camera_eye: Vec3,
}

impl<'a> ParticleAnimator<'a> {
    /// Prepare a frame. `parent` is the world transform of the group holding
    /// the particles; it rotates, so the focus anchor is re-expressed in its
    /// local frame here every frame.
    pub fn new(dt: f32, state: &'a SceneState, parent: &Transform, camera_eye: Vec3) -> Self {
        let parent_matrix = parent.matrix();
        let anchor_local = parent_matrix
            .inverse()
            .transform_point3(focus_anchor_vec3());
        Self {
            dt,
            state,
            parent_matrix,
            parent_rotation: parent.orientation(),
            anchor_local,
            camera_eye,
        }
    }

    /// Focus anchor in the parent's local frame for this frame.
    #[inline]
    pub fn anchor_local(&self) -> Vec3 {
        self.anchor_local
    }

    /// Where `p` is heading this frame, in the parent's local frame.
    pub fn target_for(&self, p: &Particle) -> Vec3 {
        if self.state.is_focused(p.id) {
            return self.anchor_local;
        }
        match self.state.mode() {
            SceneMode::Scatter | SceneMode::Focus => p.scatter_position,
            SceneMode::Tree => p.tree_position,
        }
    }

    /// Uniform scale `p` is blending toward this frame.
    pub fn target_scale(&self, p: &Particle) -> f32 {
        if self.state.is_focused(p.id) {
            FOCUS_SCALE
        } else if self.state.mode() == SceneMode::Scatter && p.is_photo() {
            p.base_scale * SCATTER_PHOTO_SCALE_MULTIPLIER
        } else {
            p.base_scale
        }
    }

    pub fn animate(&self, p: &mut Particle) {
        let dt = self.dt;
        let focused = self.state.is_focused(p.id);

        let rate = if focused { FOCUS_MOVE_RATE } else { MOVE_RATE };
        let target = self.target_for(p);
        p.transform.translation = approach(p.transform.translation, target, rate, dt);

        if self.state.mode() == SceneMode::Scatter && !p.is_photo() {
            p.transform.rotation.x += SCATTER_SPIN_X * dt;
            p.transform.rotation.y += SCATTER_SPIN_Y * dt;
        }

        let scale = Vec3::splat(self.target_scale(p));
        p.transform.scale = approach(p.transform.scale, scale, SCALE_RATE, dt);

        if focused && p.is_photo() {
            self.face_viewer(&mut p.transform);
        }
    }

    pub fn animate_all(&self, particles: &mut [Particle]) {
        for p in particles.iter_mut() {
            self.animate(p);
        }
    }

    /// Turn `t` so its +Z faces the camera in world space.
    fn face_viewer(&self, t: &mut Transform) {
        let world_pos = self.parent_matrix.transform_point3(t.translation);
        if let Some(world_rot) = look_rotation(self.camera_eye - world_pos, Vec3::Y) {
            t.set_orientation(self.parent_rotation.inverse() * world_rot);
        }
    }
}
