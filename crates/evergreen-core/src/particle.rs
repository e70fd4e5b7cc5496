use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::{PHOTO_FILL, PHOTO_FRAME_SIZE};

/// Stable identity of a particle, assigned once at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Ornament,
    Photo,
    Light,
}

/// Live transform of a renderable, relative to its parent group.
///
/// `rotation` is XYZ Euler angles in radians so that spin can accumulate
/// per axis; [`Transform::orientation`] gives the equivalent quaternion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub scale: Vec3,
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn with_uniform_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Self::default()
        }
    }

    #[inline]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    #[inline]
    pub fn set_orientation(&mut self, q: Quat) {
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        self.rotation = Vec3::new(x, y, z);
    }

    /// Local-to-parent matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation(), self.translation)
    }
}

/// Visual variant of an ornament; only the renderer cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentStyle {
    GreenBox,
    GoldBox,
    GoldSphere,
    RedSphere,
    CandyCane,
}

impl OrnamentStyle {
    /// Map a uniform sample in [0, 1) to a style with the scene's mix.
    pub fn from_unit(u: f32) -> Self {
        if u < 0.35 {
            Self::GreenBox
        } else if u < 0.65 {
            Self::GoldBox
        } else if u < 0.85 {
            Self::GoldSphere
        } else if u < 0.95 {
            Self::RedSphere
        } else {
            Self::CandyCane
        }
    }

    pub fn color_rgb(&self) -> [f32; 3] {
        match self {
            Self::GreenBox => [0.04, 0.165, 0.07],
            Self::GoldBox | Self::GoldSphere => [0.96, 0.835, 0.63],
            Self::RedSphere => [0.447, 0.0, 0.15],
            Self::CandyCane => [0.77, 0.12, 0.23],
        }
    }
}

/// Picture size inside a square gold frame, preserving the image aspect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoCard {
    pub width: f32,
    pub height: f32,
}

impl PhotoCard {
    /// Fit an image of `aspect` (width / height) inside the frame.
    pub fn fit(aspect: f32) -> Self {
        let max = PHOTO_FRAME_SIZE * PHOTO_FILL;
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let mut width = max;
        let mut height = width / aspect;
        if height > max {
            height = max;
            width = height * aspect;
        }
        Self { width, height }
    }
}

/// One animated object in the tree group.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub base_scale: f32,
    pub tree_position: Vec3,
    pub scatter_position: Vec3,
    pub transform: Transform,
    pub style: Option<OrnamentStyle>,
    pub card: Option<PhotoCard>,
}

impl Particle {
    /// New particle resting at the origin at its base scale; it flies to its
    /// tree position on the first frames.
    pub fn new(
        id: ParticleId,
        kind: ParticleKind,
        base_scale: f32,
        tree_position: Vec3,
        scatter_position: Vec3,
    ) -> Self {
        Self {
            id,
            kind,
            base_scale,
            tree_position,
            scatter_position,
            transform: Transform::with_uniform_scale(base_scale),
            style: None,
            card: None,
        }
    }

    #[inline]
    pub fn is_photo(&self) -> bool {
        self.kind == ParticleKind::Photo
    }
}
