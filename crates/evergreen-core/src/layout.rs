//! Rest positions for the two arrangements.
//!
//! Tree positions wind up a cone whose radius shrinks linearly with height;
//! scatter positions sit on spherical shells of random radius around the
//! origin. Both are sampled once per particle and never change.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use crate::constants::*;
use crate::error::ConfigError;

/// Conical envelope of the tree, centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeShape {
    pub height: f32,
    pub radius: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            height: TREE_HEIGHT,
            radius: TREE_RADIUS,
        }
    }
}

impl TreeShape {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height.is_nan() || self.height <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "tree.height",
                value: self.height,
            });
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "tree.radius",
                value: self.radius,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn base_y(&self) -> f32 {
        -self.height / 2.0
    }

    #[inline]
    pub fn tip_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Star position in group space.
    pub fn star_position(&self) -> Vec3 {
        Vec3::new(0.0, self.tip_y() + STAR_LIFT, 0.0)
    }

    /// Normalized height of `y` along the trunk, 0 at the base and 1 at the tip.
    #[inline]
    pub fn height_fraction(&self, y: f32) -> f32 {
        (y - self.base_y()) / self.height
    }

    /// Largest horizontal radius an ornament may sit at, at height fraction `t`.
    ///
    /// This is the cone radius `R(1 - t)`, floored near the tip and widened by
    /// the maximum jitter applied in [`TreeShape::sample_ornament`].
    pub fn envelope_radius(&self, t: f32) -> f32 {
        (self.radius * (1.0 - t)).max(TREE_MIN_RADIUS) * 1.2
    }

    /// Whether `p` lies inside the tree envelope.
    pub fn contains(&self, p: Vec3) -> bool {
        let t = self.height_fraction(p.y);
        if !(0.0..=1.0).contains(&t) {
            return false;
        }
        let r = (p.x * p.x + p.z * p.z).sqrt();
        r <= self.envelope_radius(t) + 1e-4
    }

    /// Ornament rest position: denser toward the base, on a tight spiral.
    pub fn sample_ornament<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let t = rng.gen::<f32>().powf(TREE_HEIGHT_BIAS);
        let y = t * self.height - self.height / 2.0;
        let max_r = self.radius * (1.0 - t);
        let r = max_r.max(TREE_MIN_RADIUS) * (0.7 + rng.gen::<f32>() * 0.5);
        let angle = t * TREE_SPIRAL_TURNS * PI;
        Vec3::new(angle.cos() * r, y, angle.sin() * r)
    }

    /// Fairy light rest position on a looser garland spiral.
    pub fn sample_fairy<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let t = rng.gen::<f32>();
        let y = t * self.height - self.height / 2.0;
        let r = self.radius * (1.0 - t) * (0.7 + rng.gen::<f32>() * 0.4);
        let angle = t * FAIRY_SPIRAL_TURNS * PI;
        Vec3::new(angle.cos() * r, y, angle.sin() * r)
    }
}

/// Scatter rest position: uniform direction on a shell of radius in
/// `[SCATTER_RADIUS_MIN, SCATTER_RADIUS_MIN + SCATTER_RADIUS_SPAN)`.
pub fn sample_scatter<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let radius = SCATTER_RADIUS_MIN + rng.gen::<f32>() * SCATTER_RADIUS_SPAN;
    let theta = rng.gen::<f32>() * PI * 2.0;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
