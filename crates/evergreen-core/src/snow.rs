//! Falling snow: a fixed pool of points that fall and respawn forever.
//!
//! The field ignores the scene mode entirely. It may be stepped at a reduced
//! cadence; skipped frames bank their `dt`, and the next update applies the
//! whole banked interval so the fall speed does not depend on the cadence.

use glam::Vec3;
use rand::prelude::*;

use crate::error::ConfigError;

/// Snow field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct SnowConfig {
    pub count: usize,
    /// Update on every `every`-th frame (1 = every frame).
    pub every: u32,
    /// Units of height per unit velocity per second.
    pub fall_rate: f32,
    pub velocity_min: f32,
    pub velocity_max: f32,
    /// Points below this height are recycled.
    pub floor: f32,
    /// Initial heights are drawn from `[spawn_min, respawn_max)`.
    pub spawn_min: f32,
    /// Recycled points reappear in `[respawn_min, respawn_max)`.
    pub respawn_min: f32,
    pub respawn_max: f32,
    /// Horizontal footprint: x in `[x_min, x_max)`, z in `[z_min, z_max)`.
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            every: 2,
            fall_rate: 15.0,
            velocity_min: 0.4,
            velocity_max: 1.2,
            floor: -10.0,
            spawn_min: 10.0,
            respawn_min: 40.0,
            respawn_max: 50.0,
            x_min: -60.0,
            x_max: 60.0,
            z_min: -50.0,
            z_max: 30.0,
        }
    }
}

impl SnowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.every == 0 {
            return Err(ConfigError::Zero { name: "snow.every" });
        }
        if self.fall_rate.is_nan() || self.fall_rate <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "snow.fall_rate",
                value: self.fall_rate,
            });
        }
        if self.velocity_min.is_nan() || self.velocity_min <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "snow.velocity_min",
                value: self.velocity_min,
            });
        }
        for (name, min, max) in [
            ("snow.velocity", self.velocity_min, self.velocity_max),
            ("snow.spawn", self.spawn_min, self.respawn_max),
            ("snow.respawn", self.respawn_min, self.respawn_max),
            ("snow.floor", self.floor, self.respawn_min),
            ("snow.x", self.x_min, self.x_max),
            ("snow.z", self.z_min, self.z_max),
        ] {
            if !(min < max) {
                return Err(ConfigError::EmptyRange { name, min, max });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn in_footprint(&self, p: Vec3) -> bool {
        (self.x_min..self.x_max).contains(&p.x) && (self.z_min..self.z_max).contains(&p.z)
    }
}

pub struct SnowField {
    config: SnowConfig,
    positions: Vec<Vec3>,
    velocities: Vec<f32>,
    rng: StdRng,
    frame: u32,
    banked_dt: f32,
}

impl SnowField {
    /// Build the pool. Fails if `config` does not validate.
    pub fn new(config: SnowConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(config.count);
        let mut velocities = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let x = rng.gen_range(config.x_min..config.x_max);
            let y = rng.gen_range(config.spawn_min..config.respawn_max);
            let z = rng.gen_range(config.z_min..config.z_max);
            positions.push(Vec3::new(x, y, z));
            velocities.push(rng.gen_range(config.velocity_min..config.velocity_max));
        }
        Ok(Self {
            config,
            positions,
            velocities,
            rng,
            frame: 0,
            banked_dt: 0.0,
        })
    }

    #[inline]
    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Point positions, laid out for direct upload as a vertex buffer.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Per-frame entry point honoring the configured cadence.
    ///
    /// Returns `true` when the positions changed this frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.banked_dt += dt;
        self.frame = self.frame.wrapping_add(1);
        if self.frame % self.config.every != 0 {
            return false;
        }
        let step = std::mem::take(&mut self.banked_dt);
        self.step(step);
        true
    }

    /// Move every point down by `velocity * dt * fall_rate`, recycling any
    /// point that drops below the floor.
    pub fn step(&mut self, dt: f32) {
        let c = &self.config;
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            p.y -= v * dt * c.fall_rate;
            if p.y < c.floor {
                p.y = self.rng.gen_range(c.respawn_min..c.respawn_max);
                p.x = self.rng.gen_range(c.x_min..c.x_max);
                p.z = self.rng.gen_range(c.z_min..c.z_max);
            }
        }
    }

    /// Place point `index` at `position`; used to stage specific layouts.
    pub fn place(&mut self, index: usize, position: Vec3) {
        if let Some(p) = self.positions.get_mut(index) {
            *p = position;
        }
    }
}
