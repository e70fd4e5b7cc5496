//! Fairy-light flicker.
//!
//! Each light owns a random phase; brightness is a sine of elapsed time
//! offset by that phase, so the garland shimmers out of step.

use std::f32::consts::TAU;

use rand::Rng;

use crate::constants::{FAIRY_FLICKER_CENTER, FAIRY_FLICKER_DEPTH, FAIRY_FLICKER_RATE};
use crate::error::ConfigError;
use crate::particle::ParticleId;

pub const FAIRY_RED: [f32; 3] = [1.0, 0.267, 0.267];
pub const FAIRY_YELLOW: [f32; 3] = [1.0, 1.0, 0.533];

#[derive(Clone, Debug, PartialEq)]
pub struct FairyConfig {
    pub count: usize,
    pub base_intensity: f32,
    /// Phase advance per second of elapsed time.
    pub flicker_rate: f32,
}

impl Default for FairyConfig {
    fn default() -> Self {
        Self {
            count: 120,
            base_intensity: 1.8,
            flicker_rate: FAIRY_FLICKER_RATE,
        }
    }
}

impl FairyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_intensity.is_nan() || self.base_intensity <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "fairy.base_intensity",
                value: self.base_intensity,
            });
        }
        if !self.flicker_rate.is_finite() || self.flicker_rate <= 0.0 {
            return Err(ConfigError::NotPositive {
                name: "fairy.flicker_rate",
                value: self.flicker_rate,
            });
        }
        Ok(())
    }
}

/// `base * (0.8 + 0.4 * sin(time + phase))`, always within `[0.4, 1.2] * base`.
#[inline]
pub fn flicker(base: f32, time: f32, phase: f32) -> f32 {
    base * (FAIRY_FLICKER_CENTER + FAIRY_FLICKER_DEPTH * (time + phase).sin())
}

#[derive(Clone, Debug)]
pub struct FairyLight {
    pub particle: ParticleId,
    pub phase: f32,
    pub color_rgb: [f32; 3],
    pub intensity: f32,
}

pub struct FairyLightAnimator {
    base_intensity: f32,
    flicker_rate: f32,
    lights: Vec<FairyLight>,
}

impl FairyLightAnimator {
    pub fn new(config: &FairyConfig) -> Self {
        Self {
            base_intensity: config.base_intensity,
            flicker_rate: config.flicker_rate,
            lights: Vec::with_capacity(config.count),
        }
    }

    /// Register the light drawn by `particle` with a random phase and colour.
    pub fn add<R: Rng + ?Sized>(&mut self, particle: ParticleId, rng: &mut R) {
        let color_rgb = if rng.gen::<f32>() > 0.5 {
            FAIRY_RED
        } else {
            FAIRY_YELLOW
        };
        self.lights.push(FairyLight {
            particle,
            phase: rng.gen::<f32>() * TAU,
            color_rgb,
            intensity: self.base_intensity,
        });
    }

    #[inline]
    pub fn base_intensity(&self) -> f32 {
        self.base_intensity
    }

    #[inline]
    pub fn lights(&self) -> &[FairyLight] {
        &self.lights
    }

    pub fn light_for(&self, particle: ParticleId) -> Option<&FairyLight> {
        self.lights.iter().find(|l| l.particle == particle)
    }

    /// Recompute every light's intensity for `elapsed` seconds since start.
    pub fn update(&mut self, elapsed: f32) {
        let time = elapsed * self.flicker_rate;
        for light in &mut self.lights {
            light.intensity = flicker(self.base_intensity, time, light.phase);
        }
    }
}
