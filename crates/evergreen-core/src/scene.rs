//! The choreographed scene: particle set, rotating parent group, fairy
//! lights and snow, advanced once per visual frame.

use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use rand::prelude::*;

use crate::animator::ParticleAnimator;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::fairy::FairyLightAnimator;
use crate::layout::sample_scatter;
use crate::particle::{OrnamentStyle, Particle, ParticleId, ParticleKind, PhotoCard, Transform};
use crate::snow::SnowField;
use crate::state::{SceneMode, SceneState};

// Billboard sizes per kind, in world units at scale 1
const ORNAMENT_SIZE: f32 = 0.7;
const LIGHT_SIZE: f32 = 0.3;
const STAR_SIZE: f32 = 3.2;
const SNOW_SIZE: f32 = 0.5;
const SNOW_ALPHA: f32 = 0.4;
const STAR_RGB: [f32; 3] = [1.0, 0.867, 0.533];
const PHOTO_RGB: [f32; 3] = [0.96, 0.835, 0.63];

/// One instanced billboard as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Instance {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub glow: f32,
}

pub struct Scene {
    config: SceneConfig,
    particles: Vec<Particle>,
    photos: Vec<ParticleId>,
    lights: Range<usize>,
    group: Transform,
    fairy: FairyLightAnimator,
    snow: SnowField,
    camera_eye: Vec3,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let snow = SnowField::new(config.snow.clone(), config.seed ^ 0x5EED_5A0F)?;
        let mut fairy = FairyLightAnimator::new(&config.fairy);
        let capacity = config.fairy.count + config.ornament_count;
        let mut particles: Vec<Particle> = Vec::with_capacity(capacity);

        for _ in 0..config.fairy.count {
            let id = ParticleId(particles.len() as u32);
            let tree = config.tree.sample_fairy(&mut rng);
            let scatter = sample_scatter(&mut rng);
            let mut p = Particle::new(id, ParticleKind::Light, 1.0, tree, scatter);
            p.transform.translation = tree;
            fairy.add(id, &mut rng);
            particles.push(p);
        }
        let lights = 0..particles.len();

        for _ in 0..config.ornament_count {
            let id = ParticleId(particles.len() as u32);
            let style = OrnamentStyle::from_unit(rng.gen());
            let base = ORNAMENT_SCALE_MIN + rng.gen::<f32>() * ORNAMENT_SCALE_SPAN;
            let tree = config.tree.sample_ornament(&mut rng);
            let scatter = sample_scatter(&mut rng);
            let mut p = Particle::new(id, ParticleKind::Ornament, base, tree, scatter);
            p.style = Some(style);
            particles.push(p);
        }

        log::info!(
            "[scene] lights={} ornaments={} snow={}",
            config.fairy.count,
            config.ornament_count,
            snow.len()
        );

        Ok(Self {
            config,
            particles,
            photos: Vec::new(),
            lights,
            group: Transform::default(),
            fairy,
            snow,
            camera_eye: camera_eye_vec3(),
            rng,
        })
    }

    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    /// Ids of every photo added so far; the focus draw picks from these.
    #[inline]
    pub fn photo_ids(&self) -> &[ParticleId] {
        &self.photos
    }

    /// World transform of the group that holds the tree.
    #[inline]
    pub fn group(&self) -> &Transform {
        &self.group
    }

    #[inline]
    pub fn fairy(&self) -> &FairyLightAnimator {
        &self.fairy
    }

    #[inline]
    pub fn snow(&self) -> &SnowField {
        &self.snow
    }

    #[inline]
    pub fn camera_eye(&self) -> Vec3 {
        self.camera_eye
    }

    pub fn star_position(&self) -> Vec3 {
        self.config.tree.star_position()
    }

    /// Add a photo whose image is `aspect` (width / height). Photos arrive as
    /// their images finish loading, so this is called after construction.
    pub fn add_photo(&mut self, aspect: f32) -> ParticleId {
        let id = ParticleId(self.particles.len() as u32);
        let tree = self.config.tree.sample_ornament(&mut self.rng);
        let scatter = sample_scatter(&mut self.rng);
        let mut p = Particle::new(id, ParticleKind::Photo, PHOTO_BASE_SCALE, tree, scatter);
        p.card = Some(PhotoCard::fit(aspect));
        self.particles.push(p);
        self.photos.push(id);
        log::debug!("[scene] photo {:?} added, {} total", id, self.photos.len());
        id
    }

    /// Advance one visual frame. `elapsed` is seconds since the scene started.
    pub fn advance(&mut self, dt: f32, elapsed: f32, state: &SceneState) {
        match state.mode() {
            SceneMode::Tree => self.group.rotation.y += TREE_GROUP_SPIN * dt,
            SceneMode::Scatter => self.group.rotation.y += SCATTER_GROUP_SPIN * dt,
            SceneMode::Focus => {}
        }

        let animator = ParticleAnimator::new(dt, state, &self.group, self.camera_eye);
        animator.animate_all(&mut self.particles);

        self.fairy.update(elapsed);
        self.snow.advance(dt);
    }

    /// Flatten the scene into world-space billboards, reusing `out`.
    pub fn write_instances(&self, out: &mut Vec<Instance>) {
        out.clear();
        let group = self.group.matrix();

        for (i, light) in self.fairy.lights().iter().enumerate() {
            let p = &self.particles[self.lights.start + i];
            let glow = light.intensity / self.fairy.base_intensity();
            out.push(Instance {
                pos: group.transform_point3(p.transform.translation).to_array(),
                scale: p.transform.scale.x * LIGHT_SIZE,
                color: rgba(light.color_rgb, 1.0),
                glow,
            });
        }

        for p in &self.particles[self.lights.end..] {
            let (size, rgb) = match p.kind {
                ParticleKind::Photo => {
                    let card = p.card.unwrap_or(PhotoCard::fit(1.0));
                    (card.width.max(card.height), PHOTO_RGB)
                }
                _ => (
                    ORNAMENT_SIZE,
                    p.style.map(|s| s.color_rgb()).unwrap_or(PHOTO_RGB),
                ),
            };
            out.push(Instance {
                pos: group.transform_point3(p.transform.translation).to_array(),
                scale: p.transform.scale.x * size,
                color: rgba(rgb, 1.0),
                glow: 0.0,
            });
        }

        out.push(Instance {
            pos: group.transform_point3(self.star_position()).to_array(),
            scale: STAR_SIZE,
            color: rgba(STAR_RGB, 1.0),
            glow: 1.0,
        });

        for pos in self.snow.positions() {
            out.push(Instance {
                pos: pos.to_array(),
                scale: SNOW_SIZE,
                color: [1.0, 1.0, 1.0, SNOW_ALPHA],
                glow: 0.0,
            });
        }
    }
}

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}
