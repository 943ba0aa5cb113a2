//! Particle network simulation behind the landing page.
//!
//! `ParticleField` owns every particle plus the bounds they bounce inside.
//! The web front-end steps it from its animation loop and reads particles and
//! links back to draw them; nothing here touches a drawing surface.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Tuning for a particle field. `Default` mirrors the page's constants.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub area_per_particle: u64,
    pub link_distance: f32,
    pub radius: f32,
    pub max_speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            radius: PARTICLE_RADIUS,
            max_speed: PARTICLE_MAX_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Reflect off the bounds, then integrate one step.
    pub fn update(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
        self.position += self.velocity;
    }
}

/// A connection between particles `a < b` closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    pub opacity: f32,
}

/// Number of particles for a `width` x `height` surface.
pub fn particle_count(width: u32, height: u32, area_per_particle: u64) -> usize {
    if area_per_particle == 0 {
        return 0;
    }
    ((width as u64 * height as u64) / area_per_particle) as usize
}

/// Line opacity for two particles `distance` apart, `None` when they are too
/// far apart to be linked. Fades linearly from 1 at contact to 0 at `max`.
#[inline]
pub fn link_opacity(distance: f32, max: f32) -> Option<f32> {
    if distance < max {
        Some(1.0 - distance / max)
    } else {
        None
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    config: ParticleConfig,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: u32, height: u32, config: ParticleConfig, seed: u64) -> Self {
        Self::with_rng(width, height, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(width: u32, height: u32, config: ParticleConfig, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds: Vec2::ZERO,
            config,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Adopt new bounds and replace the whole particle set.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = Vec2::new(width as f32, height as f32);
        let count = particle_count(width, height, self.config.area_per_particle);
        let max_speed = self.config.max_speed;
        let radius = self.config.radius;
        let bounds = self.bounds;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
                    (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
                ),
                radius,
            })
            .collect();
        log::debug!(
            "[particles] regenerated {} particles for {}x{}",
            self.particles.len(),
            width,
            height
        );
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Every unique pair closer than the link distance. O(n²) per call.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        let max = self.config.link_distance;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                let distance = ps[a].position.distance(ps[b].position);
                link_opacity(distance, max).map(|opacity| Link {
                    a,
                    b,
                    distance,
                    opacity,
                })
            })
        })
    }
}
