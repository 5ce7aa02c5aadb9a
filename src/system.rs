//! The particle field aggregate.

use crate::config::{Axis, SimulationConfig};
use crate::geometry::{Quad, QuadInstance, Rect};
use crate::particle::{Particle, Step};
use crate::sprite::Sprite;
use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Signature used until the host names an asset.
pub const DEFAULT_SIGNATURE: u64 = 0;

/// An ordered collection of particles plus the parameters that drive them.
///
/// The host owns the frame loop: it calls [`advance_frame`](Self::advance_frame)
/// once per tick, then reads render instructions with
/// [`for_each_particle`](Self::for_each_particle) or [`quads`](Self::quads).
///
/// ```ignore
/// let mut snow = ParticleSystem::new(
///     SimulationConfig::snow().with_viewport(Rect::from_size(1280.0, 720.0)),
/// );
///
/// // Every frame:
/// snow.advance_frame();
/// snow.for_each_particle(|quad, size| renderer.draw(quad, size));
///
/// // On resize:
/// snow.set_viewport(Rect::from_size(width, height));
/// ```
pub struct ParticleSystem {
    config: SimulationConfig,
    particles: Vec<Particle>,
    /// Asset the current particles were generated against.
    signature: u64,
    /// Seeds each new particle's own RNG.
    rng: SmallRng,
    warned_degraded: bool,
    warned_reversed_sizes: bool,
}

impl ParticleSystem {
    /// Create a system seeded from OS entropy and fill it to
    /// `config.particle_count`.
    pub fn new(config: SimulationConfig) -> Self {
        Self::from_rng(config, SmallRng::from_entropy())
    }

    /// Create a reproducible system. Two systems with the same seed and
    /// the same sequence of calls produce identical particles.
    pub fn seeded(config: SimulationConfig, seed: u64) -> Self {
        Self::from_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: SimulationConfig, rng: SmallRng) -> Self {
        let count = config.particle_count;
        let mut system = Self {
            config,
            particles: Vec::new(),
            signature: DEFAULT_SIGNATURE,
            rng,
            warned_degraded: false,
            warned_reversed_sizes: false,
        };
        system.reconcile(count, DEFAULT_SIGNATURE);
        system
    }

    /// Bring the collection to `desired_count` particles generated against
    /// the asset identified by `source_signature`.
    ///
    /// Growing with an unchanged asset appends fresh particles and leaves
    /// the existing ones untouched. Shrinking, or changing the asset while
    /// particles exist, discards everything and rebuilds from zero.
    pub fn reconcile(&mut self, desired_count: u32, source_signature: u64) {
        let desired = desired_count as usize;
        let asset_changed = !self.particles.is_empty() && self.signature != source_signature;

        if asset_changed || desired < self.particles.len() {
            debug!(
                "Rebuilding particle field: {} -> {} particles (asset changed: {})",
                self.particles.len(),
                desired,
                asset_changed
            );
            self.particles.clear();
        }

        self.signature = source_signature;
        self.config.particle_count = desired_count;

        let missing = desired - self.particles.len();
        if missing == 0 {
            return;
        }
        debug!("Spawning {} particles ({} total)", missing, desired);

        let config = &self.config;
        let rng = &mut self.rng;
        self.particles.reserve(missing);
        self.particles.extend(
            (0..missing).map(|_| Particle::new(config, SmallRng::seed_from_u64(rng.gen()))),
        );
    }

    /// Advance every particle by one frame.
    pub fn advance_frame(&mut self) {
        self.warn_on_degenerate_config();

        let config = &self.config;

        #[cfg(feature = "parallel")]
        let respawned = {
            use rayon::prelude::*;
            self.particles
                .par_iter_mut()
                .map(|p| p.update_position(config))
                .filter(|step| *step == Step::Respawned)
                .count()
        };

        #[cfg(not(feature = "parallel"))]
        let respawned = self
            .particles
            .iter_mut()
            .map(|p| p.update_position(config))
            .filter(|step| *step == Step::Respawned)
            .count();

        trace!(
            "Advanced {} particles ({} respawned)",
            self.particles.len(),
            respawned
        );
    }

    fn warn_on_degenerate_config(&mut self) {
        if self.config.viewport.is_none() {
            if !self.warned_degraded {
                warn!(
                    "No viewport set; projecting into display bounds {:?} minus the particle extent",
                    self.config.display_bounds
                );
                self.warned_degraded = true;
            }
        } else {
            self.warned_degraded = false;
        }

        if self.config.size_range_reversed() {
            if !self.warned_reversed_sizes {
                warn!(
                    "min_size {} is greater than max_size {}; sampling between them anyway",
                    self.config.min_size, self.config.max_size
                );
                self.warned_reversed_sizes = true;
            }
        } else {
            self.warned_reversed_sizes = false;
        }
    }

    // ========== Render output ==========

    /// Visit every particle's render quad and size multiplier in order.
    pub fn for_each_particle<F>(&self, mut f: F)
    where
        F: FnMut(&Quad, f64),
    {
        for particle in &self.particles {
            f(particle.quad(), particle.size());
        }
    }

    /// The whole field as one flat batch of quads.
    pub fn quads(&self) -> Vec<Quad> {
        self.particles.iter().map(|p| *p.quad()).collect()
    }

    /// The whole field as single-precision instance records.
    pub fn instances(&self) -> Vec<QuadInstance> {
        self.particles
            .iter()
            .map(|p| QuadInstance::new(p.quad(), p.size()))
            .collect()
    }

    // ========== Host-facing setters ==========

    /// Replace the drawable bounds. Takes effect on the next frame.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.config.viewport = Some(viewport);
    }

    /// Drop the viewport and fall back to the display bounds.
    pub fn clear_viewport(&mut self) {
        self.config.viewport = None;
    }

    /// Change the particle count, keeping the current asset.
    pub fn set_particle_count(&mut self, count: u32) {
        self.reconcile(count, self.signature);
    }

    /// Switch to a different particle image.
    ///
    /// A sprite with a new signature rebuilds the whole field.
    pub fn set_sprite(&mut self, sprite: Sprite) {
        self.config.particle_half_extent = sprite.half_extent;
        self.reconcile(self.config.particle_count, sprite.signature);
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.config.speed = speed;
    }

    pub fn set_size_range(&mut self, min_size: f64, max_size: f64) {
        self.config.min_size = min_size;
        self.config.max_size = max_size;
    }

    pub fn set_fall_angle(&mut self, degrees: f64) {
        self.config.fall_angle_degrees = degrees;
    }

    pub fn set_spin_speed(&mut self, spin_speed: f64) {
        self.config.spin_speed = spin_speed;
    }

    pub fn set_spin_orientation(&mut self, orientation: Option<Axis>) {
        self.config.spin_orientation = orientation;
    }

    /// Replace every parameter at once.
    ///
    /// This does not reconcile; call [`reconcile`](Self::reconcile) if the
    /// particle count or asset changed.
    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
    }

    // ========== Accessors ==========

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Mutable access to the parameters. Changes apply from the next frame;
    /// count changes still need [`reconcile`](Self::reconcile).
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Signature of the asset the current particles belong to.
    pub fn signature(&self) -> u64 {
        self.signature
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
