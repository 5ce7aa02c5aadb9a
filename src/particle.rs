//! Per-particle simulation state.
//!
//! A particle alternates between two states:
//!
//! | State | Description |
//! |-------|-------------|
//! | Traveling | Inside the valid band, moves one increment along the fall direction per frame |
//! | Respawning | Left the band; regenerated on an upstream edge within the same frame |
//!
//! Respawning is instantaneous, and particles never die on their own. They
//! are only removed when the owning [`ParticleSystem`](crate::ParticleSystem)
//! shrinks.

use crate::config::SimulationConfig;
use crate::geometry::Quad;
use crate::projector;
use glam::DVec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// Fraction of the viewport's unit span covered per frame at speed 1.
pub const BASE_RATE: f64 = 0.01;

/// Maximum extra speed a particle may get on top of the global speed.
pub const SPEED_JITTER_RANGE: f64 = 0.2;

/// Outcome of a single [`Particle::update_position`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The particle moved one increment along the fall direction.
    Traveled,
    /// The particle had left the valid band and was regenerated on an edge.
    Respawned,
}

/// One falling, spinning particle.
#[derive(Clone, Debug)]
pub struct Particle {
    x: f64,
    y: f64,
    size: f64,
    speed_jitter: f64,
    spin_phase: f64,
    current_spin: f64,
    /// Render output of the last update. Derived, never read back by the simulation.
    quad: Quad,
    rng: SmallRng,
}

impl Particle {
    /// Create a particle scattered somewhere inside the viewport.
    ///
    /// Size, jitter and spin phase come from [`generate`](Self::generate);
    /// the edge position it picks is then replaced by a uniform random one
    /// so the first frame is already filled.
    pub fn new(config: &SimulationConfig, rng: SmallRng) -> Self {
        let mut particle = Self {
            x: 0.0,
            y: 0.0,
            size: 0.0,
            speed_jitter: 1.0,
            spin_phase: 0.0,
            current_spin: 0.0,
            quad: Quad::default(),
            rng,
        };
        particle.generate(config);

        let max = 1.0 - particle.movement_increment(config);
        particle.x = particle.rng.gen::<f64>() * max;
        particle.y = particle.rng.gen::<f64>() * max;
        particle.project(config);
        particle
    }

    /// Re-roll size, jitter and spin phase, and place the particle on the
    /// edge it should enter from.
    ///
    /// The horizontal (top or bottom) edge is picked with probability
    /// `|cos(angle)|`, otherwise a vertical one, so each edge receives
    /// particles at the rate they leave through the opposite edge.
    pub fn generate(&mut self, config: &SimulationConfig) {
        self.speed_jitter = 1.0 + self.rng.gen::<f64>() * SPEED_JITTER_RANGE;

        let (min_size, max_size) = config.size_range();
        self.size = min_size + self.rng.gen::<f64>() * (max_size - min_size);

        self.spin_phase = self.rng.gen();

        let inc = self.movement_increment(config);
        let (sin, cos) = config.fall_direction();

        if self.rng.gen::<f64>() < cos.abs() {
            self.x = self.rng.gen::<f64>() * (1.0 - inc);
            self.y = if cos >= 0.0 { inc } else { 1.0 - inc };
        } else {
            self.x = if sin >= 0.0 { inc } else { 1.0 - inc };
            self.y = self.rng.gen::<f64>() * (1.0 - inc);
        }
    }

    /// Distance in particle space covered per frame.
    #[inline]
    pub fn movement_increment(&self, config: &SimulationConfig) -> f64 {
        config.speed * self.speed_jitter * BASE_RATE
    }

    /// Advance one frame and refresh the render quad.
    pub fn update_position(&mut self, config: &SimulationConfig) -> Step {
        let inc = self.movement_increment(config);

        let step = if self.is_outside_band(inc) {
            self.generate(config);
            Step::Respawned
        } else {
            let (sin, cos) = config.fall_direction();
            self.x += inc * sin;
            self.y += inc * cos;
            self.current_spin =
                ((sin * self.x + cos * self.y) * self.spin_phase * config.spin_speed).cos();
            Step::Traveled
        };

        self.project(config);
        step
    }

    #[inline]
    fn is_outside_band(&self, inc: f64) -> bool {
        self.x > 1.0 - inc || self.x < inc || self.y > 1.0 - inc || self.y < inc
    }

    fn project(&mut self, config: &SimulationConfig) {
        self.quad = projector::project(
            &config.projection_rect(),
            config.particle_half_extent,
            self.x,
            self.y,
            self.size,
            config.spin_orientation,
            self.current_spin,
        );
    }

    // ========== Accessors ==========

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Particle-space position.
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn speed_jitter(&self) -> f64 {
        self.speed_jitter
    }

    #[inline]
    pub fn spin_phase(&self) -> f64 {
        self.spin_phase
    }

    /// Spin value from the last traveled frame, in `[-1, 1]`.
    #[inline]
    pub fn current_spin(&self) -> f64 {
        self.current_spin
    }

    /// Clamped pixel-space quad from the last update.
    #[inline]
    pub fn quad(&self) -> &Quad {
        &self.quad
    }
}
