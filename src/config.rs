//! Simulation parameters shared by every particle.
//!
//! A [`SimulationConfig`] is read by each particle once per frame, so any
//! field may be changed between frames and takes effect on the next
//! [`advance_frame`](crate::ParticleSystem::advance_frame).
//!
//! # Presets
//!
//! ```ignore
//! let config = SimulationConfig::blizzard().with_viewport(Rect::from_size(800.0, 600.0));
//! ```

use crate::geometry::Rect;
use crate::sprite::SNOWFLAKE_HALF_EXTENT;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis around which particles appear to spin.
///
/// Spin is rendered as foreshortening: a `Horizontal` spin squeezes the
/// quad's width, a `Vertical` spin squeezes its height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Global tunables for a particle field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Target number of live particles.
    pub particle_count: u32,
    /// Global speed multiplier.
    pub speed: f64,
    /// Lower bound of the per-particle size multiplier.
    pub min_size: f64,
    /// Upper bound of the per-particle size multiplier.
    pub max_size: f64,
    /// Direction of travel in degrees. 0 falls straight down, 180 straight up.
    pub fall_angle_degrees: f64,
    /// Multiplier applied inside the spin phase function.
    pub spin_speed: f64,
    /// Spin axis, or `None` to draw particles without foreshortening.
    pub spin_orientation: Option<Axis>,
    /// Drawable bounds in pixels. `None` selects the degraded full-display mode.
    pub viewport: Option<Rect>,
    /// Half width and half height of the particle image, in pixels.
    pub particle_half_extent: DVec2,
    /// Full display bounds, used only when `viewport` is `None`.
    pub display_bounds: Rect,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            speed: 1.0,
            min_size: 0.4,
            max_size: 1.0,
            fall_angle_degrees: 0.0,
            spin_speed: 20.0,
            spin_orientation: Some(Axis::Horizontal),
            viewport: None,
            particle_half_extent: SNOWFLAKE_HALF_EXTENT,
            display_bounds: Rect::from_size(1920.0, 1080.0),
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // PRESETS
    // =========================================================================

    /// Gentle snowfall, straight down, spinning horizontally.
    pub fn snow() -> Self {
        Self::default()
    }

    /// Dense, fast snow driven sideways by the wind.
    pub fn blizzard() -> Self {
        Self {
            particle_count: 400,
            speed: 2.5,
            min_size: 0.3,
            max_size: 0.8,
            fall_angle_degrees: 30.0,
            spin_speed: 35.0,
            ..Default::default()
        }
    }

    /// Sparse, slow particles carried by a strong crosswind, without spin.
    pub fn drift() -> Self {
        Self {
            particle_count: 40,
            speed: 0.4,
            min_size: 0.6,
            max_size: 1.2,
            fall_angle_degrees: 60.0,
            spin_orientation: None,
            ..Default::default()
        }
    }

    // =========================================================================
    // BUILDER
    // =========================================================================

    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set both size bounds. The order of the two values does not matter.
    pub fn with_size_range(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn with_fall_angle(mut self, degrees: f64) -> Self {
        self.fall_angle_degrees = degrees;
        self
    }

    pub fn with_spin_speed(mut self, spin_speed: f64) -> Self {
        self.spin_speed = spin_speed;
        self
    }

    pub fn with_spin_orientation(mut self, orientation: Option<Axis>) -> Self {
        self.spin_orientation = orientation;
        self
    }

    pub fn with_viewport(mut self, viewport: Rect) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_half_extent(mut self, half_extent: DVec2) -> Self {
        self.particle_half_extent = half_extent;
        self
    }

    pub fn with_display_bounds(mut self, display: Rect) -> Self {
        self.display_bounds = display;
        self
    }

    // =========================================================================
    // DERIVED VALUES
    // =========================================================================

    /// `(sin, cos)` of the fall angle.
    #[inline]
    pub fn fall_direction(&self) -> (f64, f64) {
        self.fall_angle_degrees.to_radians().sin_cos()
    }

    /// Size bounds as an ordered `(low, high)` pair.
    ///
    /// Reversed bounds are swapped so sampling stays inside the interval the
    /// two values describe.
    #[inline]
    pub fn size_range(&self) -> (f64, f64) {
        if self.min_size <= self.max_size {
            (self.min_size, self.max_size)
        } else {
            (self.max_size, self.min_size)
        }
    }

    /// Whether `min_size` and `max_size` were supplied in reverse order.
    #[inline]
    pub fn size_range_reversed(&self) -> bool {
        self.min_size > self.max_size
    }

    /// Rectangle particles are projected into and clamped against.
    ///
    /// Without a viewport this is the display bounds shrunk by the image's
    /// full extent, anchored at the origin.
    pub fn projection_rect(&self) -> Rect {
        match self.viewport {
            Some(viewport) => viewport,
            None => Rect::from_size(
                self.display_bounds.max_x - 2.0 * self.particle_half_extent.x,
                self.display_bounds.max_y - 2.0 * self.particle_half_extent.y,
            ),
        }
    }
}
