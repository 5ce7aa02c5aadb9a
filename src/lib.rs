//! # snowfall
//!
//! A field of falling, spinning particles (snow, petals, confetti) confined
//! to a rectangular viewport.
//!
//! snowfall only simulates. It owns no window, no clock and no GPU state:
//! the host calls [`ParticleSystem::advance_frame`] once per tick and draws
//! the flat batch of [`Quad`]s it gets back however it likes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use snowfall::prelude::*;
//!
//! let mut snow = ParticleSystem::new(
//!     SimulationConfig::snow()
//!         .with_particle_count(200)
//!         .with_viewport(Rect::from_size(1280.0, 720.0)),
//! );
//!
//! loop {
//!     snow.advance_frame();
//!     snow.for_each_particle(|quad, _size| {
//!         draw_image(quad.left, quad.top, quad.right, quad.bottom);
//!     });
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particle space
//!
//! Positions are normalized to `[0, 1] x [0, 1]`, independent of the
//! viewport's pixel size. Each frame a particle moves by its *movement
//! increment* (`speed * jitter * 0.01`) along the fall angle. Once it leaves
//! the band `[increment, 1 - increment]` it respawns on whichever edge lies
//! upstream of the fall direction.
//!
//! ### Spin
//!
//! Spin is faked by foreshortening the particle's quad along one
//! [`Axis`]. The spin value depends on distance travelled, not on time, so
//! every particle tumbles at its own pace.
//!
//! ### Reconciling
//!
//! [`ParticleSystem::reconcile`] grows the field in place when the count
//! rises, and rebuilds it when the count drops or the [`Sprite`] changes.
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Update particles across threads with rayon |

pub mod config;
pub mod error;
pub mod geometry;
pub mod particle;
pub mod projector;
pub mod sprite;
mod system;

pub use config::{Axis, SimulationConfig};
pub use error::SpriteError;
pub use geometry::{Quad, QuadInstance, Rect};
pub use glam::DVec2;
pub use particle::{Particle, Step};
pub use projector::project;
pub use sprite::Sprite;
pub use system::{ParticleSystem, DEFAULT_SIGNATURE};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use snowfall::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Axis, SimulationConfig};
    pub use crate::geometry::{Quad, QuadInstance, Rect};
    pub use crate::particle::{Particle, Step};
    pub use crate::sprite::Sprite;
    pub use crate::system::ParticleSystem;
    pub use crate::DVec2;
}
