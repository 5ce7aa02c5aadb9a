//! Projection of particle-space coordinates into viewport pixels.
//!
//! Particles live in a unit square; the projector scales a position by the
//! viewport's far edges, offsets it by the image's half extent, applies
//! the spin foreshortening and clamps the result so nothing is drawn
//! outside the viewport.

use crate::config::Axis;
use crate::geometry::{Quad, Rect};
use glam::DVec2;

/// Map a normalized position to four clamped pixel-space edges.
///
/// * `viewport` - rectangle to scale into and clamp against
/// * `half_extent` - half width/height of the particle image in pixels
/// * `x`, `y` - particle-space position in `[0, 1]`
/// * `size` - per-particle size multiplier
/// * `spin_orientation` - which axis the spin foreshortens, if any
/// * `current_spin` - spin value in `[-1, 1]`
///
/// For `size >= 0` and `current_spin` in `[-1, 1]` the result always has
/// `left <= right` and `top <= bottom`.
pub fn project(
    viewport: &Rect,
    half_extent: DVec2,
    x: f64,
    y: f64,
    size: f64,
    spin_orientation: Option<Axis>,
    current_spin: f64,
) -> Quad {
    let pixel_x = x * viewport.max_x;
    let pixel_y = y * viewport.max_y;

    let (y_angle, x_angle) = foreshortening(spin_orientation, current_spin);

    // A negative spin flips the image; the extent itself stays positive.
    let half_w = (y_angle * half_extent.x * size).abs();
    let half_h = (x_angle * half_extent.y * size).abs();

    let center_x = pixel_x + half_extent.x;
    let center_y = pixel_y + half_extent.y;

    Quad {
        left: viewport.clamp_x(center_x - half_w),
        top: viewport.clamp_y(center_y - half_h),
        right: viewport.clamp_x(center_x + half_w),
        bottom: viewport.clamp_y(center_y + half_h),
    }
}

/// Width and height scale factors `(y_angle, x_angle)` for a spin value.
///
/// The axis not named by the orientation keeps a factor of `1.0`; with no
/// orientation both do.
#[inline]
pub fn foreshortening(spin_orientation: Option<Axis>, current_spin: f64) -> (f64, f64) {
    match spin_orientation {
        Some(Axis::Horizontal) => (current_spin, 1.0),
        Some(Axis::Vertical) => (1.0, current_spin),
        None => (1.0, 1.0),
    }
}
