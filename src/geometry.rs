//! Pixel-space rectangles and per-particle render instructions.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel space.
///
/// Used both for the drawable viewport and for the full display bounds
/// that stand in for it when no viewport is supplied.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Create a rectangle from its corner coordinates.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Clamp `x` into `[min_x, max_x]`.
    ///
    /// Written as `min(max(..))` instead of `f64::clamp` so an inverted
    /// rectangle degrades to `max_x` rather than panicking.
    #[inline]
    pub fn clamp_x(&self, x: f64) -> f64 {
        self.max_x.min(x.max(self.min_x))
    }

    /// Clamp `y` into `[min_y, max_y]`. See [`Rect::clamp_x`].
    #[inline]
    pub fn clamp_y(&self, y: f64) -> f64 {
        self.max_y.min(y.max(self.min_y))
    }
}

/// The four clamped edges of one particle's on-screen quadrilateral.
///
/// A flat batch of these is everything a renderer needs to draw the field
/// in one pass. The layout is `#[repr(C)]` and `Pod`, so a slice of quads
/// can be handed to `bytemuck::cast_slice` for upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Quad {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Quad {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Corners in perspective-transform order: upper-left, upper-right,
    /// lower-right, lower-left.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::new(self.left, self.top),
            DVec2::new(self.right, self.top),
            DVec2::new(self.right, self.bottom),
            DVec2::new(self.left, self.bottom),
        ]
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// A quad that has been clamped flat against a viewport edge covers
    /// no pixels and can be skipped by the renderer.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// GPU-friendly instance record: single precision edges plus the
/// particle's size multiplier, 16-byte aligned.
///
/// Built with [`QuadInstance::new`] or
/// [`ParticleSystem::instances`](crate::ParticleSystem::instances).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// `[left, top, right, bottom]`
    pub edges: [f32; 4],
    pub size: f32,
    _pad: [f32; 3],
}

impl QuadInstance {
    pub fn new(quad: &Quad, size: f64) -> Self {
        Self {
            edges: [
                quad.left as f32,
                quad.top as f32,
                quad.right as f32,
                quad.bottom as f32,
            ],
            size: size as f32,
            _pad: [0.0; 3],
        }
    }
}
