//! Error types for snowfall.
//!
//! The per-frame simulation never fails; degenerate parameters are
//! substituted instead of rejected. Only describing a visual asset can
//! go wrong.

use std::fmt;

/// Errors that can occur while building a [`Sprite`](crate::Sprite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// The image has no pixels along at least one axis.
    EmptyImage { width: u32, height: u32 },
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteError::EmptyImage { width, height } => write!(
                f,
                "Sprite image must have non-zero dimensions (got {}x{})",
                width, height
            ),
        }
    }
}

impl std::error::Error for SpriteError {}
