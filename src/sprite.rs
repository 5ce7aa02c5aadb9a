//! Visual asset descriptors.
//!
//! The simulation never touches pixels. It only needs to know how large the
//! particle image is (its half extent) and whether the image has changed
//! since the particles were generated (its signature). A [`Sprite`] carries
//! exactly those two things.
//!
//! A built-in snowflake image is provided for hosts that have no asset of
//! their own:
//!
//! ```ignore
//! let image = snowfall::sprite::snowflake();
//! let sprite = Sprite::from_image(&image)?;
//! system.set_sprite(sprite);
//! ```

use crate::error::SpriteError;
use glam::DVec2;
use image::{Rgba, RgbaImage};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Width of the built-in snowflake in pixels.
pub const SNOWFLAKE_WIDTH: u32 = 19;
/// Height of the built-in snowflake in pixels.
pub const SNOWFLAKE_HEIGHT: u32 = 21;
/// Half extent of the built-in snowflake.
pub const SNOWFLAKE_HALF_EXTENT: DVec2 = DVec2::new(
    SNOWFLAKE_WIDTH as f64 / 2.0,
    SNOWFLAKE_HEIGHT as f64 / 2.0,
);
/// Color of the snowflake's set pixels (opaque light grey).
pub const SNOWFLAKE_COLOR: Rgba<u8> = Rgba([0xCC, 0xCC, 0xCC, 0xFF]);

const SNOWFLAKE_ROWS: [&str; SNOWFLAKE_HEIGHT as usize] = [
    ".........#.........",
    ".......#.#.#.......",
    "........###........",
    ".#..#..#.#.#..#..#.",
    "..#.#....#....#.#..",
    "...##....#....##...",
    ".####....#....####.",
    ".....#..###..#.....",
    "......#..#..#......",
    "....#..#.#.#..#....",
    "#######.###.#######",
    "....#..#.#.#..#....",
    "......#..#..#......",
    ".....#..###..#.....",
    ".####....#....####.",
    "...##....#....##...",
    "..#.#....#....#.#..",
    ".#..#..#.#.#..#..#.",
    "........###........",
    ".......#.#.#.......",
    "...................",
];

/// Size and identity of the image every particle is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    /// Half width and half height in pixels.
    pub half_extent: DVec2,
    /// Identity of the image. Particles are rebuilt when it changes.
    pub signature: u64,
}

impl Sprite {
    /// Describe an image by its pixel dimensions and a host-chosen identity.
    pub fn new(width: f64, height: f64, signature: u64) -> Self {
        Self {
            half_extent: DVec2::new(width / 2.0, height / 2.0),
            signature,
        }
    }

    /// Describe an in-memory image.
    ///
    /// The signature is a hash of the dimensions and pixel data, so two
    /// images with identical content share a signature.
    pub fn from_image(image: &RgbaImage) -> Result<Self, SpriteError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(SpriteError::EmptyImage { width, height });
        }

        let mut hasher = DefaultHasher::new();
        (width, height).hash(&mut hasher);
        image.as_raw().hash(&mut hasher);

        Ok(Self::new(width as f64, height as f64, hasher.finish()))
    }

    /// The built-in snowflake.
    pub fn snowflake() -> Self {
        // The generated image is never empty.
        Self::from_image(&snowflake()).unwrap_or(Self::new(
            SNOWFLAKE_WIDTH as f64,
            SNOWFLAKE_HEIGHT as f64,
            0,
        ))
    }
}

/// Generate the built-in 19x21 snowflake on a transparent background.
pub fn snowflake() -> RgbaImage {
    let mut image = RgbaImage::new(SNOWFLAKE_WIDTH, SNOWFLAKE_HEIGHT);
    for (y, row) in SNOWFLAKE_ROWS.iter().enumerate() {
        for (x, cell) in row.bytes().enumerate() {
            if cell == b'#' {
                image.put_pixel(x as u32, y as u32, SNOWFLAKE_COLOR);
            }
        }
    }
    image
}
