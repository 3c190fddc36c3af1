//! Sprite factory for random placement
//!
//! A [`SpriteFactory`] holds a pool of candidate images and an inclusive
//! spawn rectangle. Each generated sprite gets a uniformly random image and
//! position, with zero velocity and rotation.

use super::Sprite;
use crate::assets::image_loader::load_shared_images;
use crate::config::{Config, ConfigError};
use crate::render::SharedImage;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inclusive spawn rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpawnBounds {
    /// Minimum x position
    pub min_x: i32,
    /// Maximum x position (inclusive)
    pub max_x: i32,
    /// Minimum y position
    pub min_y: i32,
    /// Maximum y position (inclusive)
    pub max_y: i32,
}

impl SpawnBounds {
    /// Create spawn bounds from inclusive ranges
    #[must_use]
    pub const fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Reject inverted ranges on either axis
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_x > self.max_x {
            return Err(ConfigError::InvertedBounds {
                axis: "x",
                min: self.min_x,
                max: self.max_x,
            });
        }
        if self.min_y > self.max_y {
            return Err(ConfigError::InvertedBounds {
                axis: "y",
                min: self.min_y,
                max: self.max_y,
            });
        }
        Ok(())
    }

    /// Whether `(x, y)` lies inside the bounds
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

/// On-disk description of a sprite factory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Image files to choose from
    pub images: Vec<PathBuf>,
    /// Spawn rectangle
    pub bounds: SpawnBounds,
}

impl Config for SpawnConfig {}

/// Creates sprites at random positions from a pool of images
#[derive(Debug, Clone, Default)]
pub struct SpriteFactory {
    /// Candidate images, chosen uniformly
    pub images: Vec<SharedImage>,
    /// Spawn rectangle
    pub bounds: SpawnBounds,
}

impl SpriteFactory {
    /// Create a factory
    ///
    /// Nothing is validated here; misconfiguration is reported by
    /// [`Self::generate_sprite`].
    #[must_use]
    pub const fn new(images: Vec<SharedImage>, bounds: SpawnBounds) -> Self {
        Self { images, bounds }
    }

    /// Build a factory by loading every image named in `config`
    pub fn from_config(config: &SpawnConfig) -> Result<Self, ConfigError> {
        config.bounds.validate()?;
        let images = load_shared_images(config.images.as_slice())?;
        log::debug!(
            "Sprite factory configured with {} images in {:?}",
            images.len(),
            config.bounds
        );
        Ok(Self::new(images, config.bounds))
    }

    /// Generate a sprite with a random image and position
    ///
    /// Fails with [`ConfigError::EmptyImagePool`] or
    /// [`ConfigError::InvertedBounds`] when the factory is misconfigured.
    pub fn generate_sprite<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Sprite, ConfigError> {
        self.bounds.validate()?;
        let image = self.images.choose(rng).ok_or(ConfigError::EmptyImagePool)?;

        let x = rng.gen_range(self.bounds.min_x..=self.bounds.max_x);
        let y = rng.gen_range(self.bounds.min_y..=self.bounds.max_y);
        log::debug!("Spawning sprite at ({}, {})", x, y);

        Ok(Sprite::new(image.clone()).with_position(x, y))
    }

    /// [`Self::generate_sprite`] using the thread-local random generator
    pub fn generate_sprite_thread_rng(&self) -> Result<Sprite, ConfigError> {
        self.generate_sprite(&mut rand::thread_rng())
    }

    /// Generate `count` sprites, stopping at the first configuration error
    pub fn generate_batch<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Vec<Sprite>, ConfigError> {
        (0..count).map(|_| self.generate_sprite(rng)).collect()
    }
}
