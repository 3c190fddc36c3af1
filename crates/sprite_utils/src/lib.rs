//! # Sprite Utils
//!
//! Building blocks for 2D sprite-based games, designed to be driven by a
//! host game loop that calls update and draw once per frame.
//!
//! ## Features
//!
//! - **Sprites**: Image-backed entities with integer position, rotation and velocity
//! - **Pixel Collision**: Overlap tests based on non-transparent pixels, not bounding boxes
//! - **Spawning**: Random placement of sprites inside a configured rectangle
//! - **Transient Sprites**: Wrappers that expire after a logical lifetime
//! - **Raster Backend**: A software RGBA canvas for compositing and tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_utils::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ship: SharedImage = Arc::new(RasterImage::solid_color(8, 8, [255, 255, 255, 255]));
//!     let mut canvas = RasterImage::new(320, 240);
//!     let mut clock = GameClock::new();
//!
//!     let mut sprites = SpriteGroup::new();
//!     sprites.push(Sprite::new(ship.clone()).with_velocity(1.0, 0.0));
//!     sprites.push(TransientSprite::new(
//!         Sprite::new(ship).with_position(10, 10),
//!         clock.now(),
//!         Duration::from_secs(2),
//!     ));
//!
//!     for _ in 0..120 {
//!         clock.advance(Duration::from_millis(16));
//!         sprites.update_all(clock.now());
//!         sprites.draw_all(&mut canvas)?;
//!         sprites.prune();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;
pub mod sprite;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{image_loader::load_image, AssetError},
        config::{Config, ConfigError},
        foundation::{
            math::{rotate_point, Mat3, Point2i, Rect, Vec2},
            time::GameClock,
        },
        render::{raster::RasterImage, RenderError, RenderTarget, SharedImage, SpriteImage},
        sprite::{
            collision::is_colliding,
            factory::{SpawnBounds, SpawnConfig, SpriteFactory},
            group::SpriteGroup,
            transient::TransientSprite,
            SimpleSprite, Sprite,
        },
    };
}
