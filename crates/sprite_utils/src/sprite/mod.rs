//! Sprites and the capabilities the frame loop drives
//!
//! Every frame the host calls [`SimpleSprite::update`] on each live sprite,
//! then [`SimpleSprite::draw`] on each, then queries collisions for the
//! pairs it cares about.
//!
//! - [`entity`] - the image-backed [`Sprite`]
//! - [`collision`] - pixel-exact overlap testing
//! - [`factory`] - random placement of new sprites
//! - [`transient`] - sprites that expire after a logical lifetime
//! - [`group`] - an owning collection that is itself a sprite

pub mod collision;
pub mod entity;
pub mod factory;
pub mod group;
pub mod transient;

pub use entity::Sprite;

use crate::render::{RenderResult, RenderTarget};
use std::time::Duration;

/// Anything the frame loop can update and draw
///
/// Wrappers such as [`transient::TransientSprite`] and collections such as
/// [`group::SpriteGroup`] only depend on this trait, never on the concrete
/// sprite type they hold.
pub trait SimpleSprite {
    /// Advance one frame; `now` is the logical time since the game started
    fn update(&mut self, now: Duration);

    /// Draw onto `target`, propagating any backend failure unchanged
    fn draw(&self, target: &mut dyn RenderTarget) -> RenderResult<()>;

    /// Whether the owning collection should keep this sprite around
    fn is_alive(&self) -> bool {
        true
    }
}

impl<S: SimpleSprite + ?Sized> SimpleSprite for Box<S> {
    fn update(&mut self, now: Duration) {
        (**self).update(now);
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> RenderResult<()> {
        (**self).draw(target)
    }

    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }
}
