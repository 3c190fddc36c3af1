//! Owning collection of heterogeneous sprites

use super::SimpleSprite;
use crate::render::{RenderResult, RenderTarget};
use std::time::Duration;

/// A list of boxed sprites updated and drawn together
///
/// A group is itself a [`SimpleSprite`], so groups can be nested or wrapped
/// in a [`super::transient::TransientSprite`] to expire as a unit.
#[derive(Default)]
pub struct SpriteGroup {
    sprites: Vec<Box<dyn SimpleSprite>>,
}

impl SpriteGroup {
    /// Create an empty group
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sprite to the end of the draw order
    pub fn push<S: SimpleSprite + 'static>(&mut self, sprite: S) {
        self.sprites.push(Box::new(sprite));
    }

    /// Number of sprites held, alive or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Check if the group holds no sprites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Update every sprite in insertion order
    pub fn update_all(&mut self, now: Duration) {
        for sprite in &mut self.sprites {
            sprite.update(now);
        }
    }

    /// Draw every sprite in insertion order, stopping at the first error
    pub fn draw_all(&self, target: &mut dyn RenderTarget) -> RenderResult<()> {
        for sprite in &self.sprites {
            sprite.draw(target)?;
        }
        Ok(())
    }

    /// Drop every sprite that reports itself as no longer alive
    ///
    /// Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.sprites.len();
        self.sprites.retain(|sprite| sprite.is_alive());
        let removed = before - self.sprites.len();
        if removed > 0 {
            log::debug!("Pruned {} expired sprites, {} remaining", removed, self.sprites.len());
        }
        removed
    }
}

impl SimpleSprite for SpriteGroup {
    fn update(&mut self, now: Duration) {
        self.update_all(now);
    }

    fn draw(&self, target: &mut dyn RenderTarget) -> RenderResult<()> {
        self.draw_all(target)
    }
}

impl std::fmt::Debug for SpriteGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpriteGroup").field("len", &self.sprites.len()).finish()
    }
}
