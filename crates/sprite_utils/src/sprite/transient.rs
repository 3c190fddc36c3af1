//! Transient sprites
//!
//! Wraps any [`SimpleSprite`] with a lifetime measured in logical game time.
//! Once the lifetime has elapsed the wrapped sprite is dropped and the
//! wrapper stops updating and drawing. Expiry is one-way: an expired
//! wrapper never becomes active again, and the time comparison is not
//! re-evaluated after it has expired.

use super::SimpleSprite;
use crate::render::{RenderResult, RenderTarget};
use std::time::Duration;

#[derive(Debug)]
enum TransientState<S> {
    Active(S),
    Expired,
}

/// A sprite that exists for a limited period of game time
///
/// It is up to the owner to remove expired wrappers from its collections;
/// [`SimpleSprite::is_alive`] reports `false` once expired so
/// [`super::group::SpriteGroup::prune`] can do it.
#[derive(Debug)]
pub struct TransientSprite<S> {
    created_at: Duration,
    lifetime: Duration,
    state: TransientState<S>,
}

impl<S: SimpleSprite> TransientSprite<S> {
    /// Wrap `sprite`, created at game time `created_at`, living for `lifetime`
    #[must_use]
    pub const fn new(sprite: S, created_at: Duration, lifetime: Duration) -> Self {
        Self {
            created_at,
            lifetime,
            state: TransientState::Active(sprite),
        }
    }

    /// Game time at which the wrapper was created
    #[must_use]
    pub const fn created_at(&self) -> Duration {
        self.created_at
    }

    /// How long the wrapped sprite lives
    #[must_use]
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Check if the lifetime has elapsed and the sprite was released
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self.state, TransientState::Expired)
    }

    /// Get remaining lifetime at game time `now`; zero once expired
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        if self.is_expired() {
            return Duration::ZERO;
        }
        self.lifetime.saturating_sub(now.saturating_sub(self.created_at))
    }

    /// The wrapped sprite, if it has not expired
    #[must_use]
    pub const fn inner(&self) -> Option<&S> {
        match &self.state {
            TransientState::Active(sprite) => Some(sprite),
            TransientState::Expired => None,
        }
    }

    /// Mutable access to the wrapped sprite, if it has not expired
    pub fn inner_mut(&mut self) -> Option<&mut S> {
        match &mut self.state {
            TransientState::Active(sprite) => Some(sprite),
            TransientState::Expired => None,
        }
    }

    /// Expire if more than `lifetime` has passed since creation
    fn check_expired(&mut self, now: Duration) {
        if self.is_expired() {
            return;
        }
        let elapsed = now.saturating_sub(self.created_at);
        if elapsed > self.lifetime {
            log::debug!(
                "Transient sprite expired after {:?} (lifetime {:?})",
                elapsed,
                self.lifetime
            );
            self.state = TransientState::Expired;
        }
    }
}

impl<S: SimpleSprite> SimpleSprite for TransientSprite<S> {
    /// Expire if the lifetime has elapsed, otherwise update the wrapped sprite
    fn update(&mut self, now: Duration) {
        self.check_expired(now);

        if let TransientState::Active(sprite) = &mut self.state {
            sprite.update(now);
        }
    }

    /// Draw the wrapped sprite; an expired wrapper draws nothing and succeeds
    fn draw(&self, target: &mut dyn RenderTarget) -> RenderResult<()> {
        match &self.state {
            TransientState::Active(sprite) => sprite.draw(target),
            TransientState::Expired => Ok(()),
        }
    }

    fn is_alive(&self) -> bool {
        !self.is_expired()
    }
}
