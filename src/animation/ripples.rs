//! Ripple entities and their bounded pool
//!
//! A ripple is an expanding ring that fades as it grows and dies when its
//! life runs out or it reaches its maximum radius. Same ownership and cap
//! rules as the particle pool.

use rand::rngs::SmallRng;
use rand::Rng;

/// Global cap on live ripples
pub const MAX_RIPPLES: usize = 10;

/// Radius growth per tick
const GROWTH_STEP: f32 = 3.0;

/// Life decay per tick
const LIFE_DECAY: f32 = 0.02;

/// Maximum-radius range
const MIN_MAX_RADIUS: f32 = 100.0;
const MAX_MAX_RADIUS: f32 = 200.0;

pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub max_radius: f32,
    /// Remaining life in [0, 1]
    pub life: f32,
    /// RGBA; alpha scales with remaining life at draw time
    pub color: [u8; 4],
}

/// Bounded ripple pool
pub struct RippleSystem {
    ripples: Vec<Ripple>,
}

impl RippleSystem {
    pub fn new() -> Self {
        Self {
            ripples: Vec::with_capacity(MAX_RIPPLES),
        }
    }

    /// Spawn one ripple with a randomized maximum radius. Dropped silently
    /// when the pool is full.
    pub fn spawn(&mut self, x: f32, y: f32, color: [u8; 4], rng: &mut SmallRng) {
        if self.ripples.len() >= MAX_RIPPLES {
            return;
        }
        self.ripples.push(Ripple {
            x,
            y,
            radius: 0.0,
            max_radius: rng.gen_range(MIN_MAX_RADIUS..MAX_MAX_RADIUS),
            life: 1.0,
            color,
        });
    }

    /// Grow and fade every ripple one tick, swap-removing finished ones
    pub fn advance(&mut self) {
        let mut i = 0;
        while i < self.ripples.len() {
            let r = &mut self.ripples[i];
            r.radius += GROWTH_STEP;
            r.life -= LIFE_DECAY;
            if r.life <= 0.0 || r.radius > r.max_radius {
                self.ripples.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}

impl Default for RippleSystem {
    fn default() -> Self {
        Self::new()
    }
}
